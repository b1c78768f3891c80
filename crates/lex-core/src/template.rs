//! Parsed conjugation markup.

/// Parsed `{{en-verb}}` markup for one dictionary entry.
///
/// Positional arguments keep their order, including empty values. The four
/// named parameters the format recognizes land in the override fields and
/// always win over whatever the positional arguments produce.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConjugationTemplate {
    /// Positional arguments, in template order.
    pub args: Vec<String>,
    /// `pres_3sg=` override.
    pub third_person: Option<String>,
    /// `pres_ptc=` override.
    pub present_participle: Option<String>,
    /// `past=` override; covers the past participle too unless `past_ptc=`
    /// is also present.
    pub past: Option<String>,
    /// `past_ptc=` override.
    pub past_participle: Option<String>,
}

impl ConjugationTemplate {
    /// Template with positional arguments only.
    pub fn positional<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}
