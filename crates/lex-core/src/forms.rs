//! Inflected verb forms.

use serde::{Deserialize, Serialize};

/// Field separator of the one-line output record consumed downstream.
pub const RECORD_SEPARATOR: char = '~';

/// The five inflected forms derived for a verb lemma.
///
/// Always fully populated: inference applies defaults wherever the template
/// was silent, and `simple_past` and `past_participle` share a value unless
/// something diverged them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflectionSet {
    pub infinitive: String,
    pub third_person: String,
    pub simple_past: String,
    pub present_participle: String,
    pub past_participle: String,
}

impl InflectionSet {
    /// The all-defaults set for a lemma: `s`, `ed`, `ing`, `ed` suffixes.
    #[must_use]
    pub fn regular(lemma: &str) -> Self {
        Self {
            infinitive: lemma.to_string(),
            third_person: format!("{lemma}s"),
            simple_past: format!("{lemma}ed"),
            present_participle: format!("{lemma}ing"),
            past_participle: format!("{lemma}ed"),
        }
    }

    /// Render the canonical record line, fields in inflection order.
    #[must_use]
    pub fn to_record(&self) -> String {
        let sep = RECORD_SEPARATOR;
        format!(
            "{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.infinitive,
            self.third_person,
            self.simple_past,
            self.present_participle,
            self.past_participle
        )
    }
}
