//! The form inference engine.
//!
//! Derives the five inflected forms of a verb lemma from its conjugation
//! template. The template format layers meaning: positional arguments pick a
//! baseline through several shorthand encodings, matched in priority order,
//! and named arguments are explicit corrections applied last. Every branch
//! constructs a fresh [`InflectionSet`]; nothing is patched in place, so the
//! override precedence is checkable on its own.

use lex_core::forms::InflectionSet;
use lex_core::template::ConjugationTemplate;

use crate::error::InferenceError;

/// Shorthand endings reserved by the template format.
///
/// A third positional argument equal to one of these selects the stem+ending
/// encoding instead of being read as a literal past form.
pub const STEM_MARKERS: [&str; 5] = ["d", "ed", "es", "ing", "s"];

fn is_stem_marker(arg: &str) -> bool {
    STEM_MARKERS.contains(&arg)
}

/// Derive the inflected forms of `lemma` from its conjugation templates.
///
/// Exactly one template must be present; entries with none or several are
/// ambiguous and left to human review. The positional encodings, in priority
/// order:
///
/// 1. more than three arguments starting with the lemma itself: legacy
///    syntax, rejected
/// 2. three arguments whose last is a reserved marker: stem+ending shorthand
///    over `args[0] + args[1]`
/// 3. three arguments otherwise: literal third person, present participle
///    and past (the past doubles as past participle)
/// 4. four arguments: all four non-infinitive forms, fully independent
/// 5. anything else: stem shorthand with regular suffixes and at most one
///    ending override
///
/// Named template arguments are applied last and win over all of the above.
///
/// # Errors
///
/// [`InferenceError::AmbiguousTemplate`] for zero or several templates,
/// [`InferenceError::LegacySyntax`] for the lemma-repeating convention, and
/// [`InferenceError::UnknownStemMarker`] from the stem+ending dispatch.
pub fn infer_forms(
    lemma: &str,
    templates: &[ConjugationTemplate],
) -> Result<InflectionSet, InferenceError> {
    let [template] = templates else {
        return Err(InferenceError::AmbiguousTemplate {
            count: templates.len(),
        });
    };

    let args = &template.args;
    if args.len() > 3 && args[0] == lemma {
        return Err(InferenceError::LegacySyntax {
            arg_count: args.len(),
        });
    }

    let base = match args.as_slice() {
        [stem, infix, marker] if is_stem_marker(marker) => {
            stem_ending(lemma, stem, infix, marker)?
        }
        [third, participle, past] => InflectionSet {
            infinitive: lemma.to_string(),
            third_person: third.clone(),
            simple_past: past.clone(),
            present_participle: participle.clone(),
            past_participle: past.clone(),
        },
        [third, participle, past, past_participle] => InflectionSet {
            infinitive: lemma.to_string(),
            third_person: third.clone(),
            simple_past: past.clone(),
            present_participle: participle.clone(),
            past_participle: past_participle.clone(),
        },
        other => stem_shorthand(lemma, other),
    };

    Ok(apply_overrides(base, template))
}

/// The stem+ending shorthand: `(stem, infix, marker)` builds the marked form
/// from `stem + infix` and regular suffixes for the rest.
fn stem_ending(
    lemma: &str,
    stem: &str,
    infix: &str,
    marker: &str,
) -> Result<InflectionSet, InferenceError> {
    let base = format!("{stem}{infix}");
    let forms = match marker {
        "d" | "ed" => InflectionSet {
            infinitive: lemma.to_string(),
            third_person: format!("{lemma}s"),
            simple_past: format!("{base}{marker}"),
            present_participle: format!("{base}ing"),
            past_participle: format!("{base}{marker}"),
        },
        // The ing shorthand falls back to lemma + "d" for both past forms,
        // not base + "ed": {{en-verb|d|y|ing}} on "dye" must give "dyed".
        "ing" => InflectionSet {
            infinitive: lemma.to_string(),
            third_person: format!("{lemma}s"),
            simple_past: format!("{lemma}d"),
            present_participle: format!("{base}ing"),
            past_participle: format!("{lemma}d"),
        },
        "es" | "s" => InflectionSet {
            infinitive: lemma.to_string(),
            third_person: format!("{base}{marker}"),
            simple_past: format!("{base}ed"),
            present_participle: format!("{base}ing"),
            past_participle: format!("{base}ed"),
        },
        other => {
            return Err(InferenceError::UnknownStemMarker {
                marker: other.to_string(),
            });
        }
    };
    Ok(forms)
}

/// Argument counts without a dedicated encoding: an optional stem override
/// followed by at most one recognized ending. Extra arguments are ignored
/// rather than rejected.
fn stem_shorthand(lemma: &str, args: &[String]) -> InflectionSet {
    let (stem, rest) = match args {
        [first, rest @ ..] if !is_stem_marker(first) => (first.as_str(), rest),
        _ => (lemma, args),
    };

    let defaults = InflectionSet {
        infinitive: lemma.to_string(),
        third_person: format!("{lemma}s"),
        simple_past: format!("{stem}ed"),
        present_participle: format!("{stem}ing"),
        past_participle: format!("{stem}ed"),
    };

    match rest.first().map(String::as_str) {
        Some("es") => InflectionSet {
            third_person: format!("{stem}es"),
            ..defaults
        },
        Some("d") => InflectionSet {
            simple_past: format!("{stem}d"),
            past_participle: format!("{stem}d"),
            ..defaults
        },
        Some("ies") => InflectionSet {
            third_person: format!("{stem}ies"),
            simple_past: format!("{stem}ied"),
            past_participle: format!("{stem}ied"),
            // {{en-verb|carr|ies}} on "carry": the participle comes from the
            // lemma ("carrying"), not the stem ("carring").
            present_participle: format!("{lemma}ing"),
            ..defaults
        },
        _ => defaults,
    }
}

/// Named arguments are explicit corrections and outrank every positional
/// encoding. A `past` override covers both past forms; a `past_participle`
/// override then outranks it for that one field.
fn apply_overrides(base: InflectionSet, template: &ConjugationTemplate) -> InflectionSet {
    InflectionSet {
        infinitive: base.infinitive,
        third_person: template.third_person.clone().unwrap_or(base.third_person),
        simple_past: template.past.clone().unwrap_or(base.simple_past),
        present_participle: template
            .present_participle
            .clone()
            .unwrap_or(base.present_participle),
        past_participle: template
            .past_participle
            .clone()
            .or_else(|| template.past.clone())
            .unwrap_or(base.past_participle),
    }
}
