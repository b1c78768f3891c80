//! Fallback conjugation for the review pipeline.
//!
//! The review queue carries lemmas that had no usable template, so their
//! forms are guessed from regular English spelling instead of the engine.
//! The guesser is conservative: anything it cannot treat as a regular base
//! form comes back `None` and the caller rejects the lemma.

use lex_core::forms::InflectionSet;
use lex_core::lemma::MIN_LEMMA_LEN;

/// Black-box conjugation guesser for queue lemmas.
pub trait Conjugator {
    /// Forms for `verb`, or `None` when it cannot be conjugated as a regular
    /// base form. When `Some`, the infinitive equals the input.
    fn conjugate(&self, verb: &str) -> Option<InflectionSet>;
}

/// Regular English spelling rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleConjugator;

impl Conjugator for RuleConjugator {
    fn conjugate(&self, verb: &str) -> Option<InflectionSet> {
        if verb.len() < MIN_LEMMA_LEN || !verb.chars().all(|c| c.is_ascii_lowercase()) {
            return None;
        }
        let (past, participle) = past_and_participle(verb);
        Some(InflectionSet {
            infinitive: verb.to_string(),
            third_person: third_person(verb),
            past_participle: past.clone(),
            simple_past: past,
            present_participle: participle,
        })
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn third_person(verb: &str) -> String {
    if let Some(stem) = verb.strip_suffix('y') {
        if stem.chars().last().is_some_and(|c| !is_vowel(c)) {
            return format!("{stem}ies");
        }
    }
    if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| verb.ends_with(suffix))
    {
        return format!("{verb}es");
    }
    format!("{verb}s")
}

fn past_and_participle(verb: &str) -> (String, String) {
    if verb.ends_with("ee") {
        return (format!("{verb}d"), format!("{verb}ing"));
    }
    if let Some(stem) = verb.strip_suffix('e') {
        return (format!("{verb}d"), format!("{stem}ing"));
    }
    if let Some(stem) = verb.strip_suffix('y') {
        if stem.chars().last().is_some_and(|c| !is_vowel(c)) {
            return (format!("{stem}ied"), format!("{verb}ing"));
        }
    }
    if let Some(doubled) = doubled_stem(verb) {
        return (format!("{doubled}ed"), format!("{doubled}ing"));
    }
    (format!("{verb}ed"), format!("{verb}ing"))
}

/// Monosyllables ending consonant-vowel-consonant double the final letter
/// (stop → stopped). Longer words are left alone; stress is not modeled.
fn doubled_stem(verb: &str) -> Option<String> {
    if verb.len() > 4 {
        return None;
    }
    let mut reversed = verb.chars().rev();
    let last = reversed.next()?;
    let middle = reversed.next()?;
    let first = reversed.next()?;
    (!is_vowel(first) && is_vowel(middle) && !is_vowel(last) && !matches!(last, 'w' | 'x' | 'y'))
        .then(|| format!("{verb}{last}"))
}
