//! The `wbeditentity` new-lexeme document.
//!
//! Item ids follow the lexeme form templates used by the review tooling:
//! one form per inflection, each tagged with its grammatical features.

use lex_core::forms::InflectionSet;
use serde_json::{Value, json};

use crate::model::ApiAction;

/// Q1860 — English.
pub const LANGUAGE_ENGLISH: &str = "Q1860";
/// Q24905 — verb.
pub const LEXICAL_CATEGORY_VERB: &str = "Q24905";

/// Q3910936 — simple present (doubles as the infinitive's feature).
pub const FEATURES_INFINITIVE: [&str; 1] = ["Q3910936"];
/// Q110786 singular, Q3910936 simple present, Q51929074 third person.
pub const FEATURES_THIRD_PERSON: [&str; 3] = ["Q110786", "Q3910936", "Q51929074"];
/// Q1392475 — simple past.
pub const FEATURES_SIMPLE_PAST: [&str; 1] = ["Q1392475"];
/// Q10345583 — present participle.
pub const FEATURES_PRESENT_PARTICIPLE: [&str; 1] = ["Q10345583"];
/// Q1230649 — past participle.
pub const FEATURES_PAST_PARTICIPLE: [&str; 1] = ["Q1230649"];

/// The new-lexeme document for `forms`, lemma taken from the infinitive.
#[must_use]
pub fn new_lexeme_document(forms: &InflectionSet) -> Value {
    json!({
        "type": "lexeme",
        "language": LANGUAGE_ENGLISH,
        "lexicalCategory": LEXICAL_CATEGORY_VERB,
        "senses": [],
        "lemmas": {
            "en": { "language": "en", "value": forms.infinitive }
        },
        "forms": [
            form(&forms.infinitive, &FEATURES_INFINITIVE),
            form(&forms.third_person, &FEATURES_THIRD_PERSON),
            form(&forms.simple_past, &FEATURES_SIMPLE_PAST),
            form(&forms.present_participle, &FEATURES_PRESENT_PARTICIPLE),
            form(&forms.past_participle, &FEATURES_PAST_PARTICIPLE),
        ],
        "claims": {},
    })
}

/// The accept button's API action: create the lexeme in one edit.
#[must_use]
pub fn create_action(forms: &InflectionSet) -> ApiAction {
    ApiAction {
        action: "wbeditentity".to_string(),
        new: "lexeme".to_string(),
        data: new_lexeme_document(forms).to_string(),
    }
}

fn form(representation: &str, features: &[&str]) -> Value {
    json!({
        "claims": {},
        "add": "",
        "grammaticalFeatures": features,
        "representations": {
            "en": { "language": "en", "value": representation }
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn forms() -> InflectionSet {
        InflectionSet {
            infinitive: "zorble".to_string(),
            third_person: "zorbles".to_string(),
            simple_past: "zorbled".to_string(),
            present_participle: "zorbling".to_string(),
            past_participle: "zorbled".to_string(),
        }
    }

    #[test]
    fn document_carries_language_and_category() {
        let doc = new_lexeme_document(&forms());
        assert_eq!(doc["type"], "lexeme");
        assert_eq!(doc["language"], "Q1860");
        assert_eq!(doc["lexicalCategory"], "Q24905");
        assert_eq!(doc["lemmas"]["en"]["value"], "zorble");
        assert_eq!(doc["senses"], json!([]));
        assert_eq!(doc["claims"], json!({}));
    }

    #[test]
    fn five_forms_with_their_features() {
        let doc = new_lexeme_document(&forms());
        let entries = doc["forms"].as_array().unwrap();
        assert_eq!(entries.len(), 5);

        assert_eq!(entries[0]["representations"]["en"]["value"], "zorble");
        assert_eq!(entries[0]["grammaticalFeatures"], json!(["Q3910936"]));
        assert_eq!(entries[1]["representations"]["en"]["value"], "zorbles");
        assert_eq!(
            entries[1]["grammaticalFeatures"],
            json!(["Q110786", "Q3910936", "Q51929074"])
        );
        assert_eq!(entries[2]["grammaticalFeatures"], json!(["Q1392475"]));
        assert_eq!(entries[3]["grammaticalFeatures"], json!(["Q10345583"]));
        assert_eq!(entries[4]["grammaticalFeatures"], json!(["Q1230649"]));
    }

    #[test]
    fn action_embeds_the_document_as_a_string() {
        let action = create_action(&forms());
        assert_eq!(action.action, "wbeditentity");
        assert_eq!(action.new, "lexeme");

        let embedded: serde_json::Value = serde_json::from_str(&action.data).unwrap();
        assert_eq!(embedded, new_lexeme_document(&forms()));
    }
}
