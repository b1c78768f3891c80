//! The tile JSON consumed by the crowdsourcing front end.
//!
//! Shapes mirror the platform's envelope: a tile has an id, display
//! sections, and button control groups whose entries carry a color, a
//! decision code, and optionally the API action the platform performs when
//! the reviewer accepts.

use lex_core::forms::InflectionSet;
use serde::Serialize;

use crate::payload;

/// One human-reviewable micro-task.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Tile {
    pub id: String,
    pub sections: Vec<Section>,
    pub controls: Vec<ControlGroup>,
}

/// A display section of a tile.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Section {
    Text { title: String, text: String },
}

/// A group of controls; the platform renders `buttons` as a row.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ControlGroup {
    #[serde(rename = "type")]
    pub kind: String,
    pub entries: Vec<ButtonControl>,
}

/// One button the reviewer can press.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ButtonControl {
    #[serde(rename = "type")]
    pub color: ButtonColor,
    pub decision: Decision,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_action: Option<ApiAction>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ButtonColor {
    Green,
    White,
    Blue,
}

/// The decision code the platform reports back through `log_action`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Yes,
    Skip,
    No,
}

/// The MediaWiki API call an accepting reviewer triggers.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ApiAction {
    pub action: String,
    pub new: String,
    /// The new-lexeme document, pre-serialized as the platform expects.
    pub data: String,
}

/// Static game listing shown by the platform's catalog.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GameDescriptor {
    pub label: LocalizedText,
    pub description: LocalizedText,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LocalizedText {
    pub en: String,
}

impl Default for GameDescriptor {
    fn default() -> Self {
        Self {
            label: LocalizedText {
                en: "Add verbs from Wiktionary".to_string(),
            },
            description: LocalizedText {
                en: "Import verbs without a {{en-verb}} template from Wiktionary. \
                     Conjugation is done automatically, please verify it."
                    .to_string(),
            },
            icon: "https://upload.wikimedia.org/wikipedia/commons/thumb/0/04/\
                   Labiodental_flap_%28Gentium%29.svg/120px-Labiodental_flap_%28Gentium%29.svg.png"
                .to_string(),
        }
    }
}

impl Tile {
    /// Build the review tile for `verb` with its guessed forms.
    #[must_use]
    pub fn for_verb(verb: &str, forms: &InflectionSet) -> Self {
        Self {
            id: format!("v1-{verb}"),
            sections: vec![Section::Text {
                title: "do these sentences make sense?".to_string(),
                text: example_sentences(forms),
            }],
            controls: vec![ControlGroup {
                kind: "buttons".to_string(),
                entries: vec![
                    ButtonControl {
                        color: ButtonColor::Green,
                        decision: Decision::Yes,
                        label: "Create".to_string(),
                        api_action: Some(payload::create_action(forms)),
                    },
                    ButtonControl {
                        color: ButtonColor::White,
                        decision: Decision::Skip,
                        label: "Skip".to_string(),
                        api_action: None,
                    },
                    ButtonControl {
                        color: ButtonColor::Blue,
                        decision: Decision::No,
                        label: "Incorrect conjugations or not a verb".to_string(),
                        api_action: None,
                    },
                ],
            }],
        }
    }
}

/// One sentence per form, so a reviewer can sanity-check all five at once.
fn example_sentences(forms: &InflectionSet) -> String {
    format!(
        "They {} every day.\n\
         He {} every day.\n\
         He {} every day last week.\n\
         They are {} right now.\n\
         We have {} for hours.\n",
        forms.infinitive,
        forms.third_person,
        forms.simple_past,
        forms.present_participle,
        forms.past_participle
    )
}
