//! `{{en-verb}}` extraction from entry wikitext.
//!
//! A focused scanner rather than a general wikitext parser: it finds
//! invocations of the conjugation template, splits their arguments on
//! top-level pipes (pipes inside nested `{{ }}` and `[[ ]]` stay put), trims
//! whitespace, and routes recognized `name=value` pairs to the named
//! overrides. Everything else on the page is ignored.

use lex_core::template::ConjugationTemplate;

/// `{{` plus the template name; what the scanner hunts for.
const OPENING: &str = "{{en-verb";

const PRES_3SG: &str = "pres_3sg";
const PRES_PTC: &str = "pres_ptc";
const PAST: &str = "past";
const PAST_PTC: &str = "past_ptc";

/// Collect every conjugation template in `wikitext`, in document order.
///
/// Invocations that never close are dropped.
#[must_use]
pub fn extract_conjugations(wikitext: &str) -> Vec<ConjugationTemplate> {
    let mut found = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = wikitext[cursor..].find(OPENING) {
        let after = cursor + offset + OPENING.len();
        // The name must end here: anything but whitespace before the first
        // pipe or the closing braces means a longer template name.
        let tail = wikitext[after..].trim_start();
        if !(tail.starts_with('|') || tail.starts_with("}}")) {
            cursor = after;
            continue;
        }
        match parse_invocation(&wikitext[after..]) {
            Some((template, consumed)) => {
                found.push(template);
                cursor = after + consumed;
            }
            // Unterminated: the scan already consumed the rest of the text.
            None => break,
        }
    }

    found
}

/// Parse one invocation body (everything after the template name) up to its
/// closing `}}`. Returns the template and how many bytes were consumed.
fn parse_invocation(body: &str) -> Option<(ConjugationTemplate, usize)> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut braces = 0_usize;
    let mut brackets = 0_usize;
    let mut i = 0;

    while i < body.len() {
        let rest = &body[i..];
        if rest.starts_with("{{") {
            braces += 1;
            current.push_str("{{");
            i += 2;
        } else if rest.starts_with("}}") {
            if braces == 0 {
                segments.push(current);
                return Some((build_template(segments), i + 2));
            }
            braces -= 1;
            current.push_str("}}");
            i += 2;
        } else if rest.starts_with("[[") {
            brackets += 1;
            current.push_str("[[");
            i += 2;
        } else if rest.starts_with("]]") {
            brackets = brackets.saturating_sub(1);
            current.push_str("]]");
            i += 2;
        } else if rest.starts_with('|') && braces == 0 && brackets == 0 {
            segments.push(std::mem::take(&mut current));
            i += 1;
        } else {
            let c = rest.chars().next()?;
            current.push(c);
            i += c.len_utf8();
        }
    }

    None
}

/// Turn pipe-separated segments into a template. The first segment is the
/// whitespace between the name and the first pipe and carries no argument.
fn build_template(segments: Vec<String>) -> ConjugationTemplate {
    let mut template = ConjugationTemplate::default();

    for segment in segments.into_iter().skip(1) {
        let segment = segment.trim();
        match segment.split_once('=') {
            Some((name, value)) => {
                let value = value.trim().to_string();
                match name.trim() {
                    PRES_3SG => template.third_person = Some(value),
                    PRES_PTC => template.present_participle = Some(value),
                    PAST => template.past = Some(value),
                    PAST_PTC => template.past_participle = Some(value),
                    // head=, nocat=, numbered params: not conjugation data.
                    _ => {}
                }
            }
            None => template.args.push(segment.to_string()),
        }
    }

    template
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn plain_entry_has_no_templates() {
        let found = extract_conjugations("==English==\n===Noun===\n{{en-noun}}\n");
        assert!(found.is_empty());
    }

    #[test]
    fn bare_invocation_yields_empty_template() {
        let found = extract_conjugations("===Verb===\n{{en-verb}}\n\n# To walk.\n");
        assert_eq!(found, vec![ConjugationTemplate::default()]);
    }

    #[test]
    fn positional_arguments_split_on_pipes() {
        let found = extract_conjugations("{{en-verb|bus|s|es}}");
        assert_eq!(found, vec![ConjugationTemplate::positional(["bus", "s", "es"])]);
    }

    #[test]
    fn whitespace_around_arguments_is_trimmed() {
        let found = extract_conjugations("{{en-verb | carr | ies }}");
        assert_eq!(found, vec![ConjugationTemplate::positional(["carr", "ies"])]);
    }

    #[test]
    fn empty_positional_arguments_are_kept() {
        let found = extract_conjugations("{{en-verb|bus||es}}");
        assert_eq!(found, vec![ConjugationTemplate::positional(["bus", "", "es"])]);
    }

    #[test]
    fn named_arguments_route_to_overrides() {
        let found =
            extract_conjugations("{{en-verb|pres_3sg=goes|pres_ptc=going|past=went|past_ptc=gone}}");
        assert_eq!(
            found,
            vec![ConjugationTemplate {
                args: vec![],
                third_person: Some("goes".to_string()),
                present_participle: Some("going".to_string()),
                past: Some("went".to_string()),
                past_participle: Some("gone".to_string()),
            }]
        );
    }

    #[test]
    fn unknown_named_arguments_are_dropped() {
        let found = extract_conjugations("{{en-verb|head=walk about|walks|walking|walked}}");
        assert_eq!(
            found,
            vec![ConjugationTemplate::positional(["walks", "walking", "walked"])]
        );
    }

    #[test]
    fn nested_templates_keep_their_pipes() {
        let found = extract_conjugations("{{en-verb|head={{l|en|walk}} about|es}}");
        assert_eq!(found, vec![ConjugationTemplate::positional(["es"])]);
    }

    #[test]
    fn nested_links_keep_their_pipes() {
        let found = extract_conjugations("{{en-verb|past=[[ran|run]]}}");
        assert_eq!(
            found,
            vec![ConjugationTemplate {
                past: Some("[[ran|run]]".to_string()),
                ..ConjugationTemplate::default()
            }]
        );
    }

    #[test]
    fn several_invocations_come_back_in_order() {
        let found = extract_conjugations(
            "===Verb===\n{{en-verb|es}}\n===Verb 2===\n{{en-verb|d}}\n",
        );
        assert_eq!(
            found,
            vec![
                ConjugationTemplate::positional(["es"]),
                ConjugationTemplate::positional(["d"]),
            ]
        );
    }

    #[test]
    fn longer_template_names_do_not_match() {
        let found = extract_conjugations("{{en-verb-obsolete|es}} {{en-verbal}}");
        assert!(found.is_empty());
    }

    #[test]
    fn unterminated_invocation_is_dropped() {
        let found = extract_conjugations("{{en-verb|bus|s|es");
        assert!(found.is_empty());
    }

    #[test]
    fn unterminated_invocation_does_not_hide_earlier_ones() {
        let found = extract_conjugations("{{en-verb|es}} then {{en-verb|bus|s");
        assert_eq!(found, vec![ConjugationTemplate::positional(["es"])]);
    }

    #[test]
    fn multiline_invocations_parse() {
        let found = extract_conjugations("{{en-verb\n|carr\n|ies\n}}");
        assert_eq!(found, vec![ConjugationTemplate::positional(["carr", "ies"])]);
    }

    #[test]
    fn named_and_positional_arguments_mix() {
        let found = extract_conjugations("{{en-verb|bus|s|es|past=bussed}}");
        assert_eq!(
            found,
            vec![ConjugationTemplate {
                args: vec!["bus".to_string(), "s".to_string(), "es".to_string()],
                past: Some("bussed".to_string()),
                ..ConjugationTemplate::default()
            }]
        );
    }
}
