//! Decoding of free-text replies from the generation service.
//!
//! The model is asked for JSON but answers in prose often enough that a
//! reply is first stripped of Markdown fences and then classified as
//! parsed JSON, malformed text, or nothing at all. Each caller picks its
//! own degradation from that classification.

use super::models::{AppDescriptor, RankedApps};
use serde_json::Value;

/// Classification of a single reply text.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// The cleaned text was valid JSON.
    Parsed(Value),
    /// The cleaned text was not JSON; carries the cleaned text.
    Malformed(String),
    /// The reply was blank once cleaned.
    Empty,
}

/// The result of a blueprint request.
#[derive(Debug, Clone, PartialEq)]
pub enum Blueprint {
    /// Valid JSON, re-serialized with two-space indentation.
    Document(String),
    /// Whatever the model said when it was not JSON.
    Raw(String),
    Empty,
}

impl Blueprint {
    pub fn text(&self) -> &str {
        match self {
            Blueprint::Document(text) | Blueprint::Raw(text) => text,
            Blueprint::Empty => "",
        }
    }

    pub fn is_document(&self) -> bool {
        matches!(self, Blueprint::Document(_))
    }
}

/// Removes a leading ```` ```json ```` or ```` ``` ```` fence and the
/// matching trailing fence, trimming whitespace around the result.
pub fn strip_code_fences(text: &str) -> String {
    let mut text = text.trim();
    for opener in ["```json", "```"] {
        if let Some(rest) = text.strip_prefix(opener) {
            text = rest.strip_suffix("```").unwrap_or(rest).trim();
        }
    }
    text.to_string()
}

pub fn decode(text: &str) -> Decoded {
    let cleaned = strip_code_fences(text);
    if cleaned.is_empty() {
        return Decoded::Empty;
    }
    match serde_json::from_str::<Value>(&cleaned) {
        Ok(value) => Decoded::Parsed(value),
        Err(_) => Decoded::Malformed(cleaned),
    }
}

impl Decoded {
    /// Reads `triggers` and `actions` lists. Anything missing, non-list or
    /// unparsable yields empty lists.
    pub fn into_ranked(self) -> RankedApps {
        let Decoded::Parsed(value) = self else {
            return RankedApps::default();
        };
        RankedApps {
            triggers: app_list(value.get("triggers")),
            actions: app_list(value.get("actions")),
        }
    }

    /// Reads a top-level list of apps. Any other shape yields an empty list.
    pub fn into_app_list(self) -> Vec<AppDescriptor> {
        match self {
            Decoded::Parsed(value) => app_list(Some(&value)),
            _ => Vec::new(),
        }
    }

    pub fn into_blueprint(self) -> Blueprint {
        match self {
            Decoded::Parsed(value) => match serde_json::to_string_pretty(&value) {
                Ok(pretty) => Blueprint::Document(pretty),
                Err(_) => Blueprint::Raw(value.to_string()),
            },
            Decoded::Malformed(text) => Blueprint::Raw(text),
            Decoded::Empty => Blueprint::Empty,
        }
    }
}

fn app_list(value: Option<&Value>) -> Vec<AppDescriptor> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(AppDescriptor::from_loose).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const RANKED: &str = r#"{"triggers": [{"id": "webhook", "name": "Webhooks"}], "actions": ["Gmail", "HubSpot"]}"#;

    #[test]
    fn test_strip_plain_text_is_trimmed_only() {
        assert_eq!(strip_code_fences("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_json_tagged_fence() {
        assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_untagged_fence() {
        assert_eq!(strip_code_fences("\n```\n[1, 2]\n```\n"), "[1, 2]");
    }

    #[test]
    fn test_fenced_and_unfenced_decode_identically() {
        let plain = decode(RANKED);
        assert_eq!(decode(&format!("```json\n{}\n```", RANKED)), plain);
        assert_eq!(decode(&format!("```\n{}\n```", RANKED)), plain);
        assert!(matches!(plain, Decoded::Parsed(_)));
    }

    #[test]
    fn test_decode_classifies_empty_and_malformed() {
        assert_eq!(decode("   "), Decoded::Empty);
        assert_eq!(decode("```json\n```"), Decoded::Empty);
        assert_eq!(
            decode("  Sure! Here is your automation.  "),
            Decoded::Malformed("Sure! Here is your automation.".to_string())
        );
    }

    #[test]
    fn test_ranked_reads_both_lists() {
        let ranked = decode(RANKED).into_ranked();
        assert_eq!(ranked.triggers.len(), 1);
        assert_eq!(ranked.triggers[0].id, "webhook");
        let names: Vec<_> = ranked.actions.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Gmail", "HubSpot"]);
    }

    #[test]
    fn test_ranked_without_fields_is_empty() {
        assert_eq!(decode(r#"{"apps": []}"#).into_ranked(), RankedApps::default());
        assert_eq!(decode(r#"{"triggers": "gmail", "actions": 3}"#).into_ranked(), RankedApps::default());
        assert_eq!(decode("[1, 2, 3]").into_ranked(), RankedApps::default());
    }

    #[test]
    fn test_ranked_from_malformed_is_empty() {
        assert!(decode("not json at all").into_ranked().is_empty());
    }

    #[test]
    fn test_app_list_requires_top_level_array() {
        let apps = decode(r#"[{"id": "slack", "name": "Slack", "category": "Communication", "description": "Chat"}]"#)
            .into_app_list();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].category, "Communication");

        assert!(decode(r#"{"apps": [{"id": "slack", "name": "Slack"}]}"#).into_app_list().is_empty());
        assert!(decode("no apps today").into_app_list().is_empty());
    }

    #[test]
    fn test_blueprint_document_is_pretty_printed() {
        let blueprint = decode("```json\n{\"name\":\"Demo\",\"flow\":[]}\n```").into_blueprint();
        let expected = serde_json::to_string_pretty(&json!({"name": "Demo", "flow": []})).unwrap();
        assert_eq!(blueprint, Blueprint::Document(expected));
        assert!(blueprint.text().contains("\n  \"flow\""));
    }

    #[test]
    fn test_blueprint_raw_text_passes_through() {
        let blueprint = decode("  I could not build that scenario.\n").into_blueprint();
        assert_eq!(blueprint, Blueprint::Raw("I could not build that scenario.".to_string()));
        assert_eq!(blueprint.text(), "I could not build that scenario.");
        assert!(!blueprint.is_document());
    }

    #[test]
    fn test_blueprint_empty() {
        assert_eq!(decode("").into_blueprint().text(), "");
    }
}
