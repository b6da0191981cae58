//! Offline responder used when no live backend credential is configured.
//!
//! The reply is picked from an ordered topic table: the first topic whose
//! keyword occurs in the user's text (case-insensitive) wins. Nothing
//! matching yields a capability overview naming the requested model.

mod templates;

use crate::models::ModelId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Code,
    Data,
    Creative,
    ProblemSolving,
}

struct TopicRule {
    topic: Topic,
    keywords: &'static [&'static str],
    template: &'static str,
}

/// Priority order. Earlier rows win ties.
const RULES: &[TopicRule] = &[
    TopicRule {
        topic: Topic::Code,
        keywords: &["code", "function", "programming"],
        template: templates::CODE,
    },
    TopicRule {
        topic: Topic::Data,
        keywords: &["analyze", "data", "statistics"],
        template: templates::DATA,
    },
    TopicRule {
        topic: Topic::Creative,
        keywords: &["write", "story", "creative"],
        template: templates::CREATIVE,
    },
    TopicRule {
        topic: Topic::ProblemSolving,
        keywords: &["help", "how to", "solve"],
        template: templates::PROBLEM_SOLVING,
    },
];

fn matching_rule(text: &str) -> Option<&'static TopicRule> {
    let lower = text.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
}

pub fn classify(text: &str) -> Option<Topic> {
    matching_rule(text).map(|rule| rule.topic)
}

/// Builds the canned reply for `last_user_text`. Never empty.
pub fn synthesize(last_user_text: &str, model: &ModelId) -> String {
    match matching_rule(last_user_text) {
        Some(rule) => rule.template.to_string(),
        None => templates::OVERVIEW.replace("{model}", &model.as_str().to_uppercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_topic_is_reachable() {
        assert_eq!(classify("Show me some CODE"), Some(Topic::Code));
        assert_eq!(classify("What do these statistics mean?"), Some(Topic::Data));
        assert_eq!(classify("Tell me a story"), Some(Topic::Creative));
        assert_eq!(classify("How to fix a flat tire"), Some(Topic::ProblemSolving));
        assert_eq!(classify("Good morning"), None);
    }

    #[test]
    fn priority_order_is_code_data_creative_problem_solving() {
        assert_eq!(classify("code for my data"), Some(Topic::Code));
        assert_eq!(classify("write a story about data"), Some(Topic::Data));
        assert_eq!(classify("help me write a poem"), Some(Topic::Creative));
        assert_eq!(classify("help me solve this function"), Some(Topic::Code));
    }

    #[test]
    fn code_beats_data_in_rendered_reply() {
        let reply = synthesize("please analyze the data in this code", &ModelId::Gpt4o);
        assert_eq!(reply, templates::CODE);
        assert_ne!(reply, templates::DATA);
    }

    #[test]
    fn empty_input_yields_overview_with_uppercased_model() {
        let reply = synthesize("", &ModelId::Claude35Sonnet);
        assert!(reply.contains("CLAUDE-3.5-SONNET"));
        assert!(!reply.contains("{model}"));
    }

    #[test]
    fn unknown_model_is_displayed_verbatim_uppercased() {
        let reply = synthesize("hello there", &ModelId::from("mistral-large"));
        assert!(reply.contains("MISTRAL-LARGE"));
    }

    #[test]
    fn code_template_has_fenced_block_and_capabilities() {
        let reply = synthesize("Can you help me write a function?", &ModelId::Gpt4o);
        assert!(reply.contains("```javascript"));
        assert!(reply.contains("Error handling"));
    }

    #[test]
    fn overview_keeps_response_qualities_and_closing_line() {
        let reply = synthesize("Good morning", &ModelId::Gpt4o);
        assert!(reply.starts_with("Great question! I'm GPT-4O, and I'm here"));
        for quality in ["**Accurate**", "**Detailed**", "**Practical**", "**Clear**"] {
            assert!(reply.contains(quality), "{quality}");
        }
        assert!(reply.ends_with("from coding and analysis to creative projects and problem-solving!"));
    }

    #[test]
    fn never_empty() {
        for text in ["", " ", "???", "DATA", "how to", "🦀"] {
            assert!(!synthesize(text, &ModelId::Gpt35Turbo).trim().is_empty(), "{text:?}");
        }
    }
}
