//! Resume field extraction: name, email, phone and skills via the LLM.
//!
//! The model is asked for strict JSON. When it answers with something that
//! does not parse, a regex pass salvages what it can from the raw reply.
//! When the call itself fails, the analysis continues with empty fields.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::llm_client::prompts::RESUME_FIELDS_PROMPT;
use crate::llm_client::{parse_json_reply, LlmClient};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeFields {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub skills: Vec<String>,
    pub no_of_pages: u32,
}

impl ResumeFields {
    pub fn empty(no_of_pages: u32) -> Self {
        Self {
            no_of_pages,
            ..Self::default()
        }
    }
}

/// Raw model output; any key may be missing or null, phones may be numbers.
#[derive(Debug, Deserialize)]
struct RawFields {
    name: Option<String>,
    email: Option<String>,
    mobile_number: Option<serde_json::Value>,
    skills: Option<Vec<String>>,
}

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[nN]ame["':\s]+([^"'}\n,]+)"#).expect("valid name regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[eE]mail["':\s]+([^\s,]+)"#).expect("valid email regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:[pP]hone|[mM]obile)(?:_number)?["':.\s]+([\d\s+-]+)"#)
        .expect("valid phone regex")
});
static SKILLS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)[sS]kills["':\s]*\[(.*?)\]"#).expect("valid skills regex"));
static QUOTED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"["']([^"']+)["']"#).expect("valid quoted regex"));

/// Asks the LLM for the structured fields of `head_text`.
pub async fn extract_fields(llm: &LlmClient, head_text: &str, page_count: u32) -> ResumeFields {
    match llm.generate(&[RESUME_FIELDS_PROMPT, head_text]).await {
        Ok(reply) => parse_fields_reply(&reply, page_count),
        Err(e) => {
            error!("Resume field extraction failed: {e}");
            ResumeFields::empty(page_count)
        }
    }
}

/// Parses a model reply, falling back to regex salvage on malformed JSON.
pub fn parse_fields_reply(reply: &str, page_count: u32) -> ResumeFields {
    match parse_json_reply::<RawFields>(reply) {
        Ok(raw) => ResumeFields {
            name: clean_value(raw.name.as_deref().unwrap_or_default()),
            email: clean_value(raw.email.as_deref().unwrap_or_default()),
            mobile_number: raw.mobile_number.map(phone_to_string).unwrap_or_default(),
            skills: clean_skills(raw.skills.unwrap_or_default()),
            no_of_pages: page_count,
        },
        Err(e) => {
            warn!("Field extraction reply was not valid JSON ({e}); using regex fallback");
            salvage_fields(reply, page_count)
        }
    }
}

fn salvage_fields(reply: &str, page_count: u32) -> ResumeFields {
    let capture = |re: &Regex| {
        re.captures(reply)
            .and_then(|c| c.get(1))
            .map(|m| clean_value(m.as_str()))
            .unwrap_or_default()
    };

    let skills = SKILLS_RE
        .captures(reply)
        .and_then(|c| c.get(1))
        .map(|list| {
            QUOTED_RE
                .captures_iter(list.as_str())
                .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
                .collect()
        })
        .unwrap_or_default();

    ResumeFields {
        name: capture(&NAME_RE),
        email: capture(&EMAIL_RE),
        mobile_number: capture(&PHONE_RE),
        skills: clean_skills(skills),
        no_of_pages: page_count,
    }
}

fn phone_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => clean_value(&s),
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn clean_value(s: &str) -> String {
    s.trim().trim_matches(|c| c == '"' || c == '\'').trim().to_string()
}

fn clean_skills(skills: Vec<String>) -> Vec<String> {
    skills
        .iter()
        .map(|s| clean_value(s))
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_json_reply() {
        let reply = r#"{"name": "Jane Doe", "email": "jane@example.com", "mobile_number": "+1 555 0100", "skills": ["Python", " Machine Learning ", ""]}"#;
        let fields = parse_fields_reply(reply, 2);
        assert_eq!(fields.name, "Jane Doe");
        assert_eq!(fields.email, "jane@example.com");
        assert_eq!(fields.mobile_number, "+1 555 0100");
        assert_eq!(fields.skills, vec!["Python", "Machine Learning"]);
        assert_eq!(fields.no_of_pages, 2);
    }

    #[test]
    fn test_nulls_and_numeric_phone() {
        let reply = r#"```json
        {"name": null, "email": "a@b.io", "mobile_number": 5550100, "skills": null}
        ```"#;
        let fields = parse_fields_reply(reply, 1);
        assert_eq!(fields.name, "");
        assert_eq!(fields.mobile_number, "5550100");
        assert!(fields.skills.is_empty());
    }

    #[test]
    fn test_regex_fallback_on_broken_json() {
        // trailing comma and unescaped quote make this invalid JSON
        let reply = r#"{"name": "Sam O"Neil", "email": "sam@example.com", "mobile_number": "+44 20 7946 0000", "skills": ["Kotlin", "Android",]}"#;
        let fields = parse_fields_reply(reply, 3);
        assert_eq!(fields.name, "Sam O");
        assert_eq!(fields.email, "sam@example.com");
        assert_eq!(fields.mobile_number, "+44 20 7946 0000");
        assert_eq!(fields.skills, vec!["Kotlin", "Android"]);
        assert_eq!(fields.no_of_pages, 3);
    }

    #[test]
    fn test_prose_reply_yields_empty_fields() {
        let fields = parse_fields_reply("I could not read this resume.", 1);
        assert_eq!(fields, ResumeFields::empty(1));
    }

    #[test]
    fn test_empty_keeps_page_count() {
        let fields = ResumeFields::empty(5);
        assert_eq!(fields.no_of_pages, 5);
        assert!(fields.skills.is_empty());
    }
}
