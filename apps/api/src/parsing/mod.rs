//! Local Field Extractor — regex-based fallback that pulls an email, a phone
//! number, and known skills out of raw résumé text without any external call.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Default closed skill vocabulary. Injected through `Config` so deployments
/// can extend the set without a code change.
pub const DEFAULT_SKILL_VOCABULARY: &[&str] = &[
    "python",
    "java",
    "c++",
    "html",
    "css",
    "javascript",
    "react",
    "node.js",
    "sql",
    "mongodb",
];

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[\w.-]+@[\w.-]+\.\w+\b").expect("email regex is valid"));

// Word-boundary anchored: a 10-digit run embedded in a longer digit run or
// glued to letters is NOT a phone number.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{10}\b").expect("phone regex is valid"));

/// Contact fields and skills recovered from raw text. Absent fields are
/// `None`/empty rather than errors — local extraction always succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalParseResult {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
}

/// Scans `text` for contact fields and vocabulary skills.
///
/// - Email and phone: first match in document order wins.
/// - Skills: case-insensitive literal substring containment against the
///   vocabulary. No stemming, no word boundaries — `"node.js"` matches only
///   if that exact substring appears, and `"Java Script"` never yields
///   `javascript`.
pub fn parse_resume(text: &str, vocabulary: &[String]) -> LocalParseResult {
    let email = EMAIL_RE.find(text).map(|m| m.as_str().to_string());
    let phone = PHONE_RE.find(text).map(|m| m.as_str().to_string());

    let lowered = text.to_lowercase();
    let skills = vocabulary
        .iter()
        .filter(|skill| lowered.contains(skill.as_str()))
        .cloned()
        .collect();

    LocalParseResult {
        email,
        phone,
        skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vec<String> {
        DEFAULT_SKILL_VOCABULARY
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_email_first_match_wins() {
        let text = "Contact: a.b@x.com or fallback@example.org";
        let result = parse_resume(text, &vocab());
        assert_eq!(result.email.as_deref(), Some("a.b@x.com"));
    }

    #[test]
    fn test_email_absent_is_none_not_error() {
        let result = parse_resume("no contact details here", &vocab());
        assert_eq!(result.email, None);
    }

    #[test]
    fn test_phone_exact_ten_digit_run() {
        let result = parse_resume("call me at 9876543210 today", &vocab());
        assert_eq!(result.phone.as_deref(), Some("9876543210"));
    }

    // The run is word-boundary anchored: a 10-digit window inside an
    // 11-digit number is not reported as a phone.
    #[test]
    fn test_phone_not_matched_inside_longer_digit_run() {
        let result = parse_resume("order id 98765432101", &vocab());
        assert_eq!(result.phone, None);
    }

    #[test]
    fn test_phone_first_match_wins() {
        let result = parse_resume("home 1111111111, work 2222222222", &vocab());
        assert_eq!(result.phone.as_deref(), Some("1111111111"));
    }

    #[test]
    fn test_skills_case_insensitive_substring() {
        let result = parse_resume("I know C++ and Python", &vocab());
        assert!(result.skills.contains(&"c++".to_string()));
        assert!(result.skills.contains(&"python".to_string()));
    }

    #[test]
    fn test_skills_no_fuzzy_matching() {
        // "Java Script" (with a space) must not count as javascript, but
        // "java" is a substring of it and does match.
        let result = parse_resume("Java Script enthusiast", &vocab());
        assert!(!result.skills.contains(&"javascript".to_string()));
        assert!(result.skills.contains(&"java".to_string()));
    }

    #[test]
    fn test_multiword_skill_requires_exact_substring() {
        let with_dot = parse_resume("built services in node.js", &vocab());
        assert!(with_dot.skills.contains(&"node.js".to_string()));

        let without_dot = parse_resume("built services in nodejs", &vocab());
        assert!(!without_dot.skills.contains(&"node.js".to_string()));
    }

    #[test]
    fn test_full_contact_line() {
        let text = "Contact: a.b@x.com, 9876543210, skills: Python, React";
        let result = parse_resume(text, &vocab());
        assert_eq!(
            result,
            LocalParseResult {
                email: Some("a.b@x.com".to_string()),
                phone: Some("9876543210".to_string()),
                skills: vec!["python".to_string(), "react".to_string()],
            }
        );
    }

    #[test]
    fn test_empty_text_yields_empty_result() {
        let result = parse_resume("", &vocab());
        assert_eq!(result.email, None);
        assert_eq!(result.phone, None);
        assert!(result.skills.is_empty());
    }

    #[test]
    fn test_custom_vocabulary_is_honored() {
        let custom = vec!["rust".to_string(), "tokio".to_string()];
        let result = parse_resume("Rust and Tokio services", &custom);
        assert_eq!(result.skills, vec!["rust", "tokio"]);
    }
}
