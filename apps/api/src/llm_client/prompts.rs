// All generation prompt templates and the functions that fill them in.
// The expected JSON shape is communicated as a textual example only — the
// sanitizer recovers whatever object the model actually returns, and no
// schema validation is applied on top.

use crate::models::StructuredResumeInput;

/// Evaluation prompt. Replace `{resume_text}` before sending.
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"You are an expert resume evaluator and career coach.

Evaluate the resume text below. Your tasks:
1. Extract the candidate's name, email, phone number, and skills.
2. Score the resume from 0 to 100 for overall quality.
3. Rank the resume as one of: "excellent", "good", "average", "poor".
4. List concrete suggested improvements.

Respond with valid JSON only. Do NOT include any text outside the JSON object.
Do NOT use markdown code fences. Use this EXACT schema (no extra fields):
{
  "name": "Jane Doe",
  "email": "jane@example.com",
  "phone": "9876543210",
  "skills": ["python", "react"],
  "score": 78,
  "rank": "good",
  "suggested_improvements": [
    "Quantify the impact of each experience bullet"
  ]
}

Resume text:
{resume_text}"#;

/// Builder prompt. Replace `{input_data}` before sending.
pub const BUILDER_PROMPT_TEMPLATE: &str = r#"You are a professional resume writer.

Using the structured candidate data below, write polished resume content. Your tasks:
1. Write a professional summary (2-3 sentences).
2. Rewrite each experience and project description as impact-focused bullet points.
3. Suggest a clean ordering of sections.

Respond with valid JSON only. Do NOT include any text outside the JSON object.
Do NOT use markdown code fences. Use this EXACT schema (no extra fields):
{
  "professional_summary": "…",
  "experience": [
    {"title": "…", "company": "…", "bullets": ["…"]}
  ],
  "projects": [
    {"name": "…", "bullets": ["…"]}
  ],
  "section_order": ["summary", "experience", "projects", "education", "skills"]
}

Candidate data:
{input_data}"#;

/// Builds the evaluation prompt, appending the extracted text verbatim.
pub fn build_evaluation_prompt(resume_text: &str) -> String {
    EVALUATION_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}

/// Builds the builder prompt from validated structured input, appending the
/// serialized record verbatim.
pub fn build_builder_prompt(input: &StructuredResumeInput) -> String {
    // Plain serde structs with no non-string keys cannot fail to serialize;
    // a panic here beats silently sending a prompt with no candidate data.
    let input_data = serde_json::to_string_pretty(input)
        .expect("structured resume input serializes to JSON");
    BUILDER_PROMPT_TEMPLATE.replace("{input_data}", &input_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EducationEntry, StructuredResumeInput};

    fn minimal_input() -> StructuredResumeInput {
        StructuredResumeInput {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "9876543210".to_string(),
            location: "Pune".to_string(),
            education: vec![EducationEntry {
                degree: "B.Tech".to_string(),
                institution: "IIT".to_string(),
                year: "2024".to_string(),
                grade: None,
            }],
            experience: vec![],
            projects: vec![],
            skills: vec![],
        }
    }

    #[test]
    fn test_evaluation_prompt_appends_text_verbatim() {
        let prompt = build_evaluation_prompt("RAW RESUME TEXT");
        assert!(prompt.ends_with("RAW RESUME TEXT"));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[test]
    fn test_evaluation_prompt_states_schema() {
        let prompt = build_evaluation_prompt("x");
        assert!(prompt.contains("\"score\""));
        assert!(prompt.contains("\"rank\""));
        assert!(prompt.contains("\"suggested_improvements\""));
    }

    #[test]
    fn test_builder_prompt_interpolates_input_data() {
        let prompt = build_builder_prompt(&minimal_input());
        assert!(prompt.contains("Jane Doe"));
        assert!(prompt.contains("jane@example.com"));
        assert!(!prompt.contains("{input_data}"));
    }

    #[test]
    fn test_builder_prompt_carries_every_section_of_the_input() {
        let mut input = minimal_input();
        input.experience = vec![crate::models::ExperienceEntry {
            title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            duration: "2022-2024".to_string(),
            description: Some("Built billing services".to_string()),
        }];
        input.projects = vec![crate::models::ProjectEntry {
            name: "uniplace".to_string(),
            description: None,
            technologies: vec!["react".to_string()],
        }];
        input.skills = vec!["python".to_string()];

        let prompt = build_builder_prompt(&input);
        for expected in ["Backend Engineer", "Built billing services", "uniplace", "python"] {
            assert!(prompt.contains(expected), "prompt missing {expected}");
        }
    }

    #[test]
    fn test_builder_prompt_states_schema() {
        let prompt = build_builder_prompt(&minimal_input());
        assert!(prompt.contains("\"professional_summary\""));
        assert!(prompt.contains("\"section_order\""));
    }
}
