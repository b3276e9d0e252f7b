//! Caller-supplied structured résumé record for the AI builder endpoint.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Structured résumé input submitted directly by a caller — no PDF involved.
/// Education is required and ordered; experience, projects, and skills are
/// optional. The normalized record is echoed back in the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredResumeInput {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl StructuredResumeInput {
    /// Rejects records with blank required fields or an empty education list,
    /// and normalizes the skill list (trim entries, drop empties). An
    /// empty-but-present skills list is valid and stays empty.
    pub fn validate_and_normalize(mut self) -> Result<Self, AppError> {
        let required = [
            ("full_name", &self.full_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("location", &self.location),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} cannot be empty")));
            }
        }

        if self.education.is_empty() {
            return Err(AppError::Validation(
                "at least one education entry is required".to_string(),
            ));
        }
        for (i, entry) in self.education.iter().enumerate() {
            let required = [
                ("degree", &entry.degree),
                ("institution", &entry.institution),
                ("year", &entry.year),
            ];
            for (field, value) in required {
                if value.trim().is_empty() {
                    return Err(AppError::Validation(format!(
                        "education[{i}].{field} cannot be empty"
                    )));
                }
            }
        }

        self.skills = self
            .skills
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(self)
    }
}
