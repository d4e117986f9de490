use serde::{Deserialize, Serialize};

/// Normalized resume record produced by the extraction pipeline.
///
/// Every leaf field defaults to an empty string or list — a field the LLM could
/// not find is empty, never null or omitted. The five top-level keys are
/// mandatory; their presence is validated before this type is deserialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(default)]
    pub personal_information: PersonalInformation,
    #[serde(default)]
    pub education: Education,
    #[serde(default)]
    pub technical_skills: Vec<SkillEntry>,
    #[serde(default)]
    pub soft_skills: Vec<SkillEntry>,
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInformation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub current_level: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub field: String,
    /// Kept as a string — resumes write years as "2024", "May 2024", "expected 2025".
    #[serde(default)]
    pub graduation_year: String,
    #[serde(default)]
    pub cgpa: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub proficiency: String,
}
