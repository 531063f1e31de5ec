use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub title: String,
    pub company: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

/// Structured resume extracted by the AI parser.
///
/// Every field except `phone` is required: decoding fails rather than
/// producing a partially-populated value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceRecord>,
    pub education: Vec<EducationRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_without_phone_deserializes() {
        let json = r#"{
            "name": "Alex Johnson",
            "email": "alex@example.com",
            "skills": ["React"],
            "experience": [{"title": "Engineer", "company": "TechFlow", "duration": "2 years"}],
            "education": [{"degree": "BSc", "institution": "MIT", "year": "2019"}]
        }"#;
        let resume: ResumeData = serde_json::from_str(json).unwrap();
        assert!(resume.phone.is_none());
        assert_eq!(resume.experience[0].company, "TechFlow");
    }

    #[test]
    fn test_resume_missing_skills_is_rejected() {
        let json = r#"{
            "name": "Alex Johnson",
            "email": "alex@example.com",
            "experience": [],
            "education": []
        }"#;
        assert!(serde_json::from_str::<ResumeData>(json).is_err());
    }

    #[test]
    fn test_experience_record_requires_duration() {
        let json = r#"{"title": "Engineer", "company": "TechFlow"}"#;
        assert!(serde_json::from_str::<ExperienceRecord>(json).is_err());
    }
}
