use serde_json::{json, Value};

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Resume extraction prompt template. Replace `{resume_text}` before sending.
pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = "\
Extract the following details from this resume text into a structured JSON format:
Name, Email, Phone, Skills, Experience (title, company, duration), and Education (degree, institution, year).

{json_only}

Resume Text:
{resume_text}";

pub fn build_resume_prompt(resume_text: &str) -> String {
    RESUME_PARSE_PROMPT_TEMPLATE
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{resume_text}", resume_text)
}

/// Output schema declared to Gemini. `phone` is the only optional field.
pub fn resume_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "email": { "type": "STRING" },
            "phone": { "type": "STRING" },
            "skills": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "experience": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "company": { "type": "STRING" },
                        "duration": { "type": "STRING" }
                    },
                    "required": ["title", "company", "duration"]
                }
            },
            "education": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "degree": { "type": "STRING" },
                        "institution": { "type": "STRING" },
                        "year": { "type": "STRING" }
                    },
                    "required": ["degree", "institution", "year"]
                }
            }
        },
        "required": ["name", "email", "skills", "experience", "education"]
    })
}
