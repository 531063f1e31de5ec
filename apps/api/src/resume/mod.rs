// Resume parsing: raw resume text in, validated `ResumeData` out.
// All LLM calls go through llm_client. File-to-text extraction happens
// before text reaches this module.

pub mod handlers;
pub mod parser;
pub mod prompts;

pub use parser::{GeminiResumeParser, ResumeExtractor};
