// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Appended to every extraction prompt. The response schema is enforced
/// upstream as well, but callers still validate what comes back.
pub const JSON_ONLY_INSTRUCTION: &str = "Respond with a single JSON object only. \
    Do NOT use markdown code fences. \
    Do NOT include explanations. \
    If a value is not present in the source text, use an empty string or empty list \
    rather than inventing one.";
