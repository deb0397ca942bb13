// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Instruction appended to every prompt that expects structured output.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Shared vocabulary item schema used by simplification prompts.
pub const VOCABULARY_ITEM_SCHEMA: &str = r#"{
      "word": "difficult word",
      "definition": "simple definition",
      "example": "example sentence using the word",
      "difficulty": "basic|intermediate|advanced"
    }"#;
