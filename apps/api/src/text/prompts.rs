// All LLM prompt templates for the text-processing module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Full simplification prompt. Replace `{grade}`, `{description}`, `{max_words}`,
/// `{summary_field}` and `{text}` before sending.
pub const SIMPLIFY_PROMPT_TEMPLATE: &str = r#"You are an educational assistant that helps students understand complex text.
Your task is to simplify text to a {grade} reading level ({description}).

Guidelines:
- Use simple, clear language appropriate for {grade} students
- Break down complex sentences into shorter ones (max {max_words} words)
- Replace difficult words with simpler alternatives
- Maintain the original meaning and key concepts
- Use active voice when possible
- Provide clear explanations for important concepts

Please simplify this text for {grade} students and extract key vocabulary:

"{text}"

Return a JSON object with this structure:
{
  "simplifiedText": "simplified version of the text",
  "vocabulary": [
    {vocabulary_item}
  ]{summary_field}
}"#;

/// Appended to the simplification schema when a summary is requested.
pub const SUMMARY_FIELD: &str =
    ",\n  \"summary\": \"brief 2-3 sentence summary of the main points\"";

/// Vocabulary-only prompt. Replace `{grade}` and `{text}` before sending.
pub const VOCABULARY_PROMPT_TEMPLATE: &str = r#"You are an educational assistant that extracts and explains difficult vocabulary from text.
Provide clear, simple definitions that a {grade} student would understand.

Extract the most important vocabulary words from this text and provide simple definitions:

"{text}"

Please return a JSON object with this structure:
{
  "vocabulary": [
    {vocabulary_item}
  ]
}"#;
