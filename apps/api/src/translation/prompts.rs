// LLM prompt templates for translation.

/// Replace `{language}`, `{level}` and `{text}` before sending.
pub const TRANSLATE_PROMPT_TEMPLATE: &str = r#"You are a professional translator and educational assistant.
Your task is to translate text to {language} while maintaining the appropriate reading level ({level}).

Guidelines:
- Provide accurate translation to {language}
- Maintain the same reading level complexity as the original
- Keep the meaning and context intact
- Use natural, fluent language in {language}
- If there are cultural references, adapt them appropriately for {language} speakers

Please translate this text to {language} while maintaining {level} reading level:

"{text}"

Return a JSON object with this structure:
{
  "translatedText": "translated text in {language}"
}"#;
