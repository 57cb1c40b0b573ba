pub const SYSTEM_PROMPT_TEMPLATE: &str = "You are a translator. Translate the sentence given by the user into {target_language}. \
     Output only the translated sentence, on one line, without quotes, notes or explanations.";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_system_prompt(target_language: &str) -> String {
    // {target_language} is a placeholder for string replacement, not a format argument
    SYSTEM_PROMPT_TEMPLATE.replace("{target_language}", target_language)
}
