mod error;
mod google;
mod language;
mod openai;
mod prompt;
mod sse_parser;
mod translator;

pub use error::{TranslateError, TranslateResult};
pub use google::{DEFAULT_GOOGLE_ENDPOINT, GoogleTranslator};
pub use language::{InvalidLanguage, TargetLanguage, print_languages};
pub use openai::OpenAiTranslator;
pub use translator::{TRANSLATION_ERROR, Translator, translate_each, translate_sentences};
