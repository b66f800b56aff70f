//! Answer generation: prompt assembly, model selection and the Gemini client

mod answer;
mod gemini;
pub mod model_select;
mod prompt;
mod provider;

pub use answer::answer_query;
pub use gemini::GeminiClient;
pub use model_select::{select_model, PREFERRED_FAMILY, PREFERRED_MODELS};
pub use prompt::PromptBuilder;
pub use provider::{GenerativeModelApi, ModelInfo};
