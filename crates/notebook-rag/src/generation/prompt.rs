//! Prompt templates for document question answering

/// Prompt builder for notebook chat
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the context block from `(name, text)` pairs
    ///
    /// Every document is included in full, in the given order.
    pub fn build_context(documents: &[(String, String)]) -> String {
        documents
            .iter()
            .map(|(name, text)| format!("--- Document: {} ---\n{}", name, text))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Build the full prompt sent to the model
    pub fn build_prompt(context: &str, question: &str) -> String {
        format!(
            "You are a helpful assistant. Answer the question based ONLY on the following documents:\n\n{context}\n\nQuestion: {question}",
            context = context,
            question = question
        )
    }
}
