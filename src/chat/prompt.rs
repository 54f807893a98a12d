//! Prompt template for INGRES groundwater queries

/// Join retrieved documents into the context block, rank order preserved
#[must_use]
pub fn assemble_context(documents: &[String]) -> String {
    documents.join("\n\n")
}

/// Build the generation prompt.
///
/// The template is fixed: domain preamble, retrieved context, the verbatim
/// question, a grounding instruction, and the Stage of Extraction
/// classification legend the answer is expected to cite.
#[must_use]
pub fn build_prompt(question: &str, context: &str) -> String {
    format!(
        r"You are an expert assistant for INGRES (India Groundwater Resource Estimation System).

Context from database:
{context}

User Question: {question}

Provide a clear, accurate answer based on the context. Include specific numbers and district names.

Categories:
- Safe: Stage of Extraction < 70%
- Semi-Critical: 70-90%
- Critical: 90-100%
- Over-Exploited: > 100%

Answer:"
    )
}
