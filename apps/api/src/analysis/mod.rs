// The matching-and-scoring pipeline: normalization, keyword extraction,
// deterministic scoring, structured LLM analysis, reconciliation, and the
// orchestrator tying them together. All LLM calls go through llm_client.

pub mod analyzer;
pub mod handlers;
pub mod keywords;
pub mod normalizer;
pub mod pipeline;
pub mod prompts;
pub mod reconcile;
pub mod scorer;
