// Text processing: simplification, vocabulary and speech preparation.
// All LLM calls go through llm_client; failures fall back to the local simplifier.

pub mod handlers;
pub mod processor;
pub mod prompts;
pub mod speech;
