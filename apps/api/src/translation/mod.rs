// Translation into a fixed set of target languages.
// Requires a configured language model; there is no local fallback.

pub mod handlers;
pub mod languages;
pub mod prompts;
pub mod translator;
