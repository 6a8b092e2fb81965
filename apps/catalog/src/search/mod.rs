// Search pipeline: query → filter extraction (optional) → product filter → presentation.
// All completion calls go through llm_client.

pub mod extractor;
pub mod handlers;
pub mod prompts;
pub mod service;
