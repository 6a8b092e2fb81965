//! Filter Extractor — asks the completion service to turn a free-text query into a `FilterSet`.
//!
//! Pluggable behind the `FilterExtractor` trait; `AppState` carries an
//! `Option<Arc<dyn FilterExtractor>>` which is `None` when no API key is configured.
//!
//! Parsing is two-stage: locate the greedy `{ ... }` span in the reply, then parse it
//! strictly. A failure at either stage yields `Ok(None)`, never a partial filter set.
//! Transport and API failures are returned as `Err` so the caller can warn the user.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::catalog::filter::FilterSet;
use crate::llm_client::{LlmClient, LlmError};
use crate::search::prompts::filter_extraction_prompt;

/// First `{` through last `}`, across newlines.
static JSON_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("JSON object pattern is valid"));

#[async_trait]
pub trait FilterExtractor: Send + Sync {
    async fn extract(&self, query: &str) -> Result<Option<FilterSet>, LlmError>;
}

/// Production extractor backed by the completion service.
pub struct LlmFilterExtractor(pub LlmClient);

#[async_trait]
impl FilterExtractor for LlmFilterExtractor {
    async fn extract(&self, query: &str) -> Result<Option<FilterSet>, LlmError> {
        let prompt = filter_extraction_prompt(query);
        let text = self.0.complete(&prompt).await?;
        Ok(parse_filter_response(&text))
    }
}

/// Extracts a `FilterSet` from raw completion text.
pub fn parse_filter_response(text: &str) -> Option<FilterSet> {
    let Some(candidate) = JSON_OBJECT.find(text) else {
        debug!("No JSON object found in extraction response");
        return None;
    };

    let value: Value = match serde_json::from_str(candidate.as_str()) {
        Ok(value) => value,
        Err(e) => {
            debug!("Extraction response is not valid JSON: {e}");
            return None;
        }
    };

    // `{}` carries no filters at all; treat it like an unparsable reply.
    match &value {
        Value::Object(map) if !map.is_empty() => {}
        _ => return None,
    }

    match serde_json::from_value::<FilterSet>(value) {
        Ok(filters) => Some(filters),
        Err(e) => {
            debug!("Extraction response does not match the filter shape: {e}");
            None
        }
    }
}
