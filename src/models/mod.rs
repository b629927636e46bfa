mod article;
mod message;
mod request;

pub use article::{Article, Relevance, DEFAULT_BADGE_LABEL, DEFAULT_SCORE};
pub use message::{ChatMessage, Sender, AGENT_UNREACHABLE};
pub use request::{ChatRequest, ChatResponse, ConfigPayload, ErrorBody, IngestResponse};

use serde::{Deserialize, Deserializer};

/// Helper to deserialize nullable strings as empty string
/// Handles both missing fields and explicit null values
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Helper to deserialize a nullable list as an empty Vec
pub(crate) fn deserialize_nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
