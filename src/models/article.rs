//! Article model and relevance classification.

use serde::{Deserialize, Serialize};

use super::{deserialize_nullable_string, deserialize_nullable_vec};

/// Score assumed for articles the server sent without a relevance label.
pub const DEFAULT_SCORE: &str = "low";

/// Badge text shown when an article has no relevance label.
pub const DEFAULT_BADGE_LABEL: &str = "Low";

/// An article as served by `GET /api/articles`.
///
/// Display fields are opaque strings; `null` from the server reads as "".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Article {
    /// Server row id, only used for logging
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub summary: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub category: String,
    /// Display string, never parsed
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub published_date: String,
    /// Free-form label such as "High", "Medium" or "Low"
    #[serde(default)]
    pub relevance_score: Option<String>,
    /// Tags in server order
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Article {
    /// The relevance label if present and non-empty.
    pub fn score(&self) -> Option<&str> {
        self.relevance_score.as_deref().filter(|s| !s.is_empty())
    }

    /// Lower-cased relevance label, `"low"` when absent.
    pub fn normalized_score(&self) -> String {
        self.score()
            .map(str::to_lowercase)
            .unwrap_or_else(|| DEFAULT_SCORE.to_string())
    }

    /// Whether the feed shows this article.
    ///
    /// Any score containing "low" anywhere is excluded, including labels
    /// like "low-priority" and the default for missing scores.
    pub fn is_included(&self) -> bool {
        !self.normalized_score().contains("low")
    }

    /// Badge category derived from the score.
    pub fn relevance(&self) -> Relevance {
        Relevance::classify(&self.normalized_score())
    }

    /// Text printed inside the relevance badge.
    pub fn badge_label(&self) -> &str {
        self.score().unwrap_or(DEFAULT_BADGE_LABEL)
    }

    /// Image URL if present and non-empty.
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|s| !s.is_empty())
    }
}

/// Display category of an included article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relevance {
    High,
    Medium,
    Low,
}

impl Relevance {
    /// Classify an already lower-cased score. "high" wins over "medium";
    /// anything else falls back to `Low`.
    pub fn classify(normalized: &str) -> Self {
        if normalized.contains("high") {
            Relevance::High
        } else if normalized.contains("medium") {
            Relevance::Medium
        } else {
            Relevance::Low
        }
    }

    /// Badge class name, e.g. `relevance-high`.
    pub fn class_name(self) -> &'static str {
        match self {
            Relevance::High => "relevance-high",
            Relevance::Medium => "relevance-medium",
            Relevance::Low => "relevance-low",
        }
    }
}
