//! Article feed view model.
//!
//! [`prepare`] turns the raw server list into what the feed shows. An empty
//! list and a list whose every article is filtered out are distinct: the
//! first shows a placeholder, the second shows nothing at all.

use crate::error::NetworkError;
use crate::models::{Article, Relevance};
use crate::state::status::StatusKind;

pub const LOADING_TEXT: &str = "Loading articles...";
pub const LOAD_ERROR_TEXT: &str = "Error loading articles.";
pub const NO_ARTICLES_TEXT: &str = "No articles found. Try refreshing feeds.";

pub const REFRESH_LABEL: &str = "Refresh Feeds";
pub const INGESTING_LABEL: &str = "Ingesting...";
pub const INGEST_ERROR_TEXT: &str = "Error during ingestion.";

/// One rendered article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    pub title: String,
    pub url: String,
    pub summary: String,
    pub category: String,
    pub published_date: String,
    pub badge_label: String,
    pub relevance: Relevance,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
}

impl ArticleCard {
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            url: article.url.clone(),
            summary: article.summary.clone(),
            category: article.category.clone(),
            published_date: article.published_date.clone(),
            badge_label: article.badge_label().to_string(),
            relevance: article.relevance(),
            tags: article.tags.clone(),
            image_url: article.image().map(str::to_string),
        }
    }

    pub fn badge_class(&self) -> &'static str {
        self.relevance.class_name()
    }

    /// `published_date • category`
    pub fn meta(&self) -> String {
        format!("{} • {}", self.published_date, self.category)
    }
}

/// What the feed render target holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedContent {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Failed,
    NoArticles,
    /// Included articles in source order; may be empty
    Cards(Vec<ArticleCard>),
}

impl FeedContent {
    /// Placeholder text, if this state shows one.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            FeedContent::Loading => Some(LOADING_TEXT),
            FeedContent::Failed => Some(LOAD_ERROR_TEXT),
            FeedContent::NoArticles => Some(NO_ARTICLES_TEXT),
            FeedContent::Idle | FeedContent::Cards(_) => None,
        }
    }
}

/// Filter and categorize a raw article list, keeping source order.
pub fn prepare(articles: &[Article]) -> FeedContent {
    if articles.is_empty() {
        return FeedContent::NoArticles;
    }
    let cards = articles
        .iter()
        .filter(|article| article.is_included())
        .map(ArticleCard::from_article)
        .collect();
    FeedContent::Cards(cards)
}

/// The refresh trigger: disabled with a busy label while ingesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefreshControl {
    busy: bool,
}

impl RefreshControl {
    pub fn is_enabled(&self) -> bool {
        !self.busy
    }

    pub fn label(&self) -> &'static str {
        if self.busy {
            INGESTING_LABEL
        } else {
            REFRESH_LABEL
        }
    }

    /// Disable the control. Returns false if it was already disabled, in
    /// which case the activation is ignored.
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    /// Re-enable the control and restore its label.
    pub fn finish(&mut self) {
        self.busy = false;
    }
}

/// Status message for an ingest outcome.
pub fn ingest_outcome(result: &Result<u64, NetworkError>) -> (String, StatusKind) {
    match result {
        Ok(count) => (
            format!("Ingestion complete. {} new articles.", count),
            StatusKind::Success,
        ),
        Err(_) => (INGEST_ERROR_TEXT.to_string(), StatusKind::Error),
    }
}

#[derive(Debug, Clone, Default)]
pub struct FeedState {
    pub content: FeedContent,
    pub refresh: RefreshControl,
    selected: usize,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the loading placeholder.
    pub fn begin_load(&mut self) {
        self.content = FeedContent::Loading;
    }

    /// Replace the loading placeholder with the outcome of a load.
    pub fn apply_articles(&mut self, result: Result<Vec<Article>, NetworkError>) {
        self.content = match result {
            Ok(articles) => {
                let content = prepare(&articles);
                tracing::info!(
                    "Loaded {} articles, showing {}",
                    articles.len(),
                    match &content {
                        FeedContent::Cards(cards) => cards.len(),
                        _ => 0,
                    }
                );
                content
            }
            Err(err) => {
                tracing::warn!("Article load failed [{}]: {}", err.error_code(), err);
                FeedContent::Failed
            }
        };
        let count = self.cards().len();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }

    pub fn cards(&self) -> &[ArticleCard] {
        match &self.content {
            FeedContent::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        (!self.cards().is_empty()).then_some(self.selected)
    }

    pub fn selected_card(&self) -> Option<&ArticleCard> {
        self.cards().get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.cards().len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
