//! View models owned by [`crate::app::App`].
//!
//! Each render target is mutated only through its owning type here, and
//! only from the event loop.

pub mod chat;
pub mod config_editor;
pub mod feed;
pub mod status;
pub mod view;

pub use chat::ChatState;
pub use config_editor::{save_outcome, ConfigEditorState};
pub use feed::{ingest_outcome, prepare, ArticleCard, FeedContent, FeedState, RefreshControl};
pub use status::{StatusKind, StatusReporter, StatusTicket, STATUS_TIMEOUT};
pub use view::{LoadAction, NavControl, Transition, ViewController, ViewId, NAV_CONTROLS};
