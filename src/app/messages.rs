//! AppMessage enum for async communication within the application.

use crate::error::NetworkError;
use crate::models::Article;
use crate::state::StatusTicket;

/// Results of background tasks, applied on the event loop by
/// [`App::handle_message`](super::App::handle_message).
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A chat send finished
    ChatReply(Result<String, NetworkError>),
    /// An article load finished
    ArticlesLoaded(Result<Vec<Article>, NetworkError>),
    /// An ingest finished, failed or was aborted. Sent exactly once per
    /// refresh.
    IngestFinished(Result<u64, NetworkError>),
    /// A config load finished
    ConfigLoaded(Result<String, NetworkError>),
    /// A config save finished
    ConfigSaved {
        /// What was sent
        content: String,
        result: Result<(), NetworkError>,
    },
    /// The hide timer of one status message fired
    StatusExpired(StatusTicket),
}
