//! Editing widgets shared by the chat and settings surfaces.

pub mod textarea;

pub use textarea::TextAreaInput;
