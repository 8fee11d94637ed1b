//! linedit
//!
//! A menu-driven console editor for line-oriented text documents.
//!
//! This library provides:
//! - An in-memory document of ordered text lines
//! - Save and load to plain text files
//! - An interactive numbered-menu session over generic I/O handles
//! - Configuration management

pub mod config;
pub mod document;
pub mod error;
pub mod menu;
pub mod session;

// Re-exports for clean public API
pub use config::Config;
pub use document::{Document, SaveReport};
pub use error::EditorError;
pub use menu::MenuCommand;
pub use session::Session;
