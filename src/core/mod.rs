//! Core functionality for content creation, publishing, and configuration

pub mod config;
pub mod content;
pub mod front_matter;
pub mod launcher;
pub mod publish;
pub mod site;
pub mod slug;
