//! Terminal thesaurus: look up related words and page through them.

pub mod config;
pub mod logging;
pub mod lookup;
pub mod ui;
