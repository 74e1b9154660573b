pub mod app;
pub mod events;
pub mod fetcher;
pub mod input;
pub mod layout;
pub mod lookup;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
