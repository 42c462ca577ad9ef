pub mod app;
pub mod debounce;
pub mod events;
pub mod feed;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod pagination;
pub mod render;
pub mod runtime;
pub mod search;
pub mod terminal_guard;
pub mod theme;
