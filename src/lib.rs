//! Terminal news reader: debounced search over a news search API with
//! client-side or server-side pagination.

pub mod cli;
pub mod config;
pub mod headless;
pub mod logging;
pub mod news;
pub mod ui;
