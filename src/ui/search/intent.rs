use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    Insert { ch: char },
    Backspace,
    Clear,
    /// The committed query changed; show it in the box.
    Resync { committed: Option<String> },
}

impl Intent for SearchIntent {}
