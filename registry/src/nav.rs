//! Slide navigation stepping with wraparound.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use serde::{Deserialize, Serialize};

/// Navigation request issued by a deck or the toolbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavCommand {
    Previous,
    Next,
    First,
    Last,
}

/// Target slide for `command`, or `None` when the deck has at most one slide.
///
/// A `current` id that is missing or not in `slide_ids` is treated as the
/// first slide.
#[must_use]
pub fn step<'a>(slide_ids: &'a [String], current: Option<&str>, command: NavCommand) -> Option<&'a str> {
    let len = slide_ids.len();
    if len <= 1 {
        return None;
    }
    let index = current
        .and_then(|id| slide_ids.iter().position(|s| s == id))
        .unwrap_or(0);
    let target = match command {
        NavCommand::Next => (index + 1) % len,
        NavCommand::Previous => (index + len - 1) % len,
        NavCommand::First => 0,
        NavCommand::Last => len - 1,
    };
    slide_ids.get(target).map(String::as_str)
}
