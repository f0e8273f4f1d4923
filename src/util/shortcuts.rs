//! Keyboard shortcut recognition for toolbar navigation.
//!
//! Chords are Ctrl/Cmd + Shift + one of `[`, `]`, Home, End. Matching uses
//! `KeyboardEvent.code` so layouts that shift brackets still work.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

use registry::NavCommand;

/// Modifier and physical key state of one keydown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyChord {
    pub code: String,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl KeyChord {
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn from_event(ev: &web_sys::KeyboardEvent) -> Self {
        Self {
            code: ev.code(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            alt: ev.alt_key(),
            shift: ev.shift_key(),
        }
    }
}

/// Navigation command bound to `chord`, if any.
#[must_use]
pub fn nav_command_for(chord: &KeyChord) -> Option<NavCommand> {
    if !(chord.ctrl || chord.meta) || !chord.shift || chord.alt {
        return None;
    }
    match chord.code.as_str() {
        "BracketLeft" => Some(NavCommand::Previous),
        "BracketRight" => Some(NavCommand::Next),
        "Home" => Some(NavCommand::First),
        "End" => Some(NavCommand::Last),
        _ => None,
    }
}

/// Whether a target with this tag name accepts text input.
#[must_use]
pub fn is_editable_target(tag_name: &str, content_editable: bool) -> bool {
    content_editable || matches!(tag_name.to_ascii_uppercase().as_str(), "INPUT" | "TEXTAREA" | "SELECT")
}

/// Editable-target check against a live event.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn event_targets_editable(ev: &web_sys::KeyboardEvent) -> bool {
    use wasm_bindgen::JsCast;

    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok())
        .is_some_and(|el| is_editable_target(&el.tag_name(), el.is_content_editable()))
}
