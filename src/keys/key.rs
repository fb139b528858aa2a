//! Named keyboard keys and their rdev codes.

use std::fmt;

use rdev::Key as RdevKey;

/// A concrete key the dispatcher can press.
///
/// Keys are identified by a lowercase name (`"a"`, `"enter"`, `"space"`).
#[derive(Clone, Copy)]
pub struct Key {
    name: &'static str,
    code: RdevKey,
}

#[rustfmt::skip]
const KEY_TABLE: &[(&str, RdevKey)] = &[
    ("a", RdevKey::KeyA), ("b", RdevKey::KeyB), ("c", RdevKey::KeyC), ("d", RdevKey::KeyD),
    ("e", RdevKey::KeyE), ("f", RdevKey::KeyF), ("g", RdevKey::KeyG), ("h", RdevKey::KeyH),
    ("i", RdevKey::KeyI), ("j", RdevKey::KeyJ), ("k", RdevKey::KeyK), ("l", RdevKey::KeyL),
    ("m", RdevKey::KeyM), ("n", RdevKey::KeyN), ("o", RdevKey::KeyO), ("p", RdevKey::KeyP),
    ("q", RdevKey::KeyQ), ("r", RdevKey::KeyR), ("s", RdevKey::KeyS), ("t", RdevKey::KeyT),
    ("u", RdevKey::KeyU), ("v", RdevKey::KeyV), ("w", RdevKey::KeyW), ("x", RdevKey::KeyX),
    ("y", RdevKey::KeyY), ("z", RdevKey::KeyZ),
    ("0", RdevKey::Num0), ("1", RdevKey::Num1), ("2", RdevKey::Num2), ("3", RdevKey::Num3),
    ("4", RdevKey::Num4), ("5", RdevKey::Num5), ("6", RdevKey::Num6), ("7", RdevKey::Num7),
    ("8", RdevKey::Num8), ("9", RdevKey::Num9),
    ("enter", RdevKey::Return), ("space", RdevKey::Space), ("tab", RdevKey::Tab),
    ("escape", RdevKey::Escape), ("backspace", RdevKey::Backspace), ("delete", RdevKey::Delete),
    ("up", RdevKey::UpArrow), ("down", RdevKey::DownArrow),
    ("left", RdevKey::LeftArrow), ("right", RdevKey::RightArrow),
    ("home", RdevKey::Home), ("end", RdevKey::End),
    ("pageup", RdevKey::PageUp), ("pagedown", RdevKey::PageDown),
    ("shift", RdevKey::ShiftLeft), ("ctrl", RdevKey::ControlLeft),
    ("alt", RdevKey::Alt), ("meta", RdevKey::MetaLeft),
    ("f1", RdevKey::F1), ("f2", RdevKey::F2), ("f3", RdevKey::F3), ("f4", RdevKey::F4),
    ("f5", RdevKey::F5), ("f6", RdevKey::F6), ("f7", RdevKey::F7), ("f8", RdevKey::F8),
    ("f9", RdevKey::F9), ("f10", RdevKey::F10), ("f11", RdevKey::F11), ("f12", RdevKey::F12),
    ("-", RdevKey::Minus), ("=", RdevKey::Equal), (",", RdevKey::Comma), (".", RdevKey::Dot),
    ("/", RdevKey::Slash), (";", RdevKey::SemiColon), ("'", RdevKey::Quote),
    ("[", RdevKey::LeftBracket), ("]", RdevKey::RightBracket), ("\\", RdevKey::BackSlash),
    ("`", RdevKey::BackQuote),
];

/// Alternative spellings accepted when parsing.
const ALIASES: &[(&str, &str)] = &[
    ("return", "enter"),
    ("esc", "escape"),
    ("control", "ctrl"),
    ("cmd", "meta"),
    ("super", "meta"),
];

impl Key {
    /// Look up a key by name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        let canonical = ALIASES
            .iter()
            .find(|(alias, _)| *alias == lower)
            .map(|(_, target)| *target)
            .unwrap_or(lower.as_str());

        KEY_TABLE
            .iter()
            .find(|(n, _)| *n == canonical)
            .map(|&(name, code)| Key { name, code })
    }

    /// Like [`Key::parse`] for names known at compile time.
    ///
    /// # Panics
    /// If `name` is not in the key table.
    pub(crate) fn named(name: &'static str) -> Self {
        match Self::parse(name) {
            Some(key) => key,
            None => panic!("unknown built-in key name {name:?}"),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The rdev code used for injection.
    pub fn code(&self) -> RdevKey {
        self.code
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Key {}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})", self.name)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
