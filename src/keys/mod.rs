//! Key side of the controller: key names, the region table, and dispatch.

mod action;
mod dispatcher;
mod key;
mod keymap;

pub use action::KeyAction;
pub use dispatcher::{DispatchError, Dispatcher, KeyInjector, RdevInjector, DEFAULT_HOLD};
pub use key::Key;
pub use keymap::{IssueKind, KeyMap, KeymapError, KeymapIssue, Slot, WILDCARD_TOKEN};
