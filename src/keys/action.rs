//! What a region fires: one fixed key, or a random pick from a set.

use rand::seq::SliceRandom;
use rand::Rng;

use super::key::Key;

/// A resolved key action for one trigger of a region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Always press this key.
    Concrete(Key),
    /// Press one of these keys, chosen uniformly each time.
    RandomAmong(Vec<Key>),
}

impl KeyAction {
    /// The key to press for this trigger.
    ///
    /// This is the only place a wildcard is turned into a key. Returns
    /// `None` when a `RandomAmong` set is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Key> {
        match self {
            KeyAction::Concrete(key) => Some(*key),
            KeyAction::RandomAmong(candidates) => candidates.choose(rng).copied(),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, KeyAction::RandomAmong(_))
    }
}
