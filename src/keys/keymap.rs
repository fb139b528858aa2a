//! Region-to-key table and its line-oriented override file.
//!
//! File format, one assignment per line:
//!
//! ```text
//! # region key
//! 3 x
//! 4 random
//! 8 space
//! ```
//!
//! Only lines whose first token is a single digit 0-8 assign anything.
//! Everything else is skipped and reported back as a [`KeymapIssue`].

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::action::KeyAction;
use super::key::Key;
use crate::motion::{Region, REGION_COUNT};

/// Token that marks a slot as a wildcard.
pub const WILDCARD_TOKEN: &str = "random";

/// One entry of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Key(Key),
    Wildcard,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Key(key) => write!(f, "{}", key),
            Slot::Wildcard => f.write_str(WILDCARD_TOKEN),
        }
    }
}

/// Fixed nine-slot table mapping each region to a key action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    slots: [Slot; REGION_COUNT],
}

impl Default for KeyMap {
    /// `a i b j * l enter k space`, with the centre region as the wildcard.
    fn default() -> Self {
        Self {
            slots: [
                Slot::Key(Key::named("a")),
                Slot::Key(Key::named("i")),
                Slot::Key(Key::named("b")),
                Slot::Key(Key::named("j")),
                Slot::Wildcard,
                Slot::Key(Key::named("l")),
                Slot::Key(Key::named("enter")),
                Slot::Key(Key::named("k")),
                Slot::Key(Key::named("space")),
            ],
        }
    }
}

/// Why a line of the override file was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// Line doesn't start with a region digit.
    NotAnAssignment,
    /// First token starts with a digit but isn't a number, like `3x`.
    InvalidRegion(String),
    /// First token is numeric but not a region 0-8.
    RegionOutOfRange(String),
    /// Region given without a key.
    MissingKey,
    /// Key name not recognised.
    UnknownKey(String),
}

/// A skipped line in the override file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeymapIssue {
    /// 1-based line number
    pub line: usize,
    pub kind: IssueKind,
}

impl fmt::Display for KeymapIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            IssueKind::NotAnAssignment => write!(f, "not a region assignment"),
            IssueKind::InvalidRegion(token) => write!(f, "'{}' is not a region number", token),
            IssueKind::RegionOutOfRange(token) => {
                write!(f, "region '{}' is outside 0-8", token)
            }
            IssueKind::MissingKey => write!(f, "no key given"),
            IssueKind::UnknownKey(name) => write!(f, "unknown key '{}'", name),
        }
    }
}

/// The override file could not be read.
#[derive(Debug, Error)]
#[error("failed to read key map '{}': {source}", path.display())]
pub struct KeymapError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl KeyMap {
    pub fn slot(&self, region: Region) -> Slot {
        self.slots[region.index()]
    }

    pub fn set(&mut self, region: Region, slot: Slot) {
        self.slots[region.index()] = slot;
    }

    /// The action fired when `region` wins.
    ///
    /// A wildcard slot resolves to every concrete slot's key, duplicates
    /// included, so each slot is equally likely to be picked.
    pub fn resolve(&self, region: Region) -> KeyAction {
        match self.slot(region) {
            Slot::Key(key) => KeyAction::Concrete(key),
            Slot::Wildcard => KeyAction::RandomAmong(self.concrete_keys()),
        }
    }

    fn concrete_keys(&self) -> Vec<Key> {
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                Slot::Key(key) => Some(*key),
                Slot::Wildcard => None,
            })
            .collect()
    }

    /// Apply assignments from override text on top of this table.
    ///
    /// Returns the lines that were skipped. Blank lines and `#` comments
    /// are not reported.
    pub fn apply_overrides(&mut self, text: &str) -> Vec<KeymapIssue> {
        let mut issues = Vec::new();

        for (number, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match parse_assignment(line) {
                Ok((region, slot)) => self.set(region, slot),
                Err(kind) => issues.push(KeymapIssue {
                    line: number + 1,
                    kind,
                }),
            }
        }

        issues
    }

    /// Default table with the overrides from `path` applied.
    pub fn load(path: &Path) -> Result<(Self, Vec<KeymapIssue>), KeymapError> {
        let text = std::fs::read_to_string(path).map_err(|source| KeymapError {
            path: path.to_path_buf(),
            source,
        })?;
        let mut map = KeyMap::default();
        let issues = map.apply_overrides(&text);
        Ok((map, issues))
    }

    /// One `region: key` line per slot.
    pub fn describe(&self) -> String {
        Region::ALL
            .iter()
            .map(|&region| format!("{}: {}", region, self.slot(region)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn parse_assignment(line: &str) -> Result<(Region, Slot), IssueKind> {
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return Err(IssueKind::NotAnAssignment);
    };
    if !first.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(IssueKind::NotAnAssignment);
    }

    if !first.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IssueKind::InvalidRegion(first.to_string()));
    }
    let region = match first.parse::<usize>().ok().and_then(Region::new) {
        Some(region) if first.len() == 1 => region,
        _ => return Err(IssueKind::RegionOutOfRange(first.to_string())),
    };

    let name = tokens.next().ok_or(IssueKind::MissingKey)?;
    if name.eq_ignore_ascii_case(WILDCARD_TOKEN) {
        return Ok((region, Slot::Wildcard));
    }
    let key = Key::parse(name).ok_or_else(|| IssueKind::UnknownKey(name.to_string()))?;
    Ok((region, Slot::Key(key)))
}
