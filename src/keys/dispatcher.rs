//! Press-hold-release of a key action through an injection backend.

use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rdev::{simulate, EventType};
use thiserror::Error;

use super::action::KeyAction;
use super::key::Key;

/// Default time a key is held down.
pub const DEFAULT_HOLD: Duration = Duration::from_millis(50);

/// Something that can press and release keys system-wide.
pub trait KeyInjector: Send {
    fn press(&mut self, key: Key) -> Result<(), String>;
    fn release(&mut self, key: Key) -> Result<(), String>;
}

/// Injects synthetic key events through rdev.
///
/// On macOS this needs Accessibility permission; on Linux an X11 session.
#[derive(Debug, Default)]
pub struct RdevInjector;

impl KeyInjector for RdevInjector {
    fn press(&mut self, key: Key) -> Result<(), String> {
        simulate(&EventType::KeyPress(key.code())).map_err(|e| format!("{:?}", e))
    }

    fn release(&mut self, key: Key) -> Result<(), String> {
        simulate(&EventType::KeyRelease(key.code())).map_err(|e| format!("{:?}", e))
    }
}

/// Errors from a single dispatch. None of these stop the motion loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("failed to press '{key}': {reason}")]
    Press { key: Key, reason: String },
    #[error("failed to release '{key}': {reason}")]
    Release { key: Key, reason: String },
    #[error("wildcard slot has no concrete keys to choose from")]
    NoCandidates,
}

/// Turns key actions into a press, a short hold, and a release.
pub struct Dispatcher<I, R = StdRng> {
    injector: I,
    rng: R,
    hold: Duration,
}

impl<I: KeyInjector> Dispatcher<I, StdRng> {
    pub fn new(injector: I, hold: Duration) -> Self {
        Self::with_rng(injector, hold, StdRng::from_entropy())
    }
}

impl<I: KeyInjector, R: Rng> Dispatcher<I, R> {
    pub fn with_rng(injector: I, hold: Duration, rng: R) -> Self {
        Self {
            injector,
            rng,
            hold,
        }
    }

    pub fn hold(&self) -> Duration {
        self.hold
    }

    pub fn injector(&self) -> &I {
        &self.injector
    }

    /// Fire `action` once and return the key that was pressed.
    ///
    /// Nothing is released when the press itself fails.
    pub fn fire(&mut self, action: &KeyAction) -> Result<Key, DispatchError> {
        let key = action
            .choose(&mut self.rng)
            .ok_or(DispatchError::NoCandidates)?;

        self.injector
            .press(key)
            .map_err(|reason| DispatchError::Press { key, reason })?;

        if !self.hold.is_zero() {
            thread::sleep(self.hold);
        }

        self.injector
            .release(key)
            .map_err(|reason| DispatchError::Release { key, reason })?;

        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        fail_press: bool,
    }

    impl KeyInjector for Recorder {
        fn press(&mut self, key: Key) -> Result<(), String> {
            if self.fail_press {
                return Err("no display".to_string());
            }
            self.events.push(format!("down {}", key));
            Ok(())
        }

        fn release(&mut self, key: Key) -> Result<(), String> {
            self.events.push(format!("up {}", key));
            Ok(())
        }
    }

    fn dispatcher(recorder: Recorder) -> Dispatcher<Recorder, StdRng> {
        Dispatcher::with_rng(recorder, Duration::ZERO, StdRng::seed_from_u64(11))
    }

    #[test]
    fn test_fire_presses_then_releases() {
        let mut d = dispatcher(Recorder::default());
        let key = d.fire(&KeyAction::Concrete(Key::named("j"))).unwrap();
        assert_eq!(key, Key::named("j"));
        assert_eq!(d.injector().events, vec!["down j", "up j"]);
    }

    #[test]
    fn test_fire_press_failure_is_reported() {
        let mut d = dispatcher(Recorder {
            fail_press: true,
            ..Recorder::default()
        });
        let err = d.fire(&KeyAction::Concrete(Key::named("j"))).unwrap_err();
        assert_eq!(
            err,
            DispatchError::Press {
                key: Key::named("j"),
                reason: "no display".to_string()
            }
        );
        assert!(d.injector().events.is_empty());
    }

    #[test]
    fn test_fire_empty_wildcard() {
        let mut d = dispatcher(Recorder::default());
        assert_eq!(
            d.fire(&KeyAction::RandomAmong(Vec::new())),
            Err(DispatchError::NoCandidates)
        );
    }

    #[test]
    fn test_default_hold() {
        assert_eq!(DEFAULT_HOLD, Duration::from_millis(50));
        let d = Dispatcher::new(RdevInjector, DEFAULT_HOLD);
        assert_eq!(d.hold(), DEFAULT_HOLD);
    }
}
