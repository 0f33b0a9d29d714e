//! Audible tick and visual emphasis for the centered candidate.
//!
//! Feedback is cosmetic: a missing or failing audio device degrades the tick
//! to a no-op and never reaches the caller.

use std::fs::{File, OpenOptions};
use std::io::Write;

use super::traits::Chime;
use crate::error::{FeedbackError, FeedbackResult};
use crate::log;

/// Emphasis tier of a candidate row, by distance from the committed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// The committed value itself
    Primary,
    /// Immediate neighbours
    Secondary,
    /// Everything further away
    Tertiary,
}

/// Classify a candidate for rendering.
pub fn style_for(candidate: i64, committed: i64) -> Emphasis {
    match candidate.abs_diff(committed) {
        0 => Emphasis::Primary,
        1 => Emphasis::Secondary,
        _ => Emphasis::Tertiary,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeviceState {
    Unopened,
    Ready,
    Unavailable,
}

/// Emits ticks through a lazily opened [`Chime`].
#[derive(Debug)]
pub struct FeedbackEmitter<C: Chime> {
    chime: C,
    device: DeviceState,
    enabled: bool,
    ticks: u64,
}

impl<C: Chime> FeedbackEmitter<C> {
    pub fn new(chime: C) -> Self {
        Self {
            chime,
            device: DeviceState::Unopened,
            enabled: true,
            ticks: 0,
        }
    }

    /// An emitter that counts ticks but never touches the device.
    pub fn muted(chime: C) -> Self {
        Self {
            enabled: false,
            ..Self::new(chime)
        }
    }

    /// Emit one tick. Never fails.
    pub fn tick(&mut self) {
        self.ticks += 1;

        if !self.enabled {
            return;
        }

        if self.device == DeviceState::Unopened {
            self.device = match self.chime.open() {
                Ok(()) => DeviceState::Ready,
                Err(e) => {
                    log::log(&format!("Feedback disabled: {}", e));
                    DeviceState::Unavailable
                }
            };
        }

        if self.device == DeviceState::Ready {
            if let Err(e) = self.chime.ring() {
                log::log(&format!("Tick dropped: {}", e));
            }
        }
    }

    /// Ticks emitted so far, audible or not.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Whether the device was opened and can play ticks.
    pub fn is_audible(&self) -> bool {
        self.enabled && self.device != DeviceState::Unavailable
    }

    pub fn chime(&self) -> &C {
        &self.chime
    }
}

/// Rings the terminal bell on the controlling terminal.
///
/// Writes to `/dev/tty` rather than stdout so the bell does not interleave
/// with whatever the host prints.
#[derive(Debug, Default)]
pub struct TerminalBell {
    tty: Option<File>,
}

impl TerminalBell {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Chime for TerminalBell {
    fn open(&mut self) -> FeedbackResult<()> {
        let tty = OpenOptions::new()
            .write(true)
            .open("/dev/tty")
            .map_err(|e| FeedbackError::Unavailable(format!("/dev/tty: {}", e)))?;
        self.tty = Some(tty);
        Ok(())
    }

    fn ring(&mut self) -> FeedbackResult<()> {
        let tty = self
            .tty
            .as_mut()
            .ok_or_else(|| FeedbackError::Unavailable("terminal not opened".to_string()))?;
        tty.write_all(b"\x07")?;
        tty.flush()?;
        Ok(())
    }
}

/// A chime with no device at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentChime;

impl Chime for SilentChime {
    fn open(&mut self) -> FeedbackResult<()> {
        Ok(())
    }

    fn ring(&mut self) -> FeedbackResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct FakeChime {
        opens: u32,
        rings: u32,
        fail_open: bool,
        fail_ring: bool,
    }

    impl Chime for FakeChime {
        fn open(&mut self) -> FeedbackResult<()> {
            self.opens += 1;
            if self.fail_open {
                return Err(FeedbackError::Unavailable("no device".to_string()));
            }
            Ok(())
        }

        fn ring(&mut self) -> FeedbackResult<()> {
            self.rings += 1;
            if self.fail_ring {
                return Err(FeedbackError::Io(std::io::Error::other("blocked")));
            }
            Ok(())
        }
    }

    #[test]
    fn test_device_opened_lazily_once() {
        let mut emitter = FeedbackEmitter::new(FakeChime::default());
        assert_eq!(emitter.chime().opens, 0);

        emitter.tick();
        emitter.tick();
        emitter.tick();

        assert_eq!(emitter.chime().opens, 1);
        assert_eq!(emitter.chime().rings, 3);
        assert_eq!(emitter.tick_count(), 3);
        assert!(emitter.is_audible());
    }

    #[test]
    fn test_open_failure_degrades_to_noop() {
        let chime = FakeChime {
            fail_open: true,
            ..Default::default()
        };
        let mut emitter = FeedbackEmitter::new(chime);

        emitter.tick();
        emitter.tick();

        // Acquisition is not retried and nothing rings
        assert_eq!(emitter.chime().opens, 1);
        assert_eq!(emitter.chime().rings, 0);
        assert_eq!(emitter.tick_count(), 2);
        assert!(!emitter.is_audible());
    }

    #[test]
    fn test_ring_failure_is_swallowed() {
        let chime = FakeChime {
            fail_ring: true,
            ..Default::default()
        };
        let mut emitter = FeedbackEmitter::new(chime);

        emitter.tick();
        emitter.tick();

        assert_eq!(emitter.chime().rings, 2);
        assert_eq!(emitter.tick_count(), 2);
    }

    #[test]
    fn test_muted_emitter_skips_device() {
        let mut emitter = FeedbackEmitter::muted(FakeChime::default());
        emitter.tick();
        assert_eq!(emitter.chime().opens, 0);
        assert_eq!(emitter.tick_count(), 1);
    }

    #[test]
    fn test_style_tiers() {
        assert_eq!(style_for(70, 70), Emphasis::Primary);
        assert_eq!(style_for(69, 70), Emphasis::Secondary);
        assert_eq!(style_for(71, 70), Emphasis::Secondary);
        assert_eq!(style_for(72, 70), Emphasis::Tertiary);
        assert_eq!(style_for(40, 150), Emphasis::Tertiary);
    }
}
