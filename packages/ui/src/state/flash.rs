//! Transient banner shown above the current screen.
//!
//! Each [`FlashState::show`] call mints a fresh id. The expiry timer started
//! for a flash carries that id, and [`FlashState::expire`] only clears the
//! banner when the id still matches, so a newer flash is never cut short by
//! an older timer.

use std::time::Duration;

/// How long a flash stays visible.
pub const FLASH_DURATION: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Alert,
}

impl FlashKind {
    pub fn class(&self) -> &'static str {
        match self {
            FlashKind::Success => "alert success",
            FlashKind::Alert => "alert",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Flash {
    pub id: u64,
    pub message: String,
    pub kind: FlashKind,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlashState {
    current: Option<Flash>,
    next_id: u64,
}

impl FlashState {
    /// Replace the current flash and return the new id.
    pub fn show(&mut self, message: impl Into<String>, kind: FlashKind) -> u64 {
        self.next_id += 1;
        self.current = Some(Flash {
            id: self.next_id,
            message: message.into(),
            kind,
        });
        self.next_id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.show(message, FlashKind::Success)
    }

    pub fn alert(&mut self, message: impl Into<String>) -> u64 {
        self.show(message, FlashKind::Alert)
    }

    /// Clear the flash if it is still the one with `id`.
    pub fn expire(&mut self, id: u64) -> bool {
        if self.current_id() == Some(id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Flash> {
        self.current.as_ref()
    }

    pub fn current_id(&self) -> Option<u64> {
        self.current.as_ref().map(|f| f.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_clears_matching_flash() {
        let mut flash = FlashState::default();
        let id = flash.success("Saved");
        assert!(flash.expire(id));
        assert!(flash.current().is_none());
    }

    #[test]
    fn test_older_expiry_keeps_newer_flash() {
        let mut flash = FlashState::default();
        let first = flash.alert("A");
        let second = flash.success("B");
        assert_ne!(first, second);

        assert!(!flash.expire(first));
        let current = flash.current().unwrap();
        assert_eq!(current.message, "B");
        assert_eq!(current.kind, FlashKind::Success);

        assert!(flash.expire(second));
        assert!(flash.current().is_none());
    }
}
