//! Cancellable frame-tick scheduling.
//!
//! A settle animation advances once per display refresh. The host owns the
//! actual frame callback; the core hands it a [`FrameToken`] and only honors
//! ticks carrying the token of the most recently scheduled chain.

use serde::{Deserialize, Serialize};

/// Handle identifying one scheduled tick chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameToken(u64);

impl FrameToken {
    /// Generation number of the chain.
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Issues frame tokens and invalidates superseded ones.
#[derive(Debug, Clone, Default)]
pub struct FrameTicker {
    generation: u64,
    armed: bool,
}

impl FrameTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new tick chain. Tokens from earlier chains become stale.
    pub fn arm(&mut self) -> FrameToken {
        self.generation = self.generation.wrapping_add(1);
        self.armed = true;
        FrameToken(self.generation)
    }

    /// Stop the current chain. Every outstanding token becomes stale.
    pub fn cancel(&mut self) {
        if self.armed {
            self.generation = self.generation.wrapping_add(1);
            self.armed = false;
        }
    }

    /// Check if a tick carrying this token should run.
    pub fn accepts(&self, token: FrameToken) -> bool {
        self.armed && token.0 == self.generation
    }

    /// Check if a chain is currently running.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Token of the running chain, if any.
    pub fn current(&self) -> Option<FrameToken> {
        self.armed.then_some(FrameToken(self.generation))
    }
}
