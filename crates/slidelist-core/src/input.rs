//! Pointer events and the verdicts returned to the host list.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Identifier of a pointer (finger, mouse, pen) as reported by the platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerId(pub u64);

/// Raw pointer sample in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { pointer: PointerId, position: Point },
    Move { pointer: PointerId, position: Point },
    Up { pointer: PointerId, position: Point },
    Cancel { pointer: PointerId },
}

impl PointerEvent {
    /// The pointer that produced this sample.
    pub fn pointer(&self) -> PointerId {
        match self {
            PointerEvent::Down { pointer, .. }
            | PointerEvent::Move { pointer, .. }
            | PointerEvent::Up { pointer, .. }
            | PointerEvent::Cancel { pointer } => *pointer,
        }
    }
}

/// What the host list should do with a pointer sample after the core saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dispatch {
    /// The core used the sample; the host must not react to it.
    Consumed,
    /// The host list should process the sample as if the core did not exist.
    Forward,
    /// The sample is dropped by everyone.
    Ignored,
}

impl Dispatch {
    /// Check if the host list should see this sample.
    pub fn forwards(self) -> bool {
        self == Dispatch::Forward
    }
}

/// Tracks which pointer owns the current gesture.
///
/// The first pointer down wins; every other pointer is ignored until the
/// owner lifts or is cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    owner: Option<PointerId>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pointer currently owning the gesture.
    pub fn owner(&self) -> Option<PointerId> {
        self.owner
    }

    /// Decide whether a sample belongs to the owning pointer, updating
    /// ownership on down/up/cancel.
    pub fn accept(&mut self, event: &PointerEvent) -> bool {
        let pointer = event.pointer();
        match event {
            PointerEvent::Down { .. } => match self.owner {
                Some(owner) if owner != pointer => false,
                _ => {
                    self.owner = Some(pointer);
                    true
                }
            },
            PointerEvent::Move { .. } => self.owner == Some(pointer),
            PointerEvent::Up { .. } | PointerEvent::Cancel { .. } => {
                if self.owner == Some(pointer) {
                    self.owner = None;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Forget the current owner.
    pub fn reset(&mut self) {
        self.owner = None;
    }
}
