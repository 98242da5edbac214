//! Gesture classification: horizontal reveal drag, vertical scroll, or tap.
//!
//! The classifier owns the per-gesture [`GestureSession`] and decides once
//! per gesture which way it goes. It never mutates offsets itself; it returns
//! outcomes the controller turns into animator and surface calls.

use crate::animator::RevealAnimator;
use crate::mode::{MenuExtents, MenuSide, RevealMode};
use crate::surface::{ItemIndex, ListSurface};
use kurbo::{Point, Vec2};

/// Per-gesture direction decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectionLock {
    /// Neither axis has clearly crossed the touch slop yet.
    #[default]
    Undecided,
    /// The gesture is a vertical scroll; it belongs to the host list.
    Vertical,
    /// The gesture is a horizontal reveal drag driven by the core.
    Horizontal,
    /// Horizontal, but toward a menu the mode forbids; ceded to the host.
    Ceded,
}

/// Transient state of one gesture, from pointer-down to up/cancel.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    /// Where the pointer went down.
    pub origin: Point,
    /// Item under the pointer at down time; never re-resolved.
    pub item: ItemIndex,
    /// Travel allowed toward each menu, already filtered by mode.
    pub extents: MenuExtents,
    /// Offset the item had when the gesture started.
    pub base_offset: f64,
    /// Direction decision for this gesture.
    pub lock: DirectionLock,
}

impl GestureSession {
    /// Whether a horizontal drag is confirmed and driving the item.
    pub fn is_engaged(&self) -> bool {
        self.lock == DirectionLock::Horizontal
    }

    /// Displacement of a position from the gesture origin.
    pub fn displacement(&self, position: Point) -> Vec2 {
        position - self.origin
    }
}

/// Result of a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DownOutcome {
    /// Mode is forbidden; the host list handles everything.
    Inert,
    /// An item is open; this touch only closes it and is otherwise dropped.
    CloseOpen(ItemIndex),
    /// A settle animation is running; the touch is dropped.
    Busy,
    /// No item under the pointer; the host list handles it.
    Unresolved,
    /// A new session started on this item.
    Began(ItemIndex),
}

/// Result of a pointer-move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// No session: a move without a preceding down.
    NoSession,
    /// The direction is still undecided.
    Pending,
    /// The gesture locked vertical on this sample, or was already.
    Vertical,
    /// The gesture is horizontal toward a forbidden menu.
    Ceded,
    /// The drag is engaged; `first` is set on the sample that confirmed it.
    Drag {
        item: ItemIndex,
        displacement: f64,
        first: bool,
    },
}

/// Result of a pointer-up or cancel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseOutcome {
    /// No session was active.
    NoSession,
    /// The session ended without engaging; nothing to do.
    Disposed,
    /// An engaged drag ended; the item must settle.
    Settle(ItemIndex),
}

/// Classifies raw pointer samples into gestures.
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    touch_slop: f64,
    session: Option<GestureSession>,
    /// Set when a down was dropped; the rest of that gesture is dropped too.
    swallowing: bool,
}

impl GestureClassifier {
    /// Create a classifier with the given touch slop.
    pub fn new(touch_slop: f64) -> Self {
        Self {
            touch_slop,
            session: None,
            swallowing: false,
        }
    }

    /// Current touch slop.
    pub fn touch_slop(&self) -> f64 {
        self.touch_slop
    }

    /// Change the touch slop. Applies from the next sample on.
    pub fn set_touch_slop(&mut self, touch_slop: f64) {
        self.touch_slop = touch_slop;
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Whether a horizontal drag is engaged.
    pub fn is_engaged(&self) -> bool {
        self.session.as_ref().is_some_and(GestureSession::is_engaged)
    }

    /// Whether the remainder of the current gesture is being dropped.
    pub fn is_swallowing(&self) -> bool {
        self.swallowing
    }

    /// Handle a pointer-down.
    ///
    /// Any previous session is discarded first; a down always starts a new
    /// gesture.
    pub fn on_pointer_down<S: ListSurface>(
        &mut self,
        position: Point,
        mode: RevealMode,
        tap_closes_open_item: bool,
        animator: &RevealAnimator,
        surface: &S,
    ) -> DownOutcome {
        self.session = None;
        self.swallowing = false;

        if !mode.is_enabled() {
            return DownOutcome::Inert;
        }

        let hit = surface.item_at(position).filter(|index| surface.is_valid(*index));

        if let Some(open) = animator.open_item() {
            let redrag = !tap_closes_open_item && hit == Some(open) && !animator.is_settling();
            if !redrag {
                self.swallowing = true;
                return DownOutcome::CloseOpen(open);
            }
        } else if animator.is_settling() {
            self.swallowing = true;
            return DownOutcome::Busy;
        }

        let Some(item) = hit else {
            return DownOutcome::Unresolved;
        };

        let extents = surface.menu_extents(item).filtered(mode);
        let base_offset = if animator.open_item() == Some(item) {
            animator.offset()
        } else {
            0.0
        };
        log::debug!(
            "Gesture session on item {} at ({:.1}, {:.1}), extents {:?}",
            item.0,
            position.x,
            position.y,
            extents
        );
        self.session = Some(GestureSession {
            origin: position,
            item,
            extents,
            base_offset,
            lock: DirectionLock::Undecided,
        });
        DownOutcome::Began(item)
    }

    /// Handle a pointer-move.
    pub fn on_pointer_move(&mut self, position: Point, mode: RevealMode) -> MoveOutcome {
        let slop = self.touch_slop;
        let Some(session) = self.session.as_mut() else {
            return MoveOutcome::NoSession;
        };
        let delta = session.displacement(position);

        match session.lock {
            DirectionLock::Vertical => return MoveOutcome::Vertical,
            DirectionLock::Ceded => return MoveOutcome::Ceded,
            DirectionLock::Horizontal => {
                return MoveOutcome::Drag {
                    item: session.item,
                    displacement: delta.x,
                    first: false,
                };
            }
            DirectionLock::Undecided => {}
        }

        let (dx, dy) = (delta.x.abs(), delta.y.abs());
        if dx > slop && dy < slop {
            // The first horizontal sample decides which menu is being asked for.
            // Dragging an already open item is legal in either direction.
            let legal = session.base_offset != 0.0
                || MenuSide::from_offset(delta.x).is_some_and(|side| mode.allows(side));
            if legal {
                log::debug!("Horizontal drag engaged on item {}", session.item.0);
                session.lock = DirectionLock::Horizontal;
                MoveOutcome::Drag {
                    item: session.item,
                    displacement: delta.x,
                    first: true,
                }
            } else {
                log::debug!(
                    "Horizontal drag on item {} toward a forbidden menu, ceded to list",
                    session.item.0
                );
                session.lock = DirectionLock::Ceded;
                MoveOutcome::Ceded
            }
        } else if dy > slop && dx < slop {
            log::trace!("Vertical gesture on item {}", session.item.0);
            session.lock = DirectionLock::Vertical;
            MoveOutcome::Vertical
        } else {
            MoveOutcome::Pending
        }
    }

    /// Handle a pointer-up or cancel. The session ends either way.
    pub fn on_pointer_release(&mut self) -> ReleaseOutcome {
        self.swallowing = false;
        match self.session.take() {
            Some(session) if session.is_engaged() => ReleaseOutcome::Settle(session.item),
            Some(_) => ReleaseOutcome::Disposed,
            None => ReleaseOutcome::NoSession,
        }
    }

    /// Drop the session unless a horizontal drag is already engaged.
    ///
    /// Returns true when the session was abandoned; the rest of the gesture
    /// is then dropped.
    pub fn abandon_unless_engaged(&mut self) -> bool {
        match &self.session {
            Some(session) if session.is_engaged() => false,
            Some(_) => {
                self.session = None;
                self.swallowing = true;
                true
            }
            None => false,
        }
    }

    /// Forget any session, e.g. when the mode changes mid-gesture.
    pub fn reset(&mut self) {
        self.session = None;
        self.swallowing = false;
    }
}
