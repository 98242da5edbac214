//! Reveal animator: owns the active item's offset and its settle animation.
//!
//! Only one item is interactive at a time. The animator applies drag
//! displacements with clamping, picks a resting target when the finger
//! lifts, and interpolates toward it on every frame tick.

use crate::config::SlideConfig;
use crate::events::SlideEvent;
use crate::mode::{MenuExtents, MenuSide};
use crate::surface::{ItemIndex, ListSurface};
use crate::ticker::{FrameTicker, FrameToken};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Offsets closer than this to their target count as arrived.
const ARRIVAL_EPSILON: f64 = 1e-6;

/// Scale applied before the viscous-fluid curve.
const VISCOUS_FLUID_SCALE: f64 = 8.0;

/// Interpolation curve for settle animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SettleEasing {
    /// Constant speed.
    Linear,
    /// Fast start, long gentle tail, like the classic platform scroller.
    #[default]
    ViscousFluid,
}

impl SettleEasing {
    /// Map a linear fraction in `[0, 1]` onto the curve.
    pub fn transform(self, fraction: f64) -> f64 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            SettleEasing::Linear => fraction,
            SettleEasing::ViscousFluid => {
                let normalized = viscous_fluid(fraction) / viscous_fluid(1.0);
                normalized.clamp(0.0, 1.0)
            }
        }
    }
}

fn viscous_fluid(x: f64) -> f64 {
    let x = x * VISCOUS_FLUID_SCALE;
    if x < 1.0 {
        x - (1.0 - (-x).exp())
    } else {
        let start = (-1.0f64).exp();
        let tail = 1.0 - (1.0 - x).exp();
        start + tail * (1.0 - start)
    }
}

/// Lifecycle phase of the active item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RevealPhase {
    /// Closed and at rest.
    #[default]
    Idle,
    /// Following the finger.
    Dragging,
    /// Animating back to offset 0.
    SettlingToClosed,
    /// Animating to a fully open offset.
    SettlingToOpen,
    /// At rest with a menu fully revealed.
    RestingOpen,
}

impl RevealPhase {
    /// Whether a settle animation is in flight.
    pub fn is_settling(self) -> bool {
        matches!(self, RevealPhase::SettlingToClosed | RevealPhase::SettlingToOpen)
    }
}

/// Reveal state of one item.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ItemRevealState {
    /// Signed horizontal offset; positive exposes the left menu.
    pub offset: f64,
    /// True once a settle toward a non-zero target has begun.
    pub is_open: bool,
}

/// An in-flight interpolation from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleAnimation {
    pub start: f64,
    pub end: f64,
    pub elapsed: Duration,
    pub duration: Duration,
    pub easing: SettleEasing,
}

impl SettleAnimation {
    /// Create an animation whose duration is proportional to the travel.
    pub fn new(start: f64, end: f64, millis_per_unit: f64, easing: SettleEasing) -> Self {
        let millis = (end - start).abs() * millis_per_unit;
        Self {
            start,
            end,
            elapsed: Duration::ZERO,
            duration: Duration::try_from_secs_f64((millis / 1000.0).max(0.0)).unwrap_or(Duration::MAX),
            easing,
        }
    }

    /// Linear progress in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Interpolated value at the current progress.
    pub fn value(&self) -> f64 {
        let fraction = self.fraction();
        if fraction >= 1.0 {
            return self.end;
        }
        self.start + (self.end - self.start) * self.easing.transform(fraction)
    }

    /// Advance by one frame.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    /// Whether the end value has been reached.
    pub fn is_finished(&self) -> bool {
        self.fraction() >= 1.0
    }
}

#[derive(Debug, Clone)]
struct ActiveItem {
    index: ItemIndex,
    extents: MenuExtents,
    base_offset: f64,
    state: ItemRevealState,
    phase: RevealPhase,
}

/// Drives the single interactive item.
#[derive(Debug, Clone)]
pub struct RevealAnimator {
    active: Option<ActiveItem>,
    settle: Option<SettleAnimation>,
    ticker: FrameTicker,
    millis_per_unit: f64,
    easing: SettleEasing,
    events: Vec<SlideEvent>,
}

impl RevealAnimator {
    /// Create an animator using the settle settings of a config.
    pub fn new(config: &SlideConfig) -> Self {
        Self {
            active: None,
            settle: None,
            ticker: FrameTicker::new(),
            millis_per_unit: config.settle_millis_per_unit,
            easing: config.easing,
            events: Vec::new(),
        }
    }

    /// Pick up new settle settings. Running animations keep their own.
    pub fn configure(&mut self, config: &SlideConfig) {
        self.millis_per_unit = config.settle_millis_per_unit;
        self.easing = config.easing;
    }

    /// The active item, if any.
    pub fn active_item(&self) -> Option<ItemIndex> {
        self.active.as_ref().map(|active| active.index)
    }

    /// Phase of the active item; `Idle` when there is none.
    pub fn phase(&self) -> RevealPhase {
        self.active.as_ref().map_or(RevealPhase::Idle, |active| active.phase)
    }

    /// Reveal state of the active item.
    pub fn state(&self) -> ItemRevealState {
        self.active.as_ref().map_or_else(ItemRevealState::default, |active| active.state)
    }

    /// Offset of the active item; 0 when there is none.
    pub fn offset(&self) -> f64 {
        self.state().offset
    }

    /// The active item if it is open or opening.
    pub fn open_item(&self) -> Option<ItemIndex> {
        self.active
            .as_ref()
            .filter(|active| active.state.is_open)
            .map(|active| active.index)
    }

    /// Whether a settle animation is in flight.
    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    /// The running settle animation.
    pub fn settle(&self) -> Option<&SettleAnimation> {
        self.settle.as_ref()
    }

    /// Token of the pending tick chain, if a settle is running.
    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.ticker.current()
    }

    /// Take queued events.
    pub fn drain_events(&mut self) -> Vec<SlideEvent> {
        std::mem::take(&mut self.events)
    }

    /// Make `index` the active item and start following the finger.
    ///
    /// Supersedes any running settle or pending tick.
    pub fn begin_drag<S: ListSurface>(
        &mut self,
        surface: &mut S,
        index: ItemIndex,
        extents: MenuExtents,
        base_offset: f64,
    ) {
        self.ticker.cancel();
        self.settle = None;

        if let Some(previous) = self
            .active
            .as_ref()
            .filter(|active| active.index != index && active.state.offset != 0.0)
        {
            // The controller closes open items before a new drag; anything
            // left over is snapped shut so it cannot stay visually stuck.
            log::warn!("Item {} still offset at drag start, snapping closed", previous.index.0);
            surface.set_item_offset(previous.index, 0.0);
            surface.invalidate(previous.index);
        }

        self.active = Some(ActiveItem {
            index,
            extents,
            base_offset: extents.clamp(base_offset),
            state: ItemRevealState {
                offset: extents.clamp(base_offset),
                is_open: false,
            },
            phase: RevealPhase::Dragging,
        });
        self.events.push(SlideEvent::DragStarted { item: index });
    }

    /// Move the dragged item to `base + displacement`, clamped to its extents.
    ///
    /// A displacement toward a side with no extent pins the item at 0.
    pub fn apply_delta<S: ListSurface>(&mut self, surface: &mut S, displacement: f64) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if active.phase != RevealPhase::Dragging {
            return;
        }
        let offset = active.extents.clamp(active.base_offset + displacement);
        if offset != active.state.offset {
            log::trace!("Item {} offset {:.1}", active.index.0, offset);
            active.state.offset = offset;
            surface.set_item_offset(active.index, offset);
            surface.invalidate(active.index);
        }
    }

    /// Settle a released drag using the midpoint rule.
    ///
    /// The item opens fully when it travelled at least half of the extent on
    /// its side; otherwise it closes.
    pub fn begin_settle<S: ListSurface>(&mut self, surface: &mut S) {
        let Some(active) = self.active.as_ref() else {
            return;
        };
        if active.phase != RevealPhase::Dragging {
            return;
        }
        let target = settle_target(active.state.offset, active.extents);
        self.start_settle(surface, target);
    }

    /// Close the active item regardless of how far it is open.
    ///
    /// No-op when it is already closed and at rest, or already closing.
    pub fn force_close_active<S: ListSurface>(&mut self, surface: &mut S) {
        let Some(active) = self.active.as_ref() else {
            return;
        };
        match active.phase {
            RevealPhase::SettlingToClosed => {}
            RevealPhase::Idle if active.state.offset == 0.0 => {}
            _ => {
                log::debug!("Closing item {}", active.index.0);
                self.start_settle(surface, 0.0);
            }
        }
    }

    /// Public "slide back": close whatever is open. Idempotent.
    pub fn request_slide_back<S: ListSurface>(&mut self, surface: &mut S) {
        self.force_close_active(surface);
    }

    /// Advance the settle animation by one frame.
    ///
    /// Ticks carrying a superseded token, or arriving after the animation
    /// finished, do nothing. Returns true while more frames are needed.
    pub fn tick<S: ListSurface>(&mut self, surface: &mut S, token: FrameToken, dt: Duration) -> bool {
        if !self.ticker.accepts(token) {
            log::trace!("Dropping stale frame {}", token.generation());
            return false;
        }
        let (Some(settle), Some(active)) = (self.settle.as_mut(), self.active.as_mut()) else {
            self.ticker.cancel();
            return false;
        };

        if !surface.is_valid(active.index) {
            log::warn!("Item {} vanished mid-settle, dropping animation", active.index.0);
            self.ticker.cancel();
            self.settle = None;
            self.active = None;
            return false;
        }

        settle.advance(dt);
        let offset = settle.value();
        let finished = settle.is_finished();
        active.state.offset = offset;
        surface.set_item_offset(active.index, offset);
        surface.invalidate(active.index);

        if finished {
            self.finish_settle();
            false
        } else {
            surface.request_frame(token);
            true
        }
    }

    /// Forget an item that the host rebound to new content.
    pub fn item_recycled(&mut self, index: ItemIndex) {
        if self.active_item() == Some(index) {
            log::debug!("Active item {} recycled", index.0);
            self.ticker.cancel();
            self.settle = None;
            self.active = None;
        }
    }

    fn start_settle<S: ListSurface>(&mut self, surface: &mut S, target: f64) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.state.is_open = target != 0.0;
        self.events.push(SlideEvent::SettleStarted {
            item: active.index,
            target,
        });

        if (target - active.state.offset).abs() < ARRIVAL_EPSILON {
            active.state.offset = target;
            surface.set_item_offset(active.index, target);
            surface.invalidate(active.index);
            self.ticker.cancel();
            self.settle = None;
            self.finish_settle();
            return;
        }

        log::debug!(
            "Settling item {} from {:.1} to {:.1}",
            active.index.0,
            active.state.offset,
            target
        );
        active.phase = if target == 0.0 {
            RevealPhase::SettlingToClosed
        } else {
            RevealPhase::SettlingToOpen
        };
        self.settle = Some(SettleAnimation::new(
            active.state.offset,
            target,
            self.millis_per_unit,
            self.easing,
        ));
        let token = self.ticker.arm();
        surface.request_frame(token);
    }

    fn finish_settle(&mut self) {
        self.ticker.cancel();
        self.settle = None;
        let Some(active) = self.active.as_mut() else {
            return;
        };
        match MenuSide::from_offset(active.state.offset) {
            Some(side) => {
                active.phase = RevealPhase::RestingOpen;
                active.state.is_open = true;
                log::debug!("Item {} open on the {:?} side", active.index.0, side);
                self.events.push(SlideEvent::Opened {
                    item: active.index,
                    side,
                });
            }
            None => {
                active.phase = RevealPhase::Idle;
                active.state = ItemRevealState::default();
                log::debug!("Item {} closed", active.index.0);
                self.events.push(SlideEvent::Closed { item: active.index });
            }
        }
    }
}

/// Resting target for an offset released at `offset`.
pub fn settle_target(offset: f64, extents: MenuExtents) -> f64 {
    match MenuSide::from_offset(offset) {
        Some(side) => {
            let extent = extents.get(side);
            if extent > 0.0 && offset.abs() >= extent / 2.0 {
                extents.open_offset(side)
            } else {
                0.0
            }
        }
        None => 0.0,
    }
}
