//! The interaction controller tying classifier, animator and host list together.

use crate::animator::{ItemRevealState, RevealAnimator, RevealPhase};
use crate::classifier::{DownOutcome, GestureClassifier, MoveOutcome, ReleaseOutcome};
use crate::config::{ConfigResult, SlideConfig};
use crate::events::SlideEvent;
use crate::input::{Dispatch, PointerEvent, PointerTracker};
use crate::mode::{MenuSide, RevealMode};
use crate::surface::{ItemIndex, ListSurface};
use crate::ticker::FrameToken;
use kurbo::Point;
use std::time::Duration;

/// Owns the gesture session, the active item and the host list surface.
///
/// All pointer samples and frame ticks for one list go through a single
/// controller, in order, on one thread.
#[derive(Debug)]
pub struct SlideController<S: ListSurface> {
    surface: S,
    config: SlideConfig,
    classifier: GestureClassifier,
    animator: RevealAnimator,
    pointers: PointerTracker,
    intercept_disabled: bool,
}

impl<S: ListSurface> SlideController<S> {
    /// Create a controller after validating the config.
    pub fn new(surface: S, config: SlideConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            surface,
            classifier: GestureClassifier::new(config.touch_slop),
            animator: RevealAnimator::new(&config),
            config,
            pointers: PointerTracker::new(),
            intercept_disabled: false,
        })
    }

    /// Create a controller with default settings and the given mode.
    pub fn with_mode(surface: S, mode: RevealMode) -> Self {
        let config = SlideConfig::with_mode(mode);
        Self {
            surface,
            classifier: GestureClassifier::new(config.touch_slop),
            animator: RevealAnimator::new(&config),
            config,
            pointers: PointerTracker::new(),
            intercept_disabled: false,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn config(&self) -> &SlideConfig {
        &self.config
    }

    pub fn mode(&self) -> RevealMode {
        self.config.mode
    }

    /// Change the reveal mode.
    ///
    /// A gesture in progress is cancelled, and an open item whose side the
    /// new mode forbids is closed.
    pub fn set_mode(&mut self, mode: RevealMode) {
        if self.config.mode == mode {
            return;
        }
        log::debug!("Reveal mode {:?} -> {:?}", self.config.mode, mode);
        self.config.mode = mode;

        if self.classifier.session().is_some() {
            let engaged = self.classifier.is_engaged();
            self.classifier.reset();
            if engaged {
                self.set_intercept_disabled(false);
                self.animator.force_close_active(&mut self.surface);
            }
        }

        let forbidden_side = MenuSide::from_offset(self.animator.offset()).is_some_and(|side| !mode.allows(side));
        if forbidden_side {
            self.animator.force_close_active(&mut self.surface);
        }
    }

    /// Replace the whole config after validating it.
    pub fn set_config(&mut self, config: SlideConfig) -> ConfigResult<()> {
        config.validate()?;
        self.classifier.set_touch_slop(config.touch_slop);
        self.animator.configure(&config);
        self.set_mode(config.mode);
        self.config = config;
        Ok(())
    }

    /// Route a pointer sample. Only the first pointer down is followed.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Dispatch {
        if !self.pointers.accept(&event) {
            log::trace!("Ignoring secondary pointer {:?}", event.pointer());
            return Dispatch::Ignored;
        }
        match event {
            PointerEvent::Down { position, .. } => self.on_pointer_down(position),
            PointerEvent::Move { position, .. } => self.on_pointer_move(position),
            PointerEvent::Up { .. } => self.on_pointer_up(),
            PointerEvent::Cancel { .. } => self.on_pointer_cancel(),
        }
    }

    /// A pointer went down at a surface-local position.
    pub fn on_pointer_down(&mut self, position: Point) -> Dispatch {
        if self.classifier.session().is_some() {
            // The previous gesture never saw its up; end it before starting over.
            self.release();
        }

        let outcome = self.classifier.on_pointer_down(
            position,
            self.config.mode,
            self.config.tap_closes_open_item,
            &self.animator,
            &self.surface,
        );
        match outcome {
            DownOutcome::Inert | DownOutcome::Unresolved | DownOutcome::Began(_) => Dispatch::Forward,
            DownOutcome::CloseOpen(item) => {
                log::debug!("Touch while item {} is open, closing it", item.0);
                self.animator.force_close_active(&mut self.surface);
                Dispatch::Ignored
            }
            DownOutcome::Busy => Dispatch::Ignored,
        }
    }

    /// The pointer moved.
    pub fn on_pointer_move(&mut self, position: Point) -> Dispatch {
        if self.classifier.is_swallowing() {
            return Dispatch::Ignored;
        }
        match self.classifier.on_pointer_move(position, self.config.mode) {
            MoveOutcome::NoSession | MoveOutcome::Pending | MoveOutcome::Vertical | MoveOutcome::Ceded => {
                Dispatch::Forward
            }
            MoveOutcome::Drag {
                item,
                displacement,
                first,
            } => {
                if first {
                    let Some(session) = self.classifier.session() else {
                        return Dispatch::Forward;
                    };
                    let (extents, base_offset) = (session.extents, session.base_offset);
                    self.surface.cancel_host_gesture();
                    self.set_intercept_disabled(true);
                    self.animator.begin_drag(&mut self.surface, item, extents, base_offset);
                }
                self.animator.apply_delta(&mut self.surface, displacement);
                Dispatch::Consumed
            }
        }
    }

    /// The pointer lifted.
    pub fn on_pointer_up(&mut self) -> Dispatch {
        self.release()
    }

    /// The platform cancelled the gesture.
    pub fn on_pointer_cancel(&mut self) -> Dispatch {
        self.release()
    }

    /// Run one frame of the settle animation.
    ///
    /// Returns true while more frames are needed.
    pub fn on_frame(&mut self, token: FrameToken, dt: Duration) -> bool {
        self.animator.tick(&mut self.surface, token, dt)
    }

    /// Close the open item, if any.
    ///
    /// An engaged drag keeps control of its item. An undecided gesture is
    /// abandoned and the rest of it is dropped.
    pub fn slide_back(&mut self) {
        if self.classifier.is_engaged() {
            log::debug!("Slide back ignored, horizontal drag in progress");
            return;
        }
        if self.classifier.abandon_unless_engaged() {
            log::debug!("Slide back abandoned the undecided gesture");
        }
        self.animator.request_slide_back(&mut self.surface);
    }

    /// The host rebound an item to new content.
    pub fn item_recycled(&mut self, index: ItemIndex) {
        if self.animator.active_item() == Some(index) && self.classifier.is_engaged() {
            self.classifier.reset();
            self.set_intercept_disabled(false);
        }
        self.animator.item_recycled(index);
    }

    pub fn phase(&self) -> RevealPhase {
        self.animator.phase()
    }

    pub fn active_item(&self) -> Option<ItemIndex> {
        self.animator.active_item()
    }

    pub fn open_item(&self) -> Option<ItemIndex> {
        self.animator.open_item()
    }

    pub fn state(&self) -> ItemRevealState {
        self.animator.state()
    }

    pub fn is_engaged(&self) -> bool {
        self.classifier.is_engaged()
    }

    /// Token of the frame the animator is waiting for.
    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.animator.pending_frame()
    }

    /// Take queued reveal events.
    pub fn drain_events(&mut self) -> Vec<SlideEvent> {
        self.animator.drain_events()
    }

    fn release(&mut self) -> Dispatch {
        let swallowing = self.classifier.is_swallowing();
        match self.classifier.on_pointer_release() {
            ReleaseOutcome::Settle(_) => {
                self.set_intercept_disabled(false);
                self.animator.begin_settle(&mut self.surface);
                Dispatch::Consumed
            }
            ReleaseOutcome::Disposed | ReleaseOutcome::NoSession => {
                if swallowing {
                    Dispatch::Ignored
                } else {
                    Dispatch::Forward
                }
            }
        }
    }

    fn set_intercept_disabled(&mut self, disabled: bool) {
        if self.intercept_disabled != disabled {
            self.intercept_disabled = disabled;
            self.surface.set_intercept_disabled(disabled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerId;
    use crate::mode::MenuExtents;
    use crate::surface::MemorySurface;

    const FRAME: Duration = Duration::from_millis(16);
    const ALL_MODES: [RevealMode; 4] = [
        RevealMode::Forbidden,
        RevealMode::OpenLeftOnly,
        RevealMode::OpenRightOnly,
        RevealMode::OpenBoth,
    ];

    fn controller(mode: RevealMode) -> SlideController<MemorySurface> {
        controller_with(mode, MenuExtents::new(80.0, 60.0))
    }

    fn controller_with(mode: RevealMode, extents: MenuExtents) -> SlideController<MemorySurface> {
        let surface = MemorySurface::with_items(50.0, 300.0, [extents; 5]);
        SlideController::with_mode(surface, mode)
    }

    fn start(c: &SlideController<MemorySurface>, item: usize) -> Point {
        c.surface().row_center(ItemIndex(item))
    }

    /// Press on an item and move horizontally through the given displacements.
    fn drag(c: &mut SlideController<MemorySurface>, item: usize, dxs: &[f64]) -> Vec<Dispatch> {
        let origin = start(c, item);
        let mut dispatches = vec![c.on_pointer_down(origin)];
        for dx in dxs {
            dispatches.push(c.on_pointer_move(Point::new(origin.x + dx, origin.y)));
        }
        dispatches
    }

    fn run_frames(c: &mut SlideController<MemorySurface>) -> usize {
        let mut frames = 0;
        while let Some(token) = c.surface_mut().take_frame() {
            c.on_frame(token, FRAME);
            frames += 1;
            assert!(frames < 1000, "settle never finished");
        }
        frames
    }

    fn open_right(c: &mut SlideController<MemorySurface>, item: usize) {
        drag(c, item, &[-50.0]);
        c.on_pointer_up();
        run_frames(c);
        assert_eq!(c.phase(), RevealPhase::RestingOpen);
        assert_eq!(c.surface().item_offset(ItemIndex(item)), -60.0);
    }

    #[test]
    fn test_reveal_right_menu_settles_open() {
        let mut c = controller(RevealMode::OpenBoth);
        let mut offsets = Vec::new();
        let origin = start(&c, 1);
        c.on_pointer_down(origin);
        for dx in [0.0, -10.0, -30.0, -45.0] {
            c.on_pointer_move(Point::new(origin.x + dx, origin.y));
            offsets.push(c.surface().item_offset(ItemIndex(1)));
        }
        assert_eq!(offsets, vec![0.0, -10.0, -30.0, -45.0]);
        assert_eq!(c.phase(), RevealPhase::Dragging);

        assert_eq!(c.on_pointer_up(), Dispatch::Consumed);
        assert_eq!(c.phase(), RevealPhase::SettlingToOpen);
        run_frames(&mut c);

        assert_eq!(c.surface().item_offset(ItemIndex(1)), -60.0);
        assert_eq!(c.phase(), RevealPhase::RestingOpen);
        assert_eq!(c.open_item(), Some(ItemIndex(1)));
        assert_eq!(
            c.drain_events(),
            vec![
                SlideEvent::DragStarted { item: ItemIndex(1) },
                SlideEvent::SettleStarted {
                    item: ItemIndex(1),
                    target: -60.0
                },
                SlideEvent::Opened {
                    item: ItemIndex(1),
                    side: MenuSide::Right
                },
            ]
        );
    }

    #[test]
    fn test_short_drag_settles_closed() {
        let mut c = controller(RevealMode::OpenBoth);
        drag(&mut c, 1, &[-10.0]);
        assert_eq!(c.surface().item_offset(ItemIndex(1)), -10.0);
        c.on_pointer_up();
        assert_eq!(c.phase(), RevealPhase::SettlingToClosed);
        run_frames(&mut c);
        assert_eq!(c.surface().item_offset(ItemIndex(1)), 0.0);
        assert_eq!(c.phase(), RevealPhase::Idle);
        assert_eq!(c.open_item(), None);
    }

    #[test]
    fn test_touching_other_item_closes_open_one_once() {
        let mut c = controller(RevealMode::OpenBoth);
        open_right(&mut c, 0);
        c.drain_events();

        let elsewhere = start(&c, 2);
        assert_eq!(c.on_pointer_down(elsewhere), Dispatch::Ignored);
        assert_eq!(c.phase(), RevealPhase::SettlingToClosed);
        // The rest of that touch is dropped, so nothing starts dragging.
        assert_eq!(c.on_pointer_move(Point::new(elsewhere.x - 40.0, elsewhere.y)), Dispatch::Ignored);
        assert_eq!(c.on_pointer_up(), Dispatch::Ignored);
        run_frames(&mut c);

        assert_eq!(c.surface().offsets(), vec![0.0; 5]);
        assert_eq!(
            c.drain_events(),
            vec![
                SlideEvent::SettleStarted {
                    item: ItemIndex(0),
                    target: 0.0
                },
                SlideEvent::Closed { item: ItemIndex(0) },
            ]
        );
    }

    #[test]
    fn test_vertical_drag_never_moves_items() {
        for mode in ALL_MODES {
            let mut c = controller(mode);
            let origin = start(&c, 1);
            c.on_pointer_down(origin);
            for (dx, dy) in [(1.0, 5.0), (3.0, 20.0), (6.0, 60.0), (40.0, 90.0)] {
                assert_eq!(c.on_pointer_move(Point::new(origin.x + dx, origin.y + dy)), Dispatch::Forward);
            }
            assert_eq!(c.on_pointer_up(), Dispatch::Forward);
            assert_eq!(c.surface().offsets(), vec![0.0; 5]);
            assert_eq!(c.surface().host_cancels(), 0);
            assert!(c.surface().pending_frame().is_none());
        }
    }

    #[test]
    fn test_forbidden_direction_leaves_offset_zero() {
        let cases = [
            (RevealMode::OpenRightOnly, 1.0),
            (RevealMode::OpenLeftOnly, -1.0),
        ];
        for (mode, sign) in cases {
            let mut c = controller(mode);
            let dispatches = drag(&mut c, 2, &[sign * 20.0, sign * 50.0, -sign * 50.0]);
            assert!(dispatches.iter().all(|d| *d == Dispatch::Forward));
            assert_eq!(c.surface().offsets(), vec![0.0; 5]);
            assert_eq!(c.surface().host_cancels(), 0);
            assert!(!c.surface().intercept_disabled());
            c.on_pointer_up();
            assert_eq!(c.phase(), RevealPhase::Idle);
        }
    }

    #[test]
    fn test_forbidden_mode_forwards_everything() {
        let mut c = controller(RevealMode::Forbidden);
        let dispatches = drag(&mut c, 0, &[-30.0, -60.0]);
        assert!(dispatches.iter().all(|d| *d == Dispatch::Forward));
        assert_eq!(c.on_pointer_up(), Dispatch::Forward);
        assert_eq!(c.active_item(), None);
    }

    #[test]
    fn test_offset_always_clamped() {
        let mut c = controller(RevealMode::OpenBoth);
        let origin = start(&c, 3);
        c.on_pointer_down(origin);
        for dx in [-20.0, -75.0, -300.0, 10.0, 95.0, 500.0, -61.0, 0.0, 79.0] {
            c.on_pointer_move(Point::new(origin.x + dx, origin.y));
            let offset = c.surface().item_offset(ItemIndex(3));
            assert!((-60.0..=80.0).contains(&offset), "offset {offset} escaped extents");
        }
    }

    #[test]
    fn test_midpoint_rule_left_menu() {
        for (dx, expected) in [(49.0, 0.0), (50.0, 100.0)] {
            let mut c = controller_with(RevealMode::OpenBoth, MenuExtents::new(100.0, 60.0));
            drag(&mut c, 0, &[dx]);
            c.on_pointer_up();
            run_frames(&mut c);
            assert_eq!(c.surface().item_offset(ItemIndex(0)), expected);
        }
    }

    #[test]
    fn test_midpoint_rule_right_menu() {
        for (dx, expected) in [(-29.0, 0.0), (-30.0, -60.0)] {
            let mut c = controller(RevealMode::OpenBoth);
            drag(&mut c, 0, &[dx]);
            c.on_pointer_up();
            run_frames(&mut c);
            assert_eq!(c.surface().item_offset(ItemIndex(0)), expected);
        }
    }

    #[test]
    fn test_engaging_cancels_host_and_blocks_interception() {
        let mut c = controller(RevealMode::OpenBoth);
        let dispatches = drag(&mut c, 1, &[-4.0, -20.0, -30.0]);
        assert_eq!(
            dispatches,
            vec![Dispatch::Forward, Dispatch::Forward, Dispatch::Consumed, Dispatch::Consumed]
        );
        assert_eq!(c.surface().host_cancels(), 1);
        assert!(c.surface().intercept_disabled());
        assert!(c.is_engaged());

        c.on_pointer_up();
        assert!(!c.surface().intercept_disabled());
        assert!(!c.is_engaged());
    }

    #[test]
    fn test_tap_is_left_to_host() {
        let mut c = controller(RevealMode::OpenBoth);
        let origin = start(&c, 1);
        assert_eq!(c.on_pointer_down(origin), Dispatch::Forward);
        assert_eq!(c.on_pointer_move(Point::new(origin.x + 2.0, origin.y + 1.0)), Dispatch::Forward);
        assert_eq!(c.on_pointer_up(), Dispatch::Forward);
        assert_eq!(c.surface().host_cancels(), 0);
        assert_eq!(c.active_item(), None);
        assert!(c.drain_events().is_empty());
    }

    #[test]
    fn test_cancel_while_engaged_settles() {
        let mut c = controller(RevealMode::OpenBoth);
        drag(&mut c, 2, &[-40.0]);
        assert_eq!(c.on_pointer_cancel(), Dispatch::Consumed);
        run_frames(&mut c);
        assert_eq!(c.surface().item_offset(ItemIndex(2)), -60.0);
    }

    #[test]
    fn test_slide_back_when_closed_is_noop() {
        let mut c = controller(RevealMode::OpenBoth);
        c.slide_back();
        assert!(c.surface().pending_frame().is_none());

        drag(&mut c, 1, &[-12.0]);
        c.on_pointer_up();
        run_frames(&mut c);
        c.drain_events();

        c.slide_back();
        assert!(c.surface().pending_frame().is_none());
        assert!(c.drain_events().is_empty());
        assert_eq!(c.surface().offsets(), vec![0.0; 5]);
    }

    #[test]
    fn test_slide_back_closes_open_item() {
        let mut c = controller(RevealMode::OpenBoth);
        open_right(&mut c, 3);
        c.slide_back();
        assert_eq!(c.phase(), RevealPhase::SettlingToClosed);
        run_frames(&mut c);
        assert_eq!(c.surface().item_offset(ItemIndex(3)), 0.0);
        assert_eq!(c.phase(), RevealPhase::Idle);
    }

    #[test]
    fn test_slide_back_during_engaged_drag_is_ignored() {
        let mut c = controller(RevealMode::OpenBoth);
        drag(&mut c, 1, &[-20.0]);
        c.slide_back();
        assert!(c.is_engaged());
        assert_eq!(c.on_pointer_move(Point::new(start(&c, 1).x - 45.0, start(&c, 1).y)), Dispatch::Consumed);
        assert_eq!(c.surface().item_offset(ItemIndex(1)), -45.0);
    }

    #[test]
    fn test_slide_back_abandons_undecided_gesture() {
        let mut c = controller(RevealMode::OpenBoth);
        let origin = start(&c, 1);
        c.on_pointer_down(origin);
        c.slide_back();
        assert_eq!(c.on_pointer_move(Point::new(origin.x - 40.0, origin.y)), Dispatch::Ignored);
        assert_eq!(c.on_pointer_up(), Dispatch::Ignored);
        assert_eq!(c.surface().offsets(), vec![0.0; 5]);
    }

    #[test]
    fn test_touch_during_settle_is_dropped() {
        let mut c = controller(RevealMode::OpenBoth);
        drag(&mut c, 1, &[-20.0]);
        c.on_pointer_up();
        assert!(c.pending_frame().is_some());

        let origin = start(&c, 2);
        assert_eq!(c.on_pointer_down(origin), Dispatch::Ignored);
        assert_eq!(c.on_pointer_move(Point::new(origin.x - 40.0, origin.y)), Dispatch::Ignored);
        run_frames(&mut c);
        assert_eq!(c.surface().offsets(), vec![0.0; 5]);
    }

    #[test]
    fn test_touch_while_opening_closes() {
        let mut c = controller(RevealMode::OpenBoth);
        drag(&mut c, 1, &[-40.0]);
        c.on_pointer_up();
        assert_eq!(c.phase(), RevealPhase::SettlingToOpen);

        assert_eq!(c.on_pointer_down(start(&c, 1)), Dispatch::Ignored);
        assert_eq!(c.phase(), RevealPhase::SettlingToClosed);
        run_frames(&mut c);
        assert_eq!(c.surface().item_offset(ItemIndex(1)), 0.0);
    }

    #[test]
    fn test_redrag_open_item() {
        let mut c = controller(RevealMode::OpenBoth);
        let mut config = c.config().clone();
        config.tap_closes_open_item = false;
        c.set_config(config).unwrap();
        open_right(&mut c, 2);

        // Dragging the open item right by 45 moves it from -60 to -15.
        let dispatches = drag(&mut c, 2, &[20.0, 45.0]);
        assert_eq!(dispatches[0], Dispatch::Forward);
        assert_eq!(c.phase(), RevealPhase::Dragging);
        assert_eq!(c.surface().item_offset(ItemIndex(2)), -15.0);

        c.on_pointer_up();
        run_frames(&mut c);
        assert_eq!(c.surface().item_offset(ItemIndex(2)), 0.0);
    }

    #[test]
    fn test_redrag_elsewhere_still_closes() {
        let mut c = controller(RevealMode::OpenBoth);
        let mut config = c.config().clone();
        config.tap_closes_open_item = false;
        c.set_config(config).unwrap();
        open_right(&mut c, 2);

        assert_eq!(c.on_pointer_down(start(&c, 4)), Dispatch::Ignored);
        assert_eq!(c.phase(), RevealPhase::SettlingToClosed);
    }

    #[test]
    fn test_secondary_pointer_ignored() {
        let mut c = controller(RevealMode::OpenBoth);
        let origin = start(&c, 1);
        let first = PointerId(1);
        let second = PointerId(2);

        c.handle_pointer_event(PointerEvent::Down { pointer: first, position: origin });
        let dispatch = c.handle_pointer_event(PointerEvent::Down {
            pointer: second,
            position: start(&c, 3),
        });
        assert_eq!(dispatch, Dispatch::Ignored);

        let dispatch = c.handle_pointer_event(PointerEvent::Move {
            pointer: second,
            position: Point::new(origin.x - 50.0, origin.y),
        });
        assert_eq!(dispatch, Dispatch::Ignored);
        assert_eq!(c.surface().offsets(), vec![0.0; 5]);

        let dispatch = c.handle_pointer_event(PointerEvent::Move {
            pointer: first,
            position: Point::new(origin.x - 50.0, origin.y),
        });
        assert_eq!(dispatch, Dispatch::Consumed);
        assert_eq!(c.surface().item_offset(ItemIndex(1)), -50.0);
        assert_eq!(c.handle_pointer_event(PointerEvent::Cancel { pointer: first }), Dispatch::Consumed);
    }

    #[test]
    fn test_mode_change_closes_forbidden_side() {
        let mut c = controller(RevealMode::OpenBoth);
        open_right(&mut c, 0);
        c.set_mode(RevealMode::OpenRightOnly);
        assert_eq!(c.phase(), RevealPhase::RestingOpen);

        c.set_mode(RevealMode::OpenLeftOnly);
        assert_eq!(c.phase(), RevealPhase::SettlingToClosed);
        run_frames(&mut c);
        assert_eq!(c.surface().item_offset(ItemIndex(0)), 0.0);
    }

    #[test]
    fn test_mode_change_mid_drag_cancels_gesture() {
        let mut c = controller(RevealMode::OpenBoth);
        drag(&mut c, 1, &[-40.0]);
        c.set_mode(RevealMode::Forbidden);
        assert!(!c.is_engaged());
        assert!(!c.surface().intercept_disabled());
        run_frames(&mut c);
        assert_eq!(c.surface().item_offset(ItemIndex(1)), 0.0);
    }

    #[test]
    fn test_lost_up_is_released_on_next_down() {
        let mut c = controller(RevealMode::OpenBoth);
        drag(&mut c, 1, &[-45.0]);
        // No up arrives; the next down ends the drag first and, because that
        // settle opens the item, only closes it.
        assert_eq!(c.on_pointer_down(start(&c, 3)), Dispatch::Ignored);
        assert!(!c.surface().intercept_disabled());
        run_frames(&mut c);
        assert_eq!(c.surface().offsets(), vec![0.0; 5]);
    }

    #[test]
    fn test_recycled_item_mid_drag() {
        let mut c = controller(RevealMode::OpenBoth);
        drag(&mut c, 1, &[-45.0]);
        c.surface_mut().rebind(ItemIndex(1), MenuExtents::new(0.0, 0.0));
        c.item_recycled(ItemIndex(1));
        assert_eq!(c.active_item(), None);
        assert!(!c.surface().intercept_disabled());
        assert_eq!(c.on_pointer_up(), Dispatch::Forward);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let surface = MemorySurface::new(50.0, 300.0);
        let config = SlideConfig {
            touch_slop: f64::NAN,
            ..SlideConfig::default()
        };
        assert!(SlideController::new(surface, config).is_err());
    }
}
