//! The swipe-menu list widget.

use std::time::Duration;

use egui::{pos2, vec2, Align2, Color32, CornerRadius, Event, FontId, PointerButton, Pos2, Rect, Sense, Stroke, Ui};
use kurbo::Point;
use slidelist_core::{
    ConfigResult, ItemIndex, ListSurface, MenuSide, PointerEvent, PointerId, RevealPhase, SlideConfig,
    SlideController, SlideEvent,
};

use crate::menu::{action_rects, paint_menus, SlideItem};
use crate::surface::EguiSurface;
use crate::{sizing, theme};

/// egui only reports a single primary pointer.
const PRIMARY: PointerId = PointerId(0);

/// Visual configuration of a [`SlideList`].
#[derive(Debug, Clone)]
pub struct SlideListStyle {
    pub row_height: f32,
    pub action_width: f32,
    pub background: Color32,
    pub body_color: Color32,
    pub text_color: Color32,
    pub divider_color: Color32,
}

impl Default for SlideListStyle {
    fn default() -> Self {
        Self {
            row_height: sizing::ROW_HEIGHT,
            action_width: sizing::ACTION_WIDTH,
            background: theme::PANEL_BG,
            body_color: Color32::WHITE,
            text_color: theme::TEXT,
            divider_color: theme::BORDER,
        }
    }
}

/// A menu action that was tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionClick {
    pub item: ItemIndex,
    pub side: MenuSide,
    pub action: usize,
}

/// What happened in the list this frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideListOutput {
    /// A row body was tapped.
    pub clicked: Option<ItemIndex>,
    /// A side-menu action was tapped.
    pub action: Option<ActionClick>,
    /// Reveal events drained from the controller.
    pub events: Vec<SlideEvent>,
}

#[derive(Debug, Clone, Copy)]
struct HostPress {
    origin: Pos2,
    last: Pos2,
    dragging: bool,
}

#[derive(Debug, Clone, Copy)]
struct ActionPress {
    click: ActionClick,
    rect: Rect,
}

/// Persistent state of a [`SlideList`]; keep it across frames.
#[derive(Debug)]
pub struct SlideListState {
    controller: SlideController<EguiSurface>,
    host_press: Option<HostPress>,
    action_press: Option<ActionPress>,
    pointer_down: bool,
    viewport_height: f64,
}

impl SlideListState {
    pub fn new(config: SlideConfig) -> ConfigResult<Self> {
        Ok(Self {
            controller: SlideController::new(EguiSurface::new(), config)?,
            host_press: None,
            action_press: None,
            pointer_down: false,
            viewport_height: 0.0,
        })
    }

    pub fn controller(&self) -> &SlideController<EguiSurface> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SlideController<EguiSurface> {
        &mut self.controller
    }

    /// Close the open row, if any.
    pub fn slide_back(&mut self) {
        self.controller.slide_back();
    }

    /// Sync geometry and row bindings with this frame's items.
    pub fn prepare(&mut self, rect: Rect, items: &[SlideItem], style: &SlideListStyle) {
        self.viewport_height = rect.height() as f64;
        let extents: Vec<_> = items.iter().map(|item| item.extents(style.action_width)).collect();
        let surface = self.controller.surface_mut();
        surface.set_viewport(rect.width() as f64, style.row_height as f64);
        let rebound = surface.bind(&extents);
        for index in rebound {
            self.controller.item_recycled(index);
        }
        if let Some(active) = self.controller.active_item().filter(|active| active.0 >= items.len()) {
            self.controller.item_recycled(active);
        }
        self.controller.surface_mut().scroll_by(0.0, self.viewport_height);
    }

    /// Run the pending settle frame, if any.
    pub fn advance(&mut self, dt: Duration) {
        if let Some(token) = self.controller.surface_mut().take_frame() {
            self.controller.on_frame(token, dt);
        }
    }

    /// Feed one egui input event. `rect` is the list's screen rect.
    pub fn handle_event(
        &mut self,
        event: &Event,
        rect: Rect,
        items: &[SlideItem],
        style: &SlideListStyle,
        output: &mut SlideListOutput,
    ) {
        match event {
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: true,
                ..
            } => {
                if !rect.contains(*pos) {
                    return;
                }
                self.pointer_down = true;
                if let Some(press) = self.hit_action(*pos, rect, items, style) {
                    self.action_press = Some(press);
                    return;
                }
                self.controller.surface_mut().clear_gesture_cancelled();
                let position = self.to_local(*pos, rect);
                let dispatch = self.controller.handle_pointer_event(PointerEvent::Down {
                    pointer: PRIMARY,
                    position,
                });
                self.host_press = dispatch.forwards().then_some(HostPress {
                    origin: *pos,
                    last: *pos,
                    dragging: false,
                });
            }
            Event::PointerMoved(pos) => {
                if !self.pointer_down || self.action_press.is_some() {
                    return;
                }
                let position = self.to_local(*pos, rect);
                let dispatch = self.controller.handle_pointer_event(PointerEvent::Move {
                    pointer: PRIMARY,
                    position,
                });
                self.host_move(*pos, dispatch.forwards());
            }
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: false,
                ..
            } => {
                if !self.pointer_down {
                    return;
                }
                self.pointer_down = false;
                if let Some(press) = self.action_press.take() {
                    if press.rect.contains(*pos) {
                        log::debug!("Menu action {:?}", press.click);
                        output.action = Some(press.click);
                        self.controller.slide_back();
                    }
                    return;
                }
                let position = self.to_local(*pos, rect);
                let dispatch = self.controller.handle_pointer_event(PointerEvent::Up {
                    pointer: PRIMARY,
                    position,
                });
                if let Some(press) = self.host_press.take() {
                    let surface = self.controller.surface();
                    if dispatch.forwards() && !press.dragging && !surface.gesture_cancelled() {
                        output.clicked = surface.item_at(position);
                    }
                }
            }
            Event::PointerGone => {
                if !self.pointer_down {
                    return;
                }
                self.pointer_down = false;
                self.action_press = None;
                self.host_press = None;
                self.controller
                    .handle_pointer_event(PointerEvent::Cancel { pointer: PRIMARY });
            }
            _ => {}
        }
    }

    /// The host list's own reaction to a forwarded move: vertical scrolling.
    fn host_move(&mut self, pos: Pos2, forwarded: bool) {
        let cancelled = self.controller.surface().gesture_cancelled();
        let Some(press) = self.host_press.as_mut() else {
            return;
        };
        if !forwarded || cancelled {
            self.host_press = None;
            return;
        }
        let slop = self.controller.config().touch_slop as f32;
        if !press.dragging && (pos - press.origin).length() > slop {
            press.dragging = true;
        }
        let surface = self.controller.surface_mut();
        if press.dragging && !surface.intercept_disabled() {
            surface.scroll_by((press.last.y - pos.y) as f64, self.viewport_height);
        }
        press.last = pos;
    }

    fn to_local(&self, pos: Pos2, rect: Rect) -> Point {
        Point::new(
            (pos.x - rect.left()) as f64,
            (pos.y - rect.top()) as f64 + self.controller.surface().scroll_y(),
        )
    }

    fn row_rect(&self, index: ItemIndex, rect: Rect, style: &SlideListStyle) -> Rect {
        let top = rect.top() + index.0 as f32 * style.row_height - self.controller.surface().scroll_y() as f32;
        Rect::from_min_size(pos2(rect.left(), top), vec2(rect.width(), style.row_height))
    }

    /// Find the menu action under `pos` on the open row.
    fn hit_action(&self, pos: Pos2, rect: Rect, items: &[SlideItem], style: &SlideListStyle) -> Option<ActionPress> {
        if self.controller.phase() != RevealPhase::RestingOpen {
            return None;
        }
        let item = self.controller.open_item()?;
        let side = MenuSide::from_offset(self.controller.state().offset)?;
        let actions = items.get(item.0)?.actions(side);
        let row = self.row_rect(item, rect, style);
        action_rects(row, side, actions.len(), style.action_width)
            .into_iter()
            .enumerate()
            .find(|(_, r)| r.contains(pos))
            .map(|(action, r)| ActionPress {
                click: ActionClick { item, side, action },
                rect: r,
            })
    }
}

/// A vertically scrolling list whose rows reveal side menus when swiped.
pub struct SlideList<'a> {
    state: &'a mut SlideListState,
    items: &'a [SlideItem],
    style: SlideListStyle,
}

impl<'a> SlideList<'a> {
    pub fn new(state: &'a mut SlideListState, items: &'a [SlideItem]) -> Self {
        Self {
            state,
            items,
            style: SlideListStyle::default(),
        }
    }

    pub fn style(mut self, style: SlideListStyle) -> Self {
        self.style = style;
        self
    }

    /// Lay out, handle input, advance animations and paint.
    pub fn show(self, ui: &mut Ui) -> SlideListOutput {
        let SlideList { state, items, style } = self;
        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        state.prepare(rect, items, &style);

        let mut output = SlideListOutput::default();
        let events = ui.input(|i| i.events.clone());
        for event in &events {
            state.handle_event(event, rect, items, &style, &mut output);
        }

        if ui.rect_contains_pointer(rect) && !state.controller.surface().intercept_disabled() {
            let dy = ui.input(|i| i.smooth_scroll_delta.y);
            if dy != 0.0 {
                state
                    .controller
                    .surface_mut()
                    .scroll_by(-dy as f64, state.viewport_height);
            }
        }

        let dt = ui.input(|i| i.stable_dt).max(0.0).min(1.0);
        state.advance(Duration::from_secs_f32(dt));
        if state.controller.surface_mut().take_repaint() || state.controller.pending_frame().is_some() {
            ui.ctx().request_repaint();
        }

        if ui.is_rect_visible(rect) {
            paint(ui, rect, state, items, &style);
        }

        output.events = state.controller.drain_events();
        output
    }
}

fn paint(ui: &Ui, rect: Rect, state: &SlideListState, items: &[SlideItem], style: &SlideListStyle) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, CornerRadius::ZERO, style.background);

    let surface = state.controller.surface();
    for (i, item) in items.iter().enumerate() {
        let index = ItemIndex(i);
        let row = state.row_rect(index, rect, style);
        if row.bottom() < rect.top() || row.top() > rect.bottom() {
            continue;
        }

        let offset = surface.item_offset(index) as f32;
        if offset != 0.0 {
            paint_menus(&painter, row, item, style.action_width);
        }

        let body = row.translate(vec2(offset, 0.0));
        painter.rect_filled(body, CornerRadius::ZERO, style.body_color);
        painter.text(
            pos2(body.left() + 16.0, body.center().y),
            Align2::LEFT_CENTER,
            &item.label,
            FontId::proportional(14.0),
            style.text_color,
        );
        painter.line_segment(
            [row.left_bottom(), row.right_bottom()],
            Stroke::new(1.0, style.divider_color),
        );
    }
}
