//! List surface backed by the egui widget's own row state.

use kurbo::Point;
use slidelist_core::surface::row_at;
use slidelist_core::{FrameToken, ItemIndex, ListSurface, MenuExtents};

#[derive(Debug, Clone, Default)]
struct Row {
    extents: MenuExtents,
    offset: f64,
}

/// Row offsets, vertical scroll and host-gesture flags of a [`crate::SlideList`].
///
/// Coordinates handed to [`ListSurface::item_at`] are list-local content
/// coordinates: x from the list's left edge, y from the top of the first row.
#[derive(Debug, Clone)]
pub struct EguiSurface {
    rows: Vec<Row>,
    row_height: f64,
    width: f64,
    scroll_y: f64,
    intercept_disabled: bool,
    gesture_cancelled: bool,
    pending_frame: Option<FrameToken>,
    needs_repaint: bool,
}

impl Default for EguiSurface {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            row_height: 1.0,
            width: 0.0,
            scroll_y: 0.0,
            intercept_disabled: false,
            gesture_cancelled: false,
            pending_frame: None,
            needs_repaint: false,
        }
    }
}

impl EguiSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the geometry for this frame.
    pub fn set_viewport(&mut self, width: f64, row_height: f64) {
        self.width = width.max(0.0);
        self.row_height = row_height.max(1.0);
    }

    /// Bind row extents. Returns indices whose content changed and were reset.
    pub fn bind(&mut self, extents: &[MenuExtents]) -> Vec<ItemIndex> {
        let mut rebound = Vec::new();
        self.rows.truncate(extents.len());
        for (i, e) in extents.iter().enumerate() {
            match self.rows.get_mut(i) {
                Some(row) if row.extents != *e => {
                    row.extents = *e;
                    row.offset = 0.0;
                    rebound.push(ItemIndex(i));
                }
                Some(_) => {}
                None => self.rows.push(Row {
                    extents: *e,
                    offset: 0.0,
                }),
            }
        }
        rebound
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Scroll by `dy`, clamped so the content stays inside the viewport.
    pub fn scroll_by(&mut self, dy: f64, viewport_height: f64) {
        let content = self.rows.len() as f64 * self.row_height;
        let max = (content - viewport_height).max(0.0);
        let scroll_y = (self.scroll_y + dy).clamp(0.0, max);
        if scroll_y != self.scroll_y {
            self.scroll_y = scroll_y;
            self.needs_repaint = true;
        }
    }

    pub fn intercept_disabled(&self) -> bool {
        self.intercept_disabled
    }

    /// Whether the core cancelled the host's handling of the current gesture.
    pub fn gesture_cancelled(&self) -> bool {
        self.gesture_cancelled
    }

    /// Start a fresh host gesture.
    pub fn clear_gesture_cancelled(&mut self) {
        self.gesture_cancelled = false;
    }

    pub fn take_frame(&mut self) -> Option<FrameToken> {
        self.pending_frame.take()
    }

    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }
}

impl ListSurface for EguiSurface {
    fn item_at(&self, position: Point) -> Option<ItemIndex> {
        row_at(position, self.row_height, self.width, self.rows.len())
    }

    fn is_valid(&self, index: ItemIndex) -> bool {
        index.0 < self.rows.len()
    }

    fn menu_extents(&self, index: ItemIndex) -> MenuExtents {
        self.rows.get(index.0).map_or(MenuExtents::ZERO, |row| row.extents)
    }

    fn item_offset(&self, index: ItemIndex) -> f64 {
        self.rows.get(index.0).map_or(0.0, |row| row.offset)
    }

    fn set_item_offset(&mut self, index: ItemIndex, offset: f64) {
        if let Some(row) = self.rows.get_mut(index.0) {
            row.offset = offset;
        }
    }

    fn invalidate(&mut self, _index: ItemIndex) {
        self.needs_repaint = true;
    }

    fn set_intercept_disabled(&mut self, disabled: bool) {
        self.intercept_disabled = disabled;
    }

    fn cancel_host_gesture(&mut self) {
        self.gesture_cancelled = true;
    }

    fn request_frame(&mut self, token: FrameToken) {
        self.pending_frame = Some(token);
        self.needs_repaint = true;
    }
}
