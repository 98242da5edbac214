//! In-memory list surface.

use super::{row_at, ItemIndex, ListSurface};
use crate::mode::MenuExtents;
use crate::ticker::FrameToken;
use kurbo::Point;

#[derive(Debug, Clone, Default)]
struct MemoryItem {
    extents: MenuExtents,
    offset: f64,
    invalidations: usize,
}

/// A vertical list of fixed-height rows kept in memory.
///
/// Used for testing, replaying recorded gestures, and as a reference for
/// real host integrations.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    items: Vec<MemoryItem>,
    row_height: f64,
    width: f64,
    intercept_disabled: bool,
    host_cancels: usize,
    pending_frame: Option<FrameToken>,
}

impl MemorySurface {
    /// Create an empty surface with the given row height and width.
    pub fn new(row_height: f64, width: f64) -> Self {
        Self {
            items: Vec::new(),
            row_height: row_height.max(1.0),
            width: width.max(0.0),
            intercept_disabled: false,
            host_cancels: 0,
            pending_frame: None,
        }
    }

    /// Create a surface with one row per extents entry.
    pub fn with_items(row_height: f64, width: f64, extents: impl IntoIterator<Item = MenuExtents>) -> Self {
        let mut surface = Self::new(row_height, width);
        for e in extents {
            surface.push_item(e);
        }
        surface
    }

    /// Append a row.
    pub fn push_item(&mut self, extents: MenuExtents) -> ItemIndex {
        self.items.push(MemoryItem {
            extents,
            ..MemoryItem::default()
        });
        ItemIndex(self.items.len() - 1)
    }

    /// Remove the last row.
    pub fn pop_item(&mut self) {
        self.items.pop();
    }

    /// Rebind a row to new content, resetting its offset.
    pub fn rebind(&mut self, index: ItemIndex, extents: MenuExtents) {
        if let Some(item) = self.items.get_mut(index.0) {
            item.extents = extents;
            item.offset = 0.0;
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the surface has no rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Row height in surface units.
    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Center point of a row, handy for building gestures.
    pub fn row_center(&self, index: ItemIndex) -> Point {
        Point::new(self.width / 2.0, (index.0 as f64 + 0.5) * self.row_height)
    }

    /// Offsets of all rows in order.
    pub fn offsets(&self) -> Vec<f64> {
        self.items.iter().map(|item| item.offset).collect()
    }

    /// How many redraws were requested for a row.
    pub fn invalidations(&self, index: ItemIndex) -> usize {
        self.items.get(index.0).map_or(0, |item| item.invalidations)
    }

    /// Whether the host's own interception is currently disabled.
    pub fn intercept_disabled(&self) -> bool {
        self.intercept_disabled
    }

    /// How many synthetic cancels were delivered to the host.
    pub fn host_cancels(&self) -> usize {
        self.host_cancels
    }

    /// Take the token of the frame the core asked for, if any.
    pub fn take_frame(&mut self) -> Option<FrameToken> {
        self.pending_frame.take()
    }

    /// Peek at the pending frame token.
    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.pending_frame
    }
}

impl ListSurface for MemorySurface {
    fn item_at(&self, position: Point) -> Option<ItemIndex> {
        row_at(position, self.row_height, self.width, self.items.len())
    }

    fn is_valid(&self, index: ItemIndex) -> bool {
        index.0 < self.items.len()
    }

    fn menu_extents(&self, index: ItemIndex) -> MenuExtents {
        self.items.get(index.0).map_or(MenuExtents::ZERO, |item| item.extents)
    }

    fn item_offset(&self, index: ItemIndex) -> f64 {
        self.items.get(index.0).map_or(0.0, |item| item.offset)
    }

    fn set_item_offset(&mut self, index: ItemIndex, offset: f64) {
        if let Some(item) = self.items.get_mut(index.0) {
            item.offset = offset;
        }
    }

    fn invalidate(&mut self, index: ItemIndex) {
        if let Some(item) = self.items.get_mut(index.0) {
            item.invalidations += 1;
        }
    }

    fn set_intercept_disabled(&mut self, disabled: bool) {
        self.intercept_disabled = disabled;
    }

    fn cancel_host_gesture(&mut self) {
        self.host_cancels += 1;
    }

    fn request_frame(&mut self, token: FrameToken) {
        self.pending_frame = Some(token);
    }
}
