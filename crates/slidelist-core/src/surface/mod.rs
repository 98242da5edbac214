//! Capabilities the core needs from the host list.
//!
//! The gesture and animation logic never touches a view hierarchy directly.
//! A host list (native widget, immediate-mode UI, test double) implements
//! [`ListSurface`] and the controller drives it.

mod memory;

pub use memory::MemorySurface;

use crate::mode::MenuExtents;
use crate::ticker::FrameToken;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Stable adapter position of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemIndex(pub usize);

/// Row under `position` in a list of `len` rows of `row_height`, `width` wide.
///
/// Points outside the list, or with non-finite coordinates, hit nothing.
pub fn row_at(position: Point, row_height: f64, width: f64, len: usize) -> Option<ItemIndex> {
    if !position.x.is_finite() || !position.y.is_finite() {
        return None;
    }
    if position.x < 0.0 || position.x > width || position.y < 0.0 {
        return None;
    }
    let row = (position.y / row_height).floor() as usize;
    (row < len).then_some(ItemIndex(row))
}

/// Trait for list surfaces hosting swipe-menu items.
pub trait ListSurface {
    /// Resolve the item under a surface-local point.
    fn item_at(&self, position: Point) -> Option<ItemIndex>;

    /// Check if an index still refers to a bound item.
    fn is_valid(&self, index: ItemIndex) -> bool;

    /// Menu widths configured on an item.
    fn menu_extents(&self, index: ItemIndex) -> MenuExtents;

    /// Current horizontal rendering offset of an item.
    fn item_offset(&self, index: ItemIndex) -> f64;

    /// Set the horizontal rendering offset of an item.
    fn set_item_offset(&mut self, index: ItemIndex, offset: f64);

    /// Request a redraw of an item after its offset changed.
    fn invalidate(&mut self, index: ItemIndex);

    /// Stop (or resume) the list's own vertical touch interception.
    fn set_intercept_disabled(&mut self, disabled: bool);

    /// Deliver a synthetic cancel to the list's own gesture handling so the
    /// current gesture cannot also scroll the list or fire an item click.
    fn cancel_host_gesture(&mut self);

    /// Schedule one frame callback that must call back into the controller
    /// with the given token.
    fn request_frame(&mut self, token: FrameToken);
}
