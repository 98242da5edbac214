//! Reveal modes and menu sides.

use serde::{Deserialize, Serialize};

/// Which side menus a list allows to be revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RevealMode {
    /// Swiping is disabled; every gesture belongs to the host list.
    #[default]
    Forbidden,
    /// Only the left menu may be revealed (finger moves right).
    OpenLeftOnly,
    /// Only the right menu may be revealed (finger moves left).
    OpenRightOnly,
    /// Both menus may be revealed.
    OpenBoth,
}

impl RevealMode {
    /// Check if the left menu may be revealed.
    pub fn allows_left(self) -> bool {
        matches!(self, RevealMode::OpenLeftOnly | RevealMode::OpenBoth)
    }

    /// Check if the right menu may be revealed.
    pub fn allows_right(self) -> bool {
        matches!(self, RevealMode::OpenRightOnly | RevealMode::OpenBoth)
    }

    /// Check if the given side may be revealed.
    pub fn allows(self, side: MenuSide) -> bool {
        match side {
            MenuSide::Left => self.allows_left(),
            MenuSide::Right => self.allows_right(),
        }
    }

    /// Check if swiping is enabled at all.
    pub fn is_enabled(self) -> bool {
        self != RevealMode::Forbidden
    }
}

/// A side menu of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuSide {
    Left,
    Right,
}

impl MenuSide {
    /// The side revealed by a signed offset.
    ///
    /// Positive offsets shift the item right and expose the left menu,
    /// negative offsets shift it left and expose the right menu.
    pub fn from_offset(offset: f64) -> Option<Self> {
        if offset > 0.0 {
            Some(MenuSide::Left)
        } else if offset < 0.0 {
            Some(MenuSide::Right)
        } else {
            None
        }
    }
}

/// Distances an item may travel to fully reveal each of its menus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuExtents {
    /// Width of the left menu (travel to the right).
    pub left: f64,
    /// Width of the right menu (travel to the left).
    pub right: f64,
}

impl MenuExtents {
    pub const ZERO: MenuExtents = MenuExtents { left: 0.0, right: 0.0 };

    /// Create extents, treating negative or non-finite widths as absent menus.
    pub fn new(left: f64, right: f64) -> Self {
        Self {
            left: sanitize(left),
            right: sanitize(right),
        }
    }

    /// Keep only the extents the mode allows; the other side becomes 0.
    pub fn filtered(self, mode: RevealMode) -> Self {
        Self {
            left: if mode.allows_left() { self.left } else { 0.0 },
            right: if mode.allows_right() { self.right } else { 0.0 },
        }
    }

    /// Extent for a side.
    pub fn get(&self, side: MenuSide) -> f64 {
        match side {
            MenuSide::Left => self.left,
            MenuSide::Right => self.right,
        }
    }

    /// Clamp a signed offset into `[-right, left]`.
    ///
    /// An offset whose side has no extent collapses to 0.
    pub fn clamp(&self, offset: f64) -> f64 {
        match MenuSide::from_offset(offset) {
            Some(MenuSide::Left) => offset.min(self.left),
            Some(MenuSide::Right) => offset.max(-self.right),
            None => 0.0,
        }
    }

    /// The fully open offset for a side (signed).
    pub fn open_offset(&self, side: MenuSide) -> f64 {
        match side {
            MenuSide::Left => self.left,
            MenuSide::Right => -self.right,
        }
    }
}

fn sanitize(width: f64) -> f64 {
    if width.is_finite() && width > 0.0 { width } else { 0.0 }
}
