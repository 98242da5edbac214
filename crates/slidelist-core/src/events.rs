//! Notifications emitted while items are dragged, settled, opened and closed.

use crate::mode::MenuSide;
use crate::surface::ItemIndex;
use serde::{Deserialize, Serialize};

/// Something that happened to the active item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SlideEvent {
    /// A horizontal drag took control of an item.
    DragStarted { item: ItemIndex },
    /// A settle animation began toward `target`.
    SettleStarted { item: ItemIndex, target: f64 },
    /// An item came to rest with a menu fully revealed.
    Opened { item: ItemIndex, side: MenuSide },
    /// An item came to rest closed.
    Closed { item: ItemIndex },
}

impl SlideEvent {
    /// The item the event concerns.
    pub fn item(&self) -> ItemIndex {
        match self {
            SlideEvent::DragStarted { item }
            | SlideEvent::SettleStarted { item, .. }
            | SlideEvent::Opened { item, .. }
            | SlideEvent::Closed { item } => *item,
        }
    }
}
