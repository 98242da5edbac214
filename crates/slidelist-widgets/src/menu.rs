//! Side menu actions: layout and painting.

use egui::{pos2, vec2, Align2, Color32, CornerRadius, FontId, Painter, Rect};
use slidelist_core::{MenuExtents, MenuSide};

use crate::theme;

/// A button shown in an item's side menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuAction {
    pub label: String,
    pub color: Color32,
}

impl MenuAction {
    pub fn new(label: impl Into<String>, color: Color32) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }

    /// A blue everyday action.
    pub fn neutral(label: impl Into<String>) -> Self {
        Self::new(label, theme::ACCENT)
    }

    /// A red destructive action.
    pub fn delete(label: impl Into<String>) -> Self {
        Self::new(label, theme::DANGER)
    }
}

/// A list row: its label and the actions behind it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideItem {
    pub label: String,
    pub left_actions: Vec<MenuAction>,
    pub right_actions: Vec<MenuAction>,
}

impl SlideItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn left(mut self, action: MenuAction) -> Self {
        self.left_actions.push(action);
        self
    }

    pub fn right(mut self, action: MenuAction) -> Self {
        self.right_actions.push(action);
        self
    }

    /// Actions on one side.
    pub fn actions(&self, side: MenuSide) -> &[MenuAction] {
        match side {
            MenuSide::Left => &self.left_actions,
            MenuSide::Right => &self.right_actions,
        }
    }

    /// Menu widths when every action is `action_width` wide.
    pub fn extents(&self, action_width: f32) -> MenuExtents {
        MenuExtents::new(
            self.left_actions.len() as f64 * action_width as f64,
            self.right_actions.len() as f64 * action_width as f64,
        )
    }
}

/// Rects of the actions on one side of a row, in the row's coordinate space.
pub fn action_rects(row: Rect, side: MenuSide, count: usize, action_width: f32) -> Vec<Rect> {
    (0..count)
        .map(|k| {
            let left = match side {
                MenuSide::Left => row.left() + k as f32 * action_width,
                MenuSide::Right => row.right() - (count - k) as f32 * action_width,
            };
            Rect::from_min_size(pos2(left, row.top()), vec2(action_width, row.height()))
        })
        .collect()
}

/// Paint both side menus of a row.
pub fn paint_menus(painter: &Painter, row: Rect, item: &SlideItem, action_width: f32) {
    for side in [MenuSide::Left, MenuSide::Right] {
        let actions = item.actions(side);
        for (rect, action) in action_rects(row, side, actions.len(), action_width)
            .into_iter()
            .zip(actions)
        {
            painter.rect_filled(rect, CornerRadius::ZERO, action.color);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                &action.label,
                FontId::proportional(13.0),
                Color32::WHITE,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extents_from_actions() {
        let item = SlideItem::new("Inbox")
            .left(MenuAction::neutral("Pin"))
            .right(MenuAction::new("Archive", Color32::GRAY))
            .right(MenuAction::delete("Delete"));
        assert_eq!(item.extents(70.0), MenuExtents::new(70.0, 140.0));
        assert_eq!(item.left_actions[0].color, theme::ACCENT);
        assert_eq!(item.right_actions[1].color, theme::DANGER);
    }

    #[test]
    fn test_action_rects_hug_edges() {
        let row = Rect::from_min_size(pos2(0.0, 100.0), vec2(300.0, 48.0));

        let left = action_rects(row, MenuSide::Left, 2, 60.0);
        assert_eq!(left[0].left(), 0.0);
        assert_eq!(left[1].right(), 120.0);

        let right = action_rects(row, MenuSide::Right, 2, 60.0);
        assert_eq!(right[0].left(), 180.0);
        assert_eq!(right[1].right(), 300.0);
        assert_eq!(right[1].top(), 100.0);
    }
}
