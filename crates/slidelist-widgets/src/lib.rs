//! egui front end for the slide list core.
//!
//! - **SlideList**: a scrolling list whose rows reveal left/right menus
//! - **Menu**: side menu actions, their layout and painting
//! - **Surface**: the [`slidelist_core::ListSurface`] the widget drives

pub mod menu;
pub mod slide_list;
pub mod surface;

pub use menu::{action_rects, paint_menus, MenuAction, SlideItem};
pub use slide_list::{ActionClick, SlideList, SlideListOutput, SlideListState, SlideListStyle};
pub use surface::EguiSurface;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Height of a list row
    pub const ROW_HEIGHT: f32 = 48.0;
    /// Width of one side-menu action
    pub const ACTION_WIDTH: f32 = 72.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Neutral action color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Destructive action color (red)
    pub const DANGER: Color32 = Color32::from_rgb(239, 68, 68);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
