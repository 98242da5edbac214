//! SlideList Core Library
//!
//! Platform-agnostic gesture classification and reveal animation for list
//! items with left/right swipe menus. The host list plugs in through the
//! [`ListSurface`] trait; everything else is a plain state machine.

pub mod animator;
pub mod classifier;
pub mod config;
pub mod controller;
pub mod events;
pub mod input;
pub mod mode;
pub mod surface;
pub mod ticker;

pub use animator::{ItemRevealState, RevealAnimator, RevealPhase, SettleAnimation, SettleEasing, settle_target};
pub use classifier::{DirectionLock, GestureClassifier, GestureSession};
pub use config::{ConfigError, ConfigResult, SlideConfig, DEFAULT_TOUCH_SLOP};
pub use controller::SlideController;
pub use events::SlideEvent;
pub use input::{Dispatch, PointerEvent, PointerId, PointerTracker};
pub use mode::{MenuExtents, MenuSide, RevealMode};
pub use surface::{ItemIndex, ListSurface, MemorySurface};
pub use ticker::{FrameTicker, FrameToken};
