//! Scripted gesture replay against an in-memory list.
//!
//! A script is a JSON document holding the list setup and a sequence of
//! steps. Each step is fed to a [`SlideController`] driving a
//! [`MemorySurface`], and the outcome is recorded as a [`StepReport`].

use std::fmt;
use std::path::Path;
use std::time::Duration;

use kurbo::Point;
use serde::{Deserialize, Serialize};
use slidelist_core::{
    ConfigError, Dispatch, MemorySurface, MenuExtents, PointerEvent, PointerId, RevealMode, RevealPhase,
    SlideConfig, SlideController, SlideEvent,
};
use thiserror::Error;

/// Replay errors.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for replay operations.
pub type ReplayResult<T> = Result<T, ReplayError>;

fn default_row_height() -> f64 {
    48.0
}

fn default_width() -> f64 {
    320.0
}

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        pointer: PointerId,
    },
    Move {
        x: f64,
        y: f64,
        #[serde(default)]
        pointer: PointerId,
    },
    Up {
        x: f64,
        y: f64,
        #[serde(default)]
        pointer: PointerId,
    },
    Cancel {
        #[serde(default)]
        pointer: PointerId,
    },
    /// Deliver up to `count` pending frames, `dt_ms` apart.
    Frames { count: u32, dt_ms: u64 },
    SlideBack,
    SetMode { mode: RevealMode },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Down { x, y, pointer } => write!(f, "down#{} ({x}, {y})", pointer.0),
            Step::Move { x, y, pointer } => write!(f, "move#{} ({x}, {y})", pointer.0),
            Step::Up { x, y, pointer } => write!(f, "up#{} ({x}, {y})", pointer.0),
            Step::Cancel { pointer } => write!(f, "cancel#{}", pointer.0),
            Step::Frames { count, dt_ms } => write!(f, "frames {count}x{dt_ms}ms"),
            Step::SlideBack => write!(f, "slide_back"),
            Step::SetMode { mode } => write!(f, "set_mode {mode:?}"),
        }
    }
}

/// A list setup plus the steps to play against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub config: SlideConfig,
    #[serde(default = "default_row_height")]
    pub row_height: f64,
    #[serde(default = "default_width")]
    pub width: f64,
    /// Menu extents of each row, top to bottom.
    pub items: Vec<MenuExtents>,
    pub steps: Vec<Step>,
}

impl ReplayScript {
    pub fn from_json(json: &str) -> ReplayResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> ReplayResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// What one step did.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub step: Step,
    /// Verdict for pointer steps.
    pub dispatch: Option<Dispatch>,
    /// Frames actually run by a `frames` step.
    pub frames: u32,
    pub phase: RevealPhase,
    pub offsets: Vec<f64>,
    pub events: Vec<SlideEvent>,
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<24}", self.step.to_string())?;
        match (&self.step, self.dispatch) {
            (_, Some(dispatch)) => write!(f, " {dispatch:?}")?,
            (Step::Frames { .. }, None) => write!(f, " ran {}", self.frames)?,
            _ => {}
        }
        let offsets: Vec<String> = self.offsets.iter().map(|o| format!("{o:.1}")).collect();
        write!(f, " | {:?} [{}]", self.phase, offsets.join(", "))?;
        for event in &self.events {
            write!(f, "\n    {event:?}")?;
        }
        Ok(())
    }
}

/// A controller over an in-memory list, fed one step at a time.
#[derive(Debug)]
pub struct Replay {
    controller: SlideController<MemorySurface>,
}

impl Replay {
    pub fn new(script: &ReplayScript) -> ReplayResult<Self> {
        let surface = MemorySurface::with_items(
            script.row_height,
            script.width,
            script.items.iter().map(|e| MenuExtents::new(e.left, e.right)),
        );
        let controller = SlideController::new(surface, script.config.clone())?;
        Ok(Self { controller })
    }

    pub fn controller(&self) -> &SlideController<MemorySurface> {
        &self.controller
    }

    /// Apply one step and report the resulting state.
    pub fn step(&mut self, step: &Step) -> StepReport {
        let mut frames = 0;
        let dispatch = match *step {
            Step::Down { x, y, pointer } => Some(self.pointer(PointerEvent::Down {
                pointer,
                position: Point::new(x, y),
            })),
            Step::Move { x, y, pointer } => Some(self.pointer(PointerEvent::Move {
                pointer,
                position: Point::new(x, y),
            })),
            Step::Up { x, y, pointer } => Some(self.pointer(PointerEvent::Up {
                pointer,
                position: Point::new(x, y),
            })),
            Step::Cancel { pointer } => Some(self.pointer(PointerEvent::Cancel { pointer })),
            Step::Frames { count, dt_ms } => {
                frames = self.run_frames(count, Duration::from_millis(dt_ms));
                None
            }
            Step::SlideBack => {
                self.controller.slide_back();
                None
            }
            Step::SetMode { mode } => {
                self.controller.set_mode(mode);
                None
            }
        };

        StepReport {
            step: step.clone(),
            dispatch,
            frames,
            phase: self.controller.phase(),
            offsets: self.controller.surface().offsets(),
            events: self.controller.drain_events(),
        }
    }

    fn pointer(&mut self, event: PointerEvent) -> Dispatch {
        self.controller.handle_pointer_event(event)
    }

    fn run_frames(&mut self, count: u32, dt: Duration) -> u32 {
        let mut ran = 0;
        for _ in 0..count {
            let Some(token) = self.controller.surface_mut().take_frame() else {
                break;
            };
            self.controller.on_frame(token, dt);
            ran += 1;
        }
        ran
    }
}

/// Play a whole script.
pub fn run(script: &ReplayScript) -> ReplayResult<Vec<StepReport>> {
    let mut replay = Replay::new(script)?;
    let reports = script.steps.iter().map(|step| replay.step(step)).collect();
    Ok(reports)
}
