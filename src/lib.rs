//! quad-lessons
//!
//! Tutorial-style rendering lessons: open a window, set up a GPU context and
//! draw simple textured quads from hard-coded vertex data. Every lesson
//! shares the same window, input and render loop and only varies what is
//! drawn, from a plain clear colour to ten quads seen through a fly camera.
//!
//! High-level modules
//! - `app`: window creation and the event loop (`run`)
//! - `camera`: fly camera, projection and the camera uniform
//! - `context`: GPU and window context that owns surface/device/queue
//! - `data_structures`: literal quad geometry and GPU textures
//! - `input`: keyboard to action mapping
//! - `lesson`: the lesson variations and what each one draws
//! - `overlay`: hooks for layers drawn over a lesson, plus the frame rate
//!   overlay
//! - `pipelines`: the quad render pipeline
//! - `render`: per-lesson GPU buffers and the frame
//! - `resources`: texture asset loading
//! - `settings`: window hints and command line configuration
//!

pub mod app;
pub mod camera;
pub mod context;
pub mod data_structures;
pub mod error;
pub mod input;
pub mod lesson;
pub mod overlay;
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod settings;

pub use app::run;
pub use error::{AppError, SettingsError};
pub use lesson::Lesson;
pub use settings::{Cli, Settings};
