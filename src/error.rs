//! Error types for initialization and settings.
//!
//! Only failures that stop a lesson from starting are errors. Missing
//! textures are logged and replaced with a fallback instead, see
//! [`crate::resources::load_texture_or_fallback`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("Failed to run the event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("Surface reports no formats or alpha modes for this adapter")]
    SurfaceUnsupported,

    #[error("No compatible graphics adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("Failed to request device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("Failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsError),
}

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("window size must be non-zero, got {width}x{height}")]
    ZeroSize { width: u32, height: u32 },

    #[error("camera speed must be finite and non-negative, got {0}")]
    CameraSpeed(f32),

    #[error("expected 3 or 4 comma separated components, got {0}")]
    ColourArity(usize),

    #[error("colour component `{0}` is not a number")]
    ColourComponent(String),

    #[error("colour component {0} is outside [0, 1]")]
    ColourRange(f64),

    #[error("unknown lesson `{0}`")]
    UnknownLesson(String),
}
