//! Runtime configuration.
//!
//! [`Settings`] carries the window hints and per-run knobs. The binary fills
//! it from [`Cli`], which reads flags or `QUAD_LESSONS_*` environment
//! variables and overlays whatever was given on [`Settings::default`].

use std::path::PathBuf;

use clap::Parser;

use crate::{error::SettingsError, lesson::Lesson};

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub lesson: Lesson,
    /// Overrides the lesson's own clear colour when set.
    pub clear_colour: Option<wgpu::Color>,
    /// Camera movement in world units per second.
    pub camera_speed: f32,
    pub assets: PathBuf,
    pub vsync: bool,
    /// Leave the event loop after this many presented frames.
    pub exit_after_frames: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "LearnOpenGL".to_string(),
            lesson: Lesson::default(),
            clear_colour: None,
            camera_speed: 2.5,
            assets: PathBuf::from("assets"),
            vsync: true,
            exit_after_frames: None,
        }
    }
}

impl Settings {
    pub fn from_cli(cli: Cli) -> Result<Self, SettingsError> {
        let defaults = Self::default();
        let clear_colour = cli.clear_colour.as_deref().map(parse_colour).transpose()?;
        let settings = Self {
            width: cli.width.unwrap_or(defaults.width),
            height: cli.height.unwrap_or(defaults.height),
            title: cli.title.unwrap_or(defaults.title),
            lesson: cli.lesson.unwrap_or(defaults.lesson),
            clear_colour,
            camera_speed: cli.camera_speed.unwrap_or(defaults.camera_speed),
            assets: cli.assets.unwrap_or(defaults.assets),
            vsync: !cli.no_vsync,
            exit_after_frames: cli.exit_after_frames,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.width == 0 || self.height == 0 {
            return Err(SettingsError::ZeroSize {
                width: self.width,
                height: self.height,
            });
        }
        if !self.camera_speed.is_finite() || self.camera_speed < 0.0 {
            return Err(SettingsError::CameraSpeed(self.camera_speed));
        }
        Ok(())
    }

    pub fn clear_colour(&self) -> wgpu::Color {
        self.clear_colour
            .unwrap_or_else(|| self.lesson.clear_colour())
    }
}

/// Command line arguments
#[derive(Parser, Debug, Default)]
#[command(name = "quad-lessons")]
#[command(about = "Opens a window and runs one of the textured quad lessons")]
pub struct Cli {
    /// Lesson to run (clear-screen, coloured-quad, textured-quad, texture-blend, transform, camera)
    #[arg(short, long, env = "QUAD_LESSONS_LESSON")]
    pub lesson: Option<Lesson>,

    /// Window width in pixels
    #[arg(long, env = "QUAD_LESSONS_WIDTH")]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long, env = "QUAD_LESSONS_HEIGHT")]
    pub height: Option<u32>,

    /// Window title
    #[arg(long, env = "QUAD_LESSONS_TITLE")]
    pub title: Option<String>,

    /// Clear colour as `r,g,b` or `r,g,b,a` with components in [0, 1]
    #[arg(long, env = "QUAD_LESSONS_CLEAR_COLOUR")]
    pub clear_colour: Option<String>,

    /// Camera speed in units per second
    #[arg(long, env = "QUAD_LESSONS_CAMERA_SPEED")]
    pub camera_speed: Option<f32>,

    /// Directory holding the texture assets
    #[arg(long, env = "QUAD_LESSONS_ASSETS")]
    pub assets: Option<PathBuf>,

    /// Present without waiting for vertical sync
    #[arg(
        long,
        env = "QUAD_LESSONS_NO_VSYNC",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub no_vsync: bool,

    /// Exit after rendering this many frames
    #[arg(long, env = "QUAD_LESSONS_EXIT_AFTER_FRAMES")]
    pub exit_after_frames: Option<u64>,
}

/// Parse `r,g,b` or `r,g,b,a` into a colour. Alpha defaults to 1.
pub fn parse_colour(input: &str) -> Result<wgpu::Color, SettingsError> {
    let components = input
        .split(',')
        .map(|part| {
            let part = part.trim();
            let value: f64 = part
                .parse()
                .map_err(|_| SettingsError::ColourComponent(part.to_string()))?;
            if !(0.0..=1.0).contains(&value) {
                return Err(SettingsError::ColourRange(value));
            }
            Ok(value)
        })
        .collect::<Result<Vec<_>, _>>()?;

    match components.as_slice() {
        [r, g, b] => Ok(wgpu::Color {
            r: *r,
            g: *g,
            b: *b,
            a: 1.0,
        }),
        [r, g, b, a] => Ok(wgpu::Color {
            r: *r,
            g: *g,
            b: *b,
            a: *a,
        }),
        other => Err(SettingsError::ColourArity(other.len())),
    }
}
