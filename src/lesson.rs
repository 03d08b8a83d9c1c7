//! The tutorial lessons.
//!
//! Each lesson is one variation of the same window + quad program. A
//! [`Lesson`] answers the handful of questions the render loop needs: what to
//! clear to, whether anything is drawn, which textures are sampled and where
//! each quad sits this frame.

use std::{fmt, str::FromStr};

use cgmath::{Matrix4, Rad, SquareMatrix, Vector3};
use instant::Duration;

use crate::{data_structures::quad, error::SettingsError};

/// File name of the primary texture.
pub const CONTAINER_TEXTURE: &str = "container.png";
/// File name of the texture blended over the primary one.
pub const FACE_TEXTURE: &str = "awesomeface.png";

/// Blend weight of the second texture in the mixing lessons.
pub const MIX_FACTOR: f32 = 0.2;

/// Multiply the sampled colour with the interpolated vertex colour.
pub const FLAG_VERTEX_COLOUR: u32 = 1;
/// Sample the primary texture.
pub const FLAG_TEXTURE: u32 = 1 << 1;
/// Blend the second texture in at [`Lesson::mix_factor`].
pub const FLAG_BLEND: u32 = 1 << 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Lesson {
    ClearScreen,
    ColouredQuad,
    TexturedQuad,
    TextureBlend,
    Transform,
    #[default]
    Camera,
}

impl Lesson {
    pub fn all() -> [Lesson; 6] {
        [
            Lesson::ClearScreen,
            Lesson::ColouredQuad,
            Lesson::TexturedQuad,
            Lesson::TextureBlend,
            Lesson::Transform,
            Lesson::Camera,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Lesson::ClearScreen => "clear-screen",
            Lesson::ColouredQuad => "coloured-quad",
            Lesson::TexturedQuad => "textured-quad",
            Lesson::TextureBlend => "texture-blend",
            Lesson::Transform => "transform",
            Lesson::Camera => "camera",
        }
    }

    pub fn clear_colour(&self) -> wgpu::Color {
        match self {
            Lesson::ClearScreen => wgpu::Color {
                r: 0.5,
                g: 0.5,
                b: 0.3,
                a: 1.0,
            },
            _ => wgpu::Color {
                r: 0.2,
                g: 0.3,
                b: 0.3,
                a: 1.0,
            },
        }
    }

    pub fn draws_geometry(&self) -> bool {
        !matches!(self, Lesson::ClearScreen)
    }

    /// Asset names sampled by this lesson, in binding order.
    pub fn textures(&self) -> &'static [&'static str] {
        match self {
            Lesson::ClearScreen | Lesson::ColouredQuad => &[],
            Lesson::TexturedQuad => &[CONTAINER_TEXTURE],
            Lesson::TextureBlend | Lesson::Transform | Lesson::Camera => {
                &[CONTAINER_TEXTURE, FACE_TEXTURE]
            }
        }
    }

    pub fn mix_factor(&self) -> f32 {
        if self.textures().len() > 1 {
            MIX_FACTOR
        } else {
            0.0
        }
    }

    /// Shader switches, a combination of the `FLAG_*` constants.
    pub fn shader_flags(&self) -> u32 {
        match self {
            Lesson::ClearScreen => 0,
            Lesson::ColouredQuad => FLAG_VERTEX_COLOUR,
            Lesson::TexturedQuad => FLAG_VERTEX_COLOUR | FLAG_TEXTURE,
            Lesson::TextureBlend | Lesson::Transform | Lesson::Camera => {
                FLAG_TEXTURE | FLAG_BLEND
            }
        }
    }

    pub fn uses_camera(&self) -> bool {
        matches!(self, Lesson::Camera)
    }

    /// Number of quads drawn every frame.
    pub fn quad_count(&self) -> usize {
        match self {
            Lesson::ClearScreen => 0,
            Lesson::Camera => quad::QUAD_POSITIONS.len(),
            _ => 1,
        }
    }

    /// Model matrices for every quad drawn after `elapsed` time since start.
    pub fn model_matrices(&self, elapsed: Duration) -> Vec<Matrix4<f32>> {
        match self {
            Lesson::ClearScreen => Vec::new(),
            Lesson::ColouredQuad | Lesson::TexturedQuad | Lesson::TextureBlend => {
                vec![Matrix4::identity()]
            }
            Lesson::Transform => {
                let translation = Matrix4::from_translation(Vector3::new(0.5, -0.5, 0.0));
                let rotation = Matrix4::from_angle_z(Rad(elapsed.as_secs_f32()));
                vec![translation * rotation]
            }
            Lesson::Camera => (0..quad::QUAD_POSITIONS.len())
                .map(quad::placement_matrix)
                .collect(),
        }
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lesson {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Lesson::all()
            .into_iter()
            .find(|lesson| lesson.name() == wanted)
            .ok_or_else(|| SettingsError::UnknownLesson(s.to_string()))
    }
}
