//! Lesson data: literal quad geometry and GPU textures.
//!
//! - `quad` holds the vertex/index arrays and the quad placements
//! - `texture` wraps wgpu textures and their creation

pub mod quad;
pub mod texture;
