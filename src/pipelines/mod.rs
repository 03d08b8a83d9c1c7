//! Render pipeline definitions.
//!
//! - `quad` is the single pipeline every lesson draws with, in fill or
//!   wireframe polygon mode

pub mod quad;
