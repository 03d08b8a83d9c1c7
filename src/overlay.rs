//! Overlays drawn on top of a lesson.
//!
//! An [`Overlay`] gets the same four hooks a GUI layer needs: set up once,
//! update every frame, draw into the lesson's render pass and tear down when
//! the window closes. Every hook reports success with a `bool`. A failed
//! `on_init` disables the overlay for the rest of the run, failures of the
//! other hooks are logged.

use instant::Duration;

use crate::context::Context;

pub trait Overlay {
    fn on_init(&mut self, ctx: &Context) -> bool;

    fn on_update(&mut self, ctx: &Context, dt: Duration) -> bool;

    fn on_draw(&self, ctx: &Context, render_pass: &mut wgpu::RenderPass<'_>) -> bool;

    fn on_destroy(&mut self) -> bool;
}

/// Counts frames and reports the rate once per `interval`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameCounter {
    interval: Duration,
    frames: u32,
    elapsed: Duration,
    total_frames: u64,
}

impl FrameCounter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            frames: 0,
            elapsed: Duration::ZERO,
            total_frames: 0,
        }
    }

    /// Adds one frame of length `dt`. Returns frames per second whenever a
    /// full interval has passed.
    pub fn record(&mut self, dt: Duration) -> Option<f32> {
        self.frames += 1;
        self.total_frames += 1;
        self.elapsed += dt;
        if self.elapsed < self.interval || self.elapsed.is_zero() {
            return None;
        }
        let fps = self.frames as f32 / self.elapsed.as_secs_f32();
        self.frames = 0;
        self.elapsed = Duration::ZERO;
        Some(fps)
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }
}

/// Shows the frame rate in the window title.
#[derive(Debug)]
pub struct FrameStats {
    title: String,
    counter: FrameCounter,
}

impl FrameStats {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            counter: FrameCounter::new(Duration::from_secs(1)),
        }
    }

    pub fn counter(&self) -> &FrameCounter {
        &self.counter
    }
}

impl Overlay for FrameStats {
    fn on_init(&mut self, ctx: &Context) -> bool {
        ctx.window().set_title(&self.title);
        true
    }

    fn on_update(&mut self, ctx: &Context, dt: Duration) -> bool {
        if let Some(fps) = self.counter.record(dt) {
            log::debug!("{:.1} fps", fps);
            ctx.window()
                .set_title(&format!("{} - {:.0} fps", self.title, fps));
        }
        true
    }

    // Nothing is drawn, the rate lives in the title bar.
    fn on_draw(&self, _: &Context, _: &mut wgpu::RenderPass<'_>) -> bool {
        true
    }

    fn on_destroy(&mut self) -> bool {
        log::info!("Rendered {} frames", self.counter.total_frames());
        true
    }
}
