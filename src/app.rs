//! Application event loop.
//!
//! [`run`] opens the window described by [`Settings`] and drives one lesson:
//!
//! 1. `resumed` creates the window, the GPU [`Context`], the lesson's
//!    textures and its [`QuadRenderer`]
//! 2. keyboard events go through [`process_input`] and the camera controller
//! 3. `Resized` reconfigures the surface
//! 4. `RedrawRequested` advances time, moves the camera, renders and asks
//!    for the next frame
//! 5. `CloseRequested`, Escape or the frame limit leave the loop
//!
//! Failures during initialization stop the loop and are returned from `run`.

use std::sync::Arc;

use instant::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    context::Context,
    error::AppError,
    input::{Action, process_input},
    overlay::{FrameStats, Overlay},
    render::QuadRenderer,
    resources::load_lesson_textures,
    settings::Settings,
};

/// Everything that exists once the window is up.
struct AppState {
    ctx: Context,
    renderer: QuadRenderer,
}

impl AppState {
    async fn new(window: Arc<Window>, settings: &Settings) -> Result<Self, AppError> {
        let ctx = Context::new(window, settings).await?;
        let textures = load_lesson_textures(
            &settings.assets,
            settings.lesson.textures(),
            &ctx.device,
            &ctx.queue,
        )
        .await;
        let renderer = QuadRenderer::new(&ctx, settings.lesson, &textures);
        Ok(Self { ctx, renderer })
    }
}

pub struct App {
    async_runtime: tokio::runtime::Runtime,
    settings: Settings,
    state: Option<AppState>,
    overlays: Vec<Box<dyn Overlay>>,
    error: Option<AppError>,
    start_time: Instant,
    last_time: Instant,
    frames: u64,
}

impl App {
    pub fn new(settings: Settings) -> Result<Self, AppError> {
        let async_runtime = tokio::runtime::Runtime::new()?;
        let overlays: Vec<Box<dyn Overlay>> = vec![Box::new(FrameStats::new(settings.title.clone()))];
        Ok(Self {
            async_runtime,
            settings,
            state: None,
            overlays,
            error: None,
            start_time: Instant::now(),
            last_time: Instant::now(),
            frames: 0,
        })
    }

    /// Records an initialization failure and leaves the loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: &KeyEvent) {
        let PhysicalKey::Code(key) = event.physical_key else {
            return;
        };
        let Some(state) = &mut self.state else {
            return;
        };
        match process_input(key, event.state) {
            Some(Action::Exit) => event_loop.exit(),
            Some(Action::Wireframe(on)) => state.ctx.set_wireframe(on),
            None => {
                if state.ctx.camera.enabled {
                    state.ctx.camera.controller.process_keyboard(key, event.state);
                }
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(state) = &mut self.state else {
            return;
        };
        let now = Instant::now();
        let dt = now - self.last_time;
        self.last_time = now;

        state.ctx.camera.update(&state.ctx.queue, dt);
        state.renderer.update(&state.ctx, now - self.start_time);
        self.overlays.iter_mut().for_each(|overlay| {
            if !overlay.on_update(&state.ctx, dt) {
                log::warn!("Overlay failed to update");
            }
        });

        match state.renderer.render(&state.ctx, &self.overlays) {
            Ok(()) => self.frames += 1,
            // Reconfigure the surface if it's lost or outdated
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = state.ctx.window.inner_size();
                state.ctx.resize(size.width, size.height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory while rendering, exiting");
                event_loop.exit();
                return;
            }
            Err(e) => log::error!("Unable to render {}", e),
        }

        if let Some(limit) = self.settings.exit_after_frames {
            if self.frames >= limit {
                log::info!("Rendered {} frames, exiting", self.frames);
                event_loop.exit();
                return;
            }
        }
        state.ctx.window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let window_attributes = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(PhysicalSize::new(self.settings.width, self.settings.height));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };

        log::info!("Starting lesson {}", self.settings.lesson);
        let init = AppState::new(window, &self.settings);
        let state = match self.async_runtime.block_on(init) {
            Ok(state) => state,
            Err(e) => return self.fail(event_loop, e),
        };

        let ctx = &state.ctx;
        self.overlays.retain_mut(|overlay| {
            let ok = overlay.on_init(ctx);
            if !ok {
                log::warn!("Overlay failed to initialize and is disabled");
            }
            ok
        });

        self.start_time = Instant::now();
        self.last_time = self.start_time;
        state.ctx.window.request_redraw();
        self.state = Some(state);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(state) = &mut self.state {
                    state.ctx.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(false) => {
                if let Some(state) = &mut self.state {
                    state.ctx.camera.controller.reset();
                }
            }
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event_loop, &event),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn exiting(&mut self, _: &ActiveEventLoop) {
        self.overlays.iter_mut().for_each(|overlay| {
            if !overlay.on_destroy() {
                log::warn!("Overlay failed to shut down cleanly");
            }
        });
        // GPU resources go before the window they render into
        self.state = None;
    }
}

/// Runs the configured lesson until the window closes.
pub fn run(settings: Settings) -> Result<(), AppError> {
    settings.validate()?;

    if let Err(e) = env_logger::try_init() {
        log::debug!("Logger already initialized: {}", e);
    }

    #[cfg(all(feature = "integration-tests", target_os = "linux"))]
    let event_loop: EventLoop<()> = {
        use winit::platform::wayland::EventLoopBuilderExtWayland;

        EventLoop::builder().with_any_thread(true).build()?
    };

    #[cfg(all(feature = "integration-tests", target_os = "windows"))]
    let event_loop: EventLoop<()> = {
        use winit::platform::windows::EventLoopBuilderExtWindows;

        EventLoop::builder().with_any_thread(true).build()?
    };

    #[cfg(not(all(
        feature = "integration-tests",
        any(target_os = "linux", target_os = "windows")
    )))]
    let event_loop: EventLoop<()> = EventLoop::new()?;

    let mut app = App::new(settings)?;
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
