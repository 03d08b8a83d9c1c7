use std::sync::Arc;

use winit::window::Window;

use crate::{
    camera::{CameraController, CameraResources, Projection},
    data_structures::texture,
    error::AppError,
    settings::Settings,
};

/// GPU and window state shared by everything that draws.
#[derive(Debug)]
pub struct Context {
    pub(crate) window: Arc<Window>,
    pub(crate) depth_texture: texture::Texture,
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub clear_colour: wgpu::Color,
    pub camera: CameraResources,
    /// Whether the adapter can rasterize triangle edges only.
    pub wireframe_supported: bool,
    pub wireframe: bool,
}

impl Context {
    pub async fn new(window: Arc<Window>, settings: &Settings) -> Result<Self, AppError> {
        let size = window.inner_size();

        // The instance is a handle to our GPU
        // BackendBit::PRIMARY => Vulkan + Metal + DX12 + Browser WebGPU
        log::info!("WGPU setup");
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        log::info!("Using adapter {:?}", adapter.get_info().name);

        let wireframe_supported = adapter
            .features()
            .contains(wgpu::Features::POLYGON_MODE_LINE);
        let required_features = if wireframe_supported {
            wgpu::Features::POLYGON_MODE_LINE
        } else {
            log::warn!("Adapter cannot draw wireframes, keys 1/2 will be ignored");
            wgpu::Features::empty()
        };

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features,
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
                experimental_features: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        // Shader code assumes an Srgb surface texture. Using a different
        // one will result in all the colours coming out darker.
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or(AppError::SurfaceUnsupported)?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .ok_or(AppError::SurfaceUnsupported)?;
        let present_mode = if settings.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let projection =
            Projection::new(config.width, config.height, cgmath::Deg(45.0), 0.1, 100.0);
        let controller = CameraController::new(settings.camera_speed);
        let camera = CameraResources::new(
            &device,
            projection,
            controller,
            settings.lesson.uses_camera(),
        );

        let depth_texture = texture::Texture::create_depth_texture(
            &device,
            [config.width, config.height],
            "depth_texture",
        );

        Ok(Self {
            window,
            depth_texture,
            surface,
            device,
            queue,
            config,
            clear_colour: settings.clear_colour(),
            camera,
            wireframe_supported,
            wireframe: false,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Framebuffer-size callback: adapts the surface, depth buffer and projection.
    ///
    /// Zero sizes (minimised windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_texture = texture::Texture::create_depth_texture(
            &self.device,
            [width, height],
            "depth_texture",
        );
        self.camera.projection.resize(width, height);
        log::debug!("Resized surface to {}x{}", width, height);
    }

    /// Toggles wireframe drawing if the adapter supports it.
    pub fn set_wireframe(&mut self, wireframe: bool) {
        if !self.wireframe_supported {
            log::warn!("Wireframe mode is not supported by this adapter");
            return;
        }
        self.wireframe = wireframe;
    }
}
