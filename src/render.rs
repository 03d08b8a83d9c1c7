//! Per-lesson GPU state and the frame that draws it.
//!
//! [`QuadRenderer`] uploads the literal quad once and keeps one uniform
//! buffer and bind group per drawn quad. Each frame it rewrites the model
//! matrices, clears to the context's clear colour and issues one indexed draw
//! per quad.

use std::iter;

use instant::Duration;
use wgpu::util::DeviceExt;

use crate::{
    context::Context,
    data_structures::{
        quad::{QUAD_INDICES, QUAD_VERTICES},
        texture::Texture,
    },
    lesson::Lesson,
    overlay::Overlay,
    pipelines::quad::{QuadUniform, mk_quad_bind_group, mk_quad_pipeline, quad_bind_group_layout},
};

struct QuadBinding {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub struct QuadRenderer {
    lesson: Lesson,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    num_indices: u32,
    quads: Vec<QuadBinding>,
    fill_pipeline: wgpu::RenderPipeline,
    wireframe_pipeline: Option<wgpu::RenderPipeline>,
}

impl QuadRenderer {
    pub fn new(ctx: &Context, lesson: Lesson, textures: &[Texture; 2]) -> Self {
        let device = &ctx.device;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Vertex Buffer"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Index Buffer"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        let layout = quad_bind_group_layout(device);
        let quads = lesson
            .model_matrices(Duration::ZERO)
            .into_iter()
            .map(|model| {
                let uniform = QuadUniform::new(model, lesson.mix_factor(), lesson.shader_flags());
                let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Quad Uniform Buffer"),
                    contents: bytemuck::cast_slice(&[uniform]),
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                });
                let bind_group = mk_quad_bind_group(device, &layout, textures, &buffer);
                QuadBinding { buffer, bind_group }
            })
            .collect();

        let camera_layout = &ctx.camera.bind_group_layout;
        let format = ctx.config.format;
        let fill_pipeline =
            mk_quad_pipeline(device, format, wgpu::PolygonMode::Fill, &layout, camera_layout);
        let wireframe_pipeline = ctx.wireframe_supported.then(|| {
            mk_quad_pipeline(device, format, wgpu::PolygonMode::Line, &layout, camera_layout)
        });

        Self {
            lesson,
            vertex_buffer,
            index_buffer,
            num_indices: QUAD_INDICES.len() as u32,
            quads,
            fill_pipeline,
            wireframe_pipeline,
        }
    }

    /// Writes this frame's model matrices. `elapsed` is the time since start.
    pub fn update(&self, ctx: &Context, elapsed: Duration) {
        let mix_factor = self.lesson.mix_factor();
        let flags = self.lesson.shader_flags();
        for (quad, model) in self.quads.iter().zip(self.lesson.model_matrices(elapsed)) {
            let uniform = QuadUniform::new(model, mix_factor, flags);
            ctx.queue
                .write_buffer(&quad.buffer, 0, bytemuck::cast_slice(&[uniform]));
        }
    }

    pub fn render(
        &self,
        ctx: &Context,
        overlays: &[Box<dyn Overlay>],
    ) -> Result<(), wgpu::SurfaceError> {
        let output = ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(ctx.clear_colour),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &ctx.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if self.lesson.draws_geometry() {
                let pipeline = match (&self.wireframe_pipeline, ctx.wireframe) {
                    (Some(wireframe), true) => wireframe,
                    _ => &self.fill_pipeline,
                };
                render_pass.set_pipeline(pipeline);
                render_pass.set_bind_group(1, &ctx.camera.bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                for quad in &self.quads {
                    render_pass.set_bind_group(0, &quad.bind_group, &[]);
                    render_pass.draw_indexed(0..self.num_indices, 0, 0..1);
                }
            }

            for overlay in overlays {
                if !overlay.on_draw(ctx, &mut render_pass) {
                    log::warn!("Overlay failed to draw");
                }
            }
        }

        ctx.queue.submit(iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}
