#![cfg(feature = "integration-tests")]

use std::path::Path;

use image::{DynamicImage, RgbaImage};
use quad_lessons::{
    data_structures::texture::Texture,
    lesson::{CONTAINER_TEXTURE, FACE_TEXTURE},
    resources::{load_lesson_textures, load_texture_or_fallback},
};

async fn headless_device() -> (wgpu::Device, wgpu::Queue) {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions::default())
        .await
        .expect("an adapter is available");
    adapter
        .request_device(&wgpu::DeviceDescriptor::default())
        .await
        .expect("a device is available")
}

fn dimensions(texture: &Texture) -> (u32, u32) {
    let size = texture.texture.size();
    (size.width, size.height)
}

#[tokio::test]
async fn missing_textures_become_white_pixels() {
    let (device, queue) = headless_device().await;

    let texture =
        load_texture_or_fallback(Path::new("no-such-assets-dir"), "missing.png", &device, &queue)
            .await;
    assert_eq!(dimensions(&texture), (1, 1));

    let [first, second] =
        load_lesson_textures(Path::new("no-such-assets-dir"), &["missing.png"], &device, &queue)
            .await;
    assert_eq!(dimensions(&first), (1, 1));
    assert_eq!(dimensions(&second), (1, 1), "unused slot gets the fallback");
}

#[tokio::test]
async fn shipped_textures_keep_their_size() {
    let (device, queue) = headless_device().await;

    let [container, face] = load_lesson_textures(
        Path::new("assets"),
        &[CONTAINER_TEXTURE, FACE_TEXTURE],
        &device,
        &queue,
    )
    .await;
    assert_eq!(dimensions(&container), (64, 64));
    assert_eq!(dimensions(&face), (64, 64));

    let image = DynamicImage::ImageRgba8(RgbaImage::new(3, 2));
    let uploaded = Texture::from_image(&device, &queue, &image, Some("uploaded"));
    assert_eq!(dimensions(&uploaded), (3, 2));
}
