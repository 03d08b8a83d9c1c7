//! Loading of texture assets from the assets directory.

use std::path::Path;

use anyhow::Context;

use crate::data_structures::texture::Texture;

/// Stand-in colour for textures that could not be loaded.
pub const FALLBACK_RGBA: [u8; 4] = [255, 255, 255, 255];

/// Copy of `assets/` made by the build script.
pub const BUNDLED_ASSETS: &str = concat!(env!("OUT_DIR"), "/assets");

/// Reads `file_name` from `assets`, falling back to the bundled copy when the
/// file does not exist there.
pub async fn load_binary(assets: &Path, file_name: &str) -> anyhow::Result<Vec<u8>> {
    let path = assets.join(file_name);
    match tokio::fs::read(&path).await {
        Ok(data) => Ok(data),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let bundled = Path::new(BUNDLED_ASSETS).join(file_name);
            log::debug!("{} not found, trying {}", path.display(), bundled.display());
            tokio::fs::read(&bundled)
                .await
                .with_context(|| format!("{} not found", path.display()))
        }
        Err(e) => Err(e).with_context(|| format!("Unable to read {}", path.display())),
    }
}

pub async fn load_texture(
    assets: &Path,
    file_name: &str,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> anyhow::Result<Texture> {
    let data = load_binary(assets, file_name).await?;
    Texture::from_bytes(device, queue, &data, file_name)
}

/// Loads a texture, logging and substituting a white pixel on failure.
pub async fn load_texture_or_fallback(
    assets: &Path,
    file_name: &str,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> Texture {
    match load_texture(assets, file_name, device, queue).await {
        Ok(texture) => {
            log::info!("Loaded texture {}", file_name);
            texture
        }
        Err(e) => {
            log::warn!("Failed to load texture {}: {:#}", file_name, e);
            Texture::solid_colour(device, queue, FALLBACK_RGBA, file_name)
        }
    }
}

/// Loads the two texture slots a lesson binds. Unused slots get the fallback.
pub async fn load_lesson_textures(
    assets: &Path,
    names: &[&str],
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> [Texture; 2] {
    let slot = |index: usize| {
        let name = names.get(index).copied();
        async move {
            match name {
                Some(name) => load_texture_or_fallback(assets, name, device, queue).await,
                None => Texture::solid_colour(device, queue, FALLBACK_RGBA, "unused texture slot"),
            }
        }
    };
    let (first, second) = futures::join!(slot(0), slot(1));
    [first, second]
}
