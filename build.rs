use anyhow::*;
use fs_extra::copy_items;
use fs_extra::dir::CopyOptions;
use std::env;
use std::path::PathBuf;

// Bundles the lesson textures next to the build output so the binary still
// finds them when started outside the crate directory.
fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=assets/");

    let out_dir = env::var("OUT_DIR")?;
    let mut copy_options = CopyOptions::new();
    copy_options.overwrite = true;
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let assets_src = manifest_dir.join("assets");
    if assets_src.exists() {
        copy_items(&[assets_src], out_dir, &copy_options)?;
    } else {
        println!("cargo:warning=No assets directory, lessons will use fallback textures");
    }

    Ok(())
}
