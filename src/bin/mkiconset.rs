use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use termicon::icon;

fn main() -> Result<()> {
    // 1) Render the base sprite once (1024x1024)
    let base_sz = 1024u32;
    let data = icon::generate_icon(base_sz);
    let img = image::RgbaImage::from_raw(data.width, data.height, data.rgba)
        .context("invalid RGBA buffer")?;

    let out_dir = Path::new("assets/termicon.iconset");
    fs::create_dir_all(out_dir)
        .with_context(|| format!("create {}", out_dir.display()))?;

    // 2) Target sizes (px)
    let targets = [
        (16u32, "icon_16x16.png"),
        (32, "icon_16x16@2x.png"),
        (32, "icon_32x32.png"),
        (64, "icon_32x32@2x.png"),
        (128, "icon_128x128.png"),
        (256, "icon_128x128@2x.png"),
        (256, "icon_256x256.png"),
        (512, "icon_256x256@2x.png"),
        (512, "icon_512x512.png"),
        (1024, "icon_512x512@2x.png"),
    ];

    for (sz, name) in targets {
        let resized = if sz == base_sz {
            img.clone()
        } else {
            image::imageops::resize(&img, sz, sz, image::imageops::FilterType::Lanczos3)
        };
        let path = out_dir.join(name);
        resized
            .save(&path)
            .with_context(|| format!("failed to save {}", path.display()))?;
    }
    println!("Iconset written to {}", out_dir.display());

    // 3) Multi-size ICO for the Windows bundle
    let mut dir = IconDir::new(ResourceType::Icon);
    for sz in [16u32, 32, 48, 64, 128, 256] {
        let resized = image::imageops::resize(&img, sz, sz, image::imageops::FilterType::Lanczos3);
        let entry = IconDirEntry::encode(&IconImage::from_rgba_data(sz, sz, resized.into_raw()))
            .context("encode ico entry")?;
        dir.add_entry(entry);
    }
    let ico_path = Path::new("assets").join("icon.ico");
    let file = BufWriter::new(
        File::create(&ico_path).with_context(|| format!("create {}", ico_path.display()))?,
    );
    dir.write(file)
        .with_context(|| format!("write {}", ico_path.display()))?;
    println!("Wrote {}", ico_path.display());

    Ok(())
}
