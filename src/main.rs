use anyhow::Context;
use termicon::icon;

fn main() -> anyhow::Result<()> {
    let size = 1024u32;
    let data = icon::generate_icon(size);
    let img = image::RgbaImage::from_raw(data.width, data.height, data.rgba)
        .context("invalid RGBA buffer")?;
    img.save("app-icon.png")
        .context("failed to save app-icon.png")?;
    println!("Icon generated successfully: app-icon.png");
    Ok(())
}
