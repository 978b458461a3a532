// Terminal-window app icon: rounded panel, header bar with control dots, ">" prompt

/// Raw RGBA sprite produced by the renderer.
pub struct IconData {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

// Geometry is expressed against a 1024x1024 canvas; other sizes scale linearly.
const BASE_SIZE: u32 = 1024;

const PANEL_MARGIN: f32 = 100.0;
const CORNER_RADIUS: f32 = 80.0;
const PANEL_COLOR: [u8; 4] = [30, 30, 50, 255];

const HEADER_HEIGHT: f32 = 120.0;
const HEADER_COLOR: [u8; 4] = [20, 20, 35, 255];

const DOT_RADIUS: f32 = 25.0;
const DOT_OFFSET_X: f32 = 80.0;
const DOT_SPACING: f32 = 70.0;
// Red, Yellow, Green window controls, left to right
const DOT_COLORS: [[u8; 4]; 3] = [
    [255, 95, 86, 255],
    [255, 189, 68, 255],
    [40, 201, 64, 255],
];

const PROMPT_SIZE: f32 = 400.0;
const PROMPT_NOTCH: f32 = 80.0;
const PROMPT_DROP: f32 = 50.0;
const PROMPT_COLOR: [u8; 4] = [100, 200, 255, 255];

pub fn generate_icon(size: u32) -> IconData {
    let (w, h) = (size, size);
    let mut rgba = vec![0u8; (w * h * 4) as usize];
    let k = size as f32 / BASE_SIZE as f32;

    let margin = PANEL_MARGIN * k;
    let far = size as f32 - margin;
    let radius = CORNER_RADIUS * k;

    // Terminal window body
    fill_rounded_rect(&mut rgba, size, margin, margin, far, far, radius, PANEL_COLOR);

    // Header bar over the top of the panel
    let header_bottom = margin + HEADER_HEIGHT * k;
    fill_rounded_rect(
        &mut rgba,
        size,
        margin,
        margin,
        far,
        header_bottom,
        radius,
        HEADER_COLOR,
    );

    // Window control dots, left-aligned in the header
    let dot_y = margin + HEADER_HEIGHT * k * 0.5;
    for (i, color) in DOT_COLORS.iter().enumerate() {
        let dot_x = margin + DOT_OFFSET_X * k + i as f32 * DOT_SPACING * k;
        fill_circle(&mut rgba, size, dot_x, dot_y, DOT_RADIUS * k, *color);
    }

    // ">" prompt: a concave quad, rasterized as two triangles fanned from the tip
    let half = PROMPT_SIZE * k * 0.5;
    let px = size as f32 * 0.5 - PROMPT_SIZE * k * 0.25;
    let py = size as f32 * 0.5 + PROMPT_DROP * k;
    let top = (px, py - half);
    let tip = (px + half, py);
    let bottom = (px, py + half);
    let notch = (px + PROMPT_NOTCH * k, py);
    fill_triangle(&mut rgba, size, top, tip, notch, PROMPT_COLOR);
    fill_triangle(&mut rgba, size, tip, bottom, notch, PROMPT_COLOR);

    IconData { rgba, width: w, height: h }
}

/// Fill a rounded rectangle with corners (x0,y0)-(x1,y1). Pixel membership is
/// tested at the pixel center, so fills are hard-edged.
fn fill_rounded_rect(
    rgba: &mut [u8],
    size: u32,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    radius: f32,
    color: [u8; 4],
) {
    // The corner radius can never exceed half the short side
    let r = radius.min((x1 - x0) * 0.5).min((y1 - y0) * 0.5);
    let (xa, xb) = pixel_range(size, x0, x1);
    let (ya, yb) = pixel_range(size, y0, y1);
    for y in ya..=yb {
        for x in xa..=xb {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            if px < x0 || px > x1 || py < y0 || py > y1 {
                continue;
            }
            // Distance from the inner rectangle that carries the corner arcs
            let dx = px - px.clamp(x0 + r, x1 - r);
            let dy = py - py.clamp(y0 + r, y1 - r);
            if dx * dx + dy * dy <= r * r {
                put_px(rgba, size, x, y, color);
            }
        }
    }
}

fn fill_circle(rgba: &mut [u8], size: u32, cx: f32, cy: f32, radius: f32, color: [u8; 4]) {
    let (xa, xb) = pixel_range(size, cx - radius, cx + radius);
    let (ya, yb) = pixel_range(size, cy - radius, cy + radius);
    for y in ya..=yb {
        for x in xa..=xb {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= radius * radius {
                put_px(rgba, size, x, y, color);
            }
        }
    }
}

fn fill_triangle(
    rgba: &mut [u8],
    size: u32,
    a: (f32, f32),
    b: (f32, f32),
    c: (f32, f32),
    color: [u8; 4],
) {
    let (xa, xb) = pixel_range(size, a.0.min(b.0).min(c.0), a.0.max(b.0).max(c.0));
    let (ya, yb) = pixel_range(size, a.1.min(b.1).min(c.1), a.1.max(b.1).max(c.1));
    for y in ya..=yb {
        for x in xa..=xb {
            if point_in_triangle(x as f32 + 0.5, y as f32 + 0.5, a, b, c) {
                put_px(rgba, size, x, y, color);
            }
        }
    }
}

/// Clamp a float span to the pixel rows/columns it can touch.
fn pixel_range(size: u32, lo: f32, hi: f32) -> (u32, u32) {
    let lo = lo.floor().max(0.0) as u32;
    let hi = (hi.ceil().max(0.0) as u32).min(size.saturating_sub(1));
    (lo, hi)
}

#[inline]
fn put_px(rgba: &mut [u8], size: u32, x: u32, y: u32, color: [u8; 4]) {
    let i = ((y * size + x) * 4) as usize;
    rgba[i..i + 4].copy_from_slice(&color);
}

#[inline]
fn cross(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    ax * by - ay * bx
}

fn point_in_triangle(px: f32, py: f32, a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> bool {
    let c1 = cross(b.0 - a.0, b.1 - a.1, px - a.0, py - a.1);
    let c2 = cross(c.0 - b.0, c.1 - b.1, px - b.0, py - b.1);
    let c3 = cross(a.0 - c.0, a.1 - c.1, px - c.0, py - c.1);
    let has_neg = (c1 < 0.0) || (c2 < 0.0) || (c3 < 0.0);
    let has_pos = (c1 > 0.0) || (c2 > 0.0) || (c3 > 0.0);
    !(has_neg && has_pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(icon: &IconData, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * icon.width + x) * 4) as usize;
        [
            icon.rgba[i],
            icon.rgba[i + 1],
            icon.rgba[i + 2],
            icon.rgba[i + 3],
        ]
    }

    #[test]
    fn corners_stay_transparent() {
        let icon = generate_icon(BASE_SIZE);
        for (x, y) in [(0, 0), (1023, 0), (0, 1023), (1023, 1023)] {
            assert_eq!(px(&icon, x, y), [0, 0, 0, 0], "corner ({x},{y})");
        }
    }

    #[test]
    fn panel_and_header_fills() {
        let icon = generate_icon(BASE_SIZE);
        // Solid panel body below the prompt
        assert_eq!(px(&icon, 512, 860), PANEL_COLOR);
        // Header bar right of the dots
        assert_eq!(px(&icon, 700, 160), HEADER_COLOR);
        // Above the panel is still transparent
        assert_eq!(px(&icon, 512, 50)[3], 0);
    }

    #[test]
    fn control_dots_in_order() {
        let icon = generate_icon(BASE_SIZE);
        assert_eq!(px(&icon, 180, 160), DOT_COLORS[0]);
        assert_eq!(px(&icon, 250, 160), DOT_COLORS[1]);
        assert_eq!(px(&icon, 320, 160), DOT_COLORS[2]);
    }

    #[test]
    fn header_row_shows_exactly_the_three_dot_colors() {
        let icon = generate_icon(BASE_SIZE);
        let mut seen: Vec<[u8; 4]> = Vec::new();
        for x in 150..=350 {
            let c = px(&icon, x, 160);
            if c != HEADER_COLOR && seen.last() != Some(&c) {
                seen.push(c);
            }
        }
        assert_eq!(seen, DOT_COLORS.to_vec());
    }

    #[test]
    fn prompt_fills_the_center() {
        let icon = generate_icon(BASE_SIZE);
        assert_eq!(px(&icon, 512, 512), PROMPT_COLOR);
        assert_eq!(px(&icon, 512, 562), PROMPT_COLOR);
        // The notch cuts back to the panel between the chevron arms
        assert_eq!(px(&icon, 430, 562), PANEL_COLOR);
    }

    #[test]
    fn deterministic_output() {
        let a = generate_icon(BASE_SIZE);
        let b = generate_icon(BASE_SIZE);
        assert_eq!(a.rgba, b.rgba);
    }

    #[test]
    fn scales_linearly() {
        let icon = generate_icon(512);
        assert_eq!((icon.width, icon.height), (512, 512));
        assert_eq!(icon.rgba.len(), 512 * 512 * 4);
        assert_eq!(px(&icon, 0, 0)[3], 0);
        assert_eq!(px(&icon, 256, 256), PROMPT_COLOR);
    }
}
