// SVG sanitizing and PNG rasterization.

use lazy_static::lazy_static;
use regex::Regex;
use resvg::{tiny_skia, usvg};

use crate::error::ServiceError;

/// Output width in pixels, height follows the source aspect ratio.
pub const PNG_WIDTH: u32 = 440;

lazy_static! {
    // The contracts emit a <def> filter block the rasterizer cannot
    // handle. Strip the first block and every filter attribute that
    // references it.
    static ref DEF_BLOCK_RE: Regex = Regex::new(r"(?s)<def>.*?</def>").unwrap();
    static ref FILTER_ATTR_RE: Regex =
        Regex::new(r#"\s*filter=['"]url\(#[^'"]*\)['"]"#).unwrap();
}

pub fn sanitize_svg(svg: &str) -> String {
    let stripped = DEF_BLOCK_RE.replacen(svg, 1, "");
    FILTER_ATTR_RE.replace_all(&stripped, "").into_owned()
}

/// Rasterizes `svg` to a PNG scaled to [`PNG_WIDTH`].
pub fn render_png(svg: &str) -> Result<Vec<u8>, ServiceError> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
        .map_err(|e| ServiceError::Render(format!("SVG parse failed: {}", e)))?;

    let size = tree.size();
    let scale = PNG_WIDTH as f32 / size.width();
    let height = (size.height() * scale).round().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(PNG_WIDTH, height)
        .ok_or_else(|| ServiceError::Render("Invalid raster dimensions".to_string()))?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    pixmap
        .encode_png()
        .map_err(|e| ServiceError::Render(format!("PNG encode failed: {}", e)))
}
