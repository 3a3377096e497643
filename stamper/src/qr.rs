//! QR codes for the WIF and the public address, rendered as SVG.

use qrcode::render::svg;
use qrcode::QrCode;
use std::path::Path;

use crate::StampError;

/// Smallest rendered side, in SVG user units.
const MIN_DIMENSION: u32 = 200;

/// Render `data` as a standalone SVG QR code.
pub fn render_svg(data: &str) -> Result<String, StampError> {
    let code = QrCode::new(data.as_bytes()).map_err(|e| StampError::Qr(e.to_string()))?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}

/// Render `data` and write it to `path`.
pub fn write_svg(data: &str, path: &Path) -> Result<(), StampError> {
    let image = render_svg(data)?;
    std::fs::write(path, image).map_err(|e| StampError::io(path, e))
}
