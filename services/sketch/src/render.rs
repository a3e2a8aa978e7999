//! Raster output of contour layers.

use thiserror::Error;
use tiny_skia::{Color, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::config::Rgba;
use crate::pipeline::Layer;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cannot create a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

/// Stroke settings shared by every layer.
#[derive(Debug, Clone)]
pub struct StrokeStyle {
    pub line_width: f32,
    /// Colours cycled over band indices.
    pub palette: Vec<Rgba>,
    pub background: Rgba,
}

impl StrokeStyle {
    fn color_for(&self, band_index: usize) -> Rgba {
        if self.palette.is_empty() {
            return [0, 0, 0, 255];
        }
        self.palette[band_index % self.palette.len()]
    }
}

/// Stroke every polyline of every layer onto a fresh canvas.
pub fn render_layers(
    layers: &[Layer],
    width: u32,
    height: u32,
    style: &StrokeStyle,
) -> Result<Pixmap, RenderError> {
    let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::Canvas { width, height })?;

    let [r, g, b, a] = style.background;
    pixmap.fill(Color::from_rgba8(r, g, b, a));

    let mut stroke = Stroke::default();
    stroke.width = style.line_width;
    stroke.line_cap = LineCap::Round;
    stroke.line_join = LineJoin::Round;

    for layer in layers {
        let [r, g, b, a] = style.color_for(layer.band_index);
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;

        for polyline in &layer.polylines {
            let Some((first, rest)) = polyline.points.split_first() else {
                continue;
            };
            if rest.is_empty() {
                continue;
            }

            let mut pb = PathBuilder::new();
            pb.move_to(first.x as f32, first.y as f32);
            for point in rest {
                pb.line_to(point.x as f32, point.y as f32);
            }
            if polyline.closed {
                pb.close();
            }

            if let Some(path) = pb.finish() {
                pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            }
        }
    }

    Ok(pixmap)
}

/// Encode a canvas as PNG bytes.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, RenderError> {
    pixmap
        .encode_png()
        .map_err(|e| RenderError::Encode(e.to_string()))
}
