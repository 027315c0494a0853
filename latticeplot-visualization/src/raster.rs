//! Rasterisation of a [`Scene`] into an RGB image

use crate::glyphs::{self, GLYPH_SIZE};
use crate::scene::{Label, Marker, Scene, Segment};
use image::{Rgb, RgbImage};
use latticeplot_core::Rgb as Color3;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

/// Stroke width of the bounding box edges in pixels
const EDGE_WIDTH: f32 = 1.0;

/// Paint a scene
pub fn rasterize(scene: &Scene) -> RgbImage {
    let Some(mut canvas) = Canvas::new(scene.width, scene.height, scene.background) else {
        return RgbImage::new(scene.width, scene.height);
    };
    for segment in &scene.segments {
        canvas.draw_segment(segment);
    }
    for marker in &scene.markers {
        canvas.fill_disc(marker);
    }
    for label in &scene.labels {
        canvas.draw_label(label);
    }
    canvas.into_image()
}

fn paint(color: Color3, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(Color::from_rgba8(color[0], color[1], color[2], 255));
    paint.anti_alias = anti_alias;
    paint
}

/// An opaque pixmap that scene primitives are drawn onto
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// `None` when either dimension is zero
    pub fn new(width: u32, height: u32, background: Color3) -> Option<Self> {
        let mut pixmap = Pixmap::new(width, height)?;
        pixmap.fill(Color::from_rgba8(background[0], background[1], background[2], 255));
        Some(Self { pixmap })
    }

    /// Drop the alpha channel; every pixel is opaque
    pub fn into_image(self) -> RgbImage {
        let mut image = RgbImage::new(self.pixmap.width(), self.pixmap.height());
        for (dst, src) in image.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgb([c.red(), c.green(), c.blue()]);
        }
        image
    }

    /// Anti-aliased filled disc
    pub fn fill_disc(&mut self, marker: &Marker) {
        let Some(path) = PathBuilder::from_circle(
            marker.at.x as f32,
            marker.at.y as f32,
            marker.radius as f32,
        ) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint(marker.color, true),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    pub fn draw_segment(&mut self, segment: &Segment) {
        let mut pb = PathBuilder::new();
        pb.move_to(segment.from.x as f32, segment.from.y as f32);
        pb.line_to(segment.to.x as f32, segment.to.y as f32);
        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: EDGE_WIDTH,
                ..Stroke::default()
            };
            self.pixmap.stroke_path(
                &path,
                &paint(segment.color, true),
                &stroke,
                Transform::identity(),
                None,
            );
        }
    }

    /// Bitmap text scaled to the nearest whole multiple of the glyph size
    pub fn draw_label(&mut self, label: &Label) {
        let scale = (label.size / f64::from(GLYPH_SIZE)).round().max(1.0) as f32;
        let width = glyphs::text_width(&label.text) as f32 * scale;
        let left = (label.center_x as f32 - 0.5 * width).round();
        let top = label.top.round() as f32;
        let paint = paint(label.color, false);

        for (index, c) in label.text.chars().enumerate() {
            let origin = left + (index as u32 * GLYPH_SIZE) as f32 * scale;
            for (row, bits) in glyphs::glyph(c).iter().enumerate() {
                for col in 0..GLYPH_SIZE {
                    if bits & (1 << col) == 0 {
                        continue;
                    }
                    let x = origin + col as f32 * scale;
                    let y = top + row as f32 * scale;
                    if let Some(rect) = Rect::from_xywh(x, y, scale, scale) {
                        self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
                    }
                }
            }
        }
    }
}
