use eframe::egui;

use super::projector::{DrawPrimitive, Shape};

const GRID_LINE_WIDTH: f32 = 1.0;

/// Paints projected primitives with `origin` as the canvas top-left corner.
pub fn paint(painter: &egui::Painter, origin: egui::Pos2, primitives: &[DrawPrimitive]) {
    let offset = origin.to_vec2();
    for primitive in primitives {
        match &primitive.shape {
            Shape::FilledRect { rect, color } => {
                painter.rect_filled(rect.translate(offset), 0.0, *color);
            }
            Shape::FilledCircle {
                center,
                radius,
                color,
            } => {
                painter.circle_filled(*center + offset, *radius, *color);
            }
            Shape::Line { from, to, color } => {
                painter.line_segment(
                    [*from + offset, *to + offset],
                    egui::Stroke::new(GRID_LINE_WIDTH, *color),
                );
            }
            Shape::Text {
                center,
                text,
                size,
                color,
            } => {
                painter.text(
                    *center + offset,
                    egui::Align2::CENTER_CENTER,
                    text,
                    egui::FontId::proportional(*size),
                    *color,
                );
            }
        }
    }
}
