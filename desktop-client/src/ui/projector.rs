use common::games::snake::{Direction, Point, RunState, SessionSnapshot};
use eframe::egui::{pos2, vec2, Color32, Pos2, Rect};

use super::palette;
use crate::config::DisplayConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Background,
    Grid,
    Obstacle,
    Food,
    Snake,
    /// Head sliding toward its next cell between steps.
    Motion,
    Overlay,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    FilledRect { rect: Rect, color: Color32 },
    FilledCircle { center: Pos2, radius: f32, color: Color32 },
    Line { from: Pos2, to: Pos2, color: Color32 },
    Text { center: Pos2, text: String, size: f32, color: Color32 },
}

/// One drawable item in canvas coordinates, origin at the top-left of the field.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawPrimitive {
    pub layer: Layer,
    pub shape: Shape,
}

impl DrawPrimitive {
    fn new(layer: Layer, shape: Shape) -> Self {
        Self { layer, shape }
    }
}

pub fn canvas_size(snapshot: &SessionSnapshot, display: &DisplayConfig) -> eframe::egui::Vec2 {
    vec2(
        snapshot.field_size.width as f32 * display.cell_size,
        snapshot.field_size.height as f32 * display.cell_size,
    )
}

fn cell_rect(point: Point, cell_size: f32) -> Rect {
    Rect::from_min_size(
        pos2(point.x as f32 * cell_size, point.y as f32 * cell_size),
        vec2(cell_size, cell_size),
    )
}

/// Maps a snapshot to draw primitives, back to front. Never touches the session.
pub fn project(snapshot: &SessionSnapshot, display: &DisplayConfig) -> Vec<DrawPrimitive> {
    let cell_size = display.cell_size;
    let size = canvas_size(snapshot, display);
    let canvas = Rect::from_min_size(Pos2::ZERO, size);
    let mut primitives = vec![DrawPrimitive::new(
        Layer::Background,
        Shape::FilledRect {
            rect: canvas,
            color: palette::BACKGROUND,
        },
    )];

    if display.show_grid {
        for column in 0..=snapshot.field_size.width {
            let x = column as f32 * cell_size;
            primitives.push(DrawPrimitive::new(
                Layer::Grid,
                Shape::Line {
                    from: pos2(x, 0.0),
                    to: pos2(x, size.y),
                    color: palette::GRID_LINE,
                },
            ));
        }
        for row in 0..=snapshot.field_size.height {
            let y = row as f32 * cell_size;
            primitives.push(DrawPrimitive::new(
                Layer::Grid,
                Shape::Line {
                    from: pos2(0.0, y),
                    to: pos2(size.x, y),
                    color: palette::GRID_LINE,
                },
            ));
        }
    }

    primitives.extend(snapshot.obstacles.iter().map(|&obstacle| {
        DrawPrimitive::new(
            Layer::Obstacle,
            Shape::FilledRect {
                rect: cell_rect(obstacle, cell_size),
                color: palette::OBSTACLE,
            },
        )
    }));

    if let Some(food) = snapshot.food {
        let rect = cell_rect(food, cell_size);
        primitives.push(DrawPrimitive::new(
            Layer::Food,
            Shape::FilledCircle {
                center: rect.center(),
                radius: cell_size / 2.0,
                color: palette::FOOD,
            },
        ));
    }

    // tail first so the head ends up on top
    for (index, &cell) in snapshot.snake.iter().enumerate().rev() {
        let color = if index == 0 {
            palette::SNAKE_HEAD
        } else {
            palette::SNAKE_BODY
        };
        primitives.push(DrawPrimitive::new(
            Layer::Snake,
            Shape::FilledRect {
                rect: cell_rect(cell, cell_size),
                color,
            },
        ));
    }

    if let Some(lead) = head_lead(snapshot, cell_size) {
        primitives.push(lead);
    }

    match snapshot.run_state {
        RunState::Running => {}
        RunState::Paused => {
            primitives.push(shade(canvas));
            primitives.push(overlay_text(canvas.center(), "PAUSED", 28.0, palette::PAUSED_TEXT));
        }
        RunState::GameOver => {
            primitives.push(shade(canvas));
            primitives.extend(game_over_overlay(snapshot, canvas));
        }
    }

    primitives
}

fn head_lead(snapshot: &SessionSnapshot, cell_size: f32) -> Option<DrawPrimitive> {
    if snapshot.run_state != RunState::Running || snapshot.animation_progress <= 0.0 {
        return None;
    }
    let head = *snapshot.snake.first()?;
    let unit = match snapshot.heading {
        Direction::Left => vec2(-1.0, 0.0),
        Direction::Right => vec2(1.0, 0.0),
        Direction::Up => vec2(0.0, -1.0),
        Direction::Down => vec2(0.0, 1.0),
    };
    // may hang past the canvas edge before a wrap; the painter clips it
    let shift = unit * snapshot.animation_progress * cell_size;
    Some(DrawPrimitive::new(
        Layer::Motion,
        Shape::FilledRect {
            rect: cell_rect(head, cell_size).translate(shift),
            color: palette::SNAKE_HEAD,
        },
    ))
}

fn shade(canvas: Rect) -> DrawPrimitive {
    DrawPrimitive::new(
        Layer::Overlay,
        Shape::FilledRect {
            rect: canvas,
            color: palette::OVERLAY_SHADE,
        },
    )
}

fn overlay_text(center: Pos2, text: impl Into<String>, size: f32, color: Color32) -> DrawPrimitive {
    DrawPrimitive::new(
        Layer::Overlay,
        Shape::Text {
            center,
            text: text.into(),
            size,
            color,
        },
    )
}

fn game_over_overlay(snapshot: &SessionSnapshot, canvas: Rect) -> Vec<DrawPrimitive> {
    let center = canvas.center();
    let color = palette::GAME_OVER_TEXT;
    let mut lines = vec![
        overlay_text(pos2(center.x, canvas.min.y + 24.0), "GAME OVER", 32.0, color),
        overlay_text(center, format!("Your Score: {}", snapshot.score), 20.0, color),
    ];
    if let Some(reason) = snapshot.game_over_reason {
        lines.push(overlay_text(center + vec2(0.0, 28.0), reason.to_string(), 14.0, color));
    }
    lines.push(overlay_text(
        center + vec2(0.0, 56.0),
        "Press R to Restart or Q to Quit",
        16.0,
        color,
    ));
    lines
}
