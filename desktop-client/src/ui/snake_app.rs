use common::games::snake::{Direction, RunState, SessionSnapshot};
use common::log;
use eframe::egui;

use super::painter::paint;
use super::projector::{canvas_size, project};
use crate::command_sender::CommandSender;
use crate::config::DisplayConfig;
use crate::constants::WINDOW_TITLE;
use crate::state::{InputCommand, SharedState};

const EVENT_LOG_HEIGHT: f32 = 120.0;

pub fn map_key(key: egui::Key) -> Option<InputCommand> {
    match key {
        egui::Key::ArrowUp | egui::Key::W => Some(InputCommand::Turn(Direction::Up)),
        egui::Key::ArrowDown | egui::Key::S => Some(InputCommand::Turn(Direction::Down)),
        egui::Key::ArrowLeft | egui::Key::A => Some(InputCommand::Turn(Direction::Left)),
        egui::Key::ArrowRight | egui::Key::D => Some(InputCommand::Turn(Direction::Right)),
        egui::Key::Space | egui::Key::P => Some(InputCommand::TogglePause),
        egui::Key::R => Some(InputCommand::Restart),
        egui::Key::Q | egui::Key::Escape => Some(InputCommand::Quit),
        _ => None,
    }
}

pub fn window_title(snapshot: &SessionSnapshot) -> String {
    format!(
        "{} - Score: {} | High Score: {}",
        WINDOW_TITLE, snapshot.score, snapshot.high_score
    )
}

fn status_text(run_state: RunState) -> &'static str {
    match run_state {
        RunState::Running => "Running",
        RunState::Paused => "Paused (Space to resume)",
        RunState::GameOver => "Game over (R to restart)",
    }
}

pub struct SnakeApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    display: DisplayConfig,
    title: String,
    quitting: bool,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_sender: CommandSender,
        display: DisplayConfig,
    ) -> Self {
        Self {
            shared_state,
            command_sender,
            display,
            title: String::new(),
            quitting: false,
        }
    }

    fn quit(&mut self, ctx: &egui::Context) {
        if self.quitting {
            return;
        }
        log!("Quit requested");
        self.quitting = true;
        self.command_sender.send(InputCommand::Quit);
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let commands: Vec<InputCommand> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        ..
                    } => map_key(*key),
                    _ => None,
                })
                .collect()
        });

        for command in commands {
            match command {
                InputCommand::Quit => self.quit(ctx),
                command => {
                    self.command_sender.send(command);
                }
            }
        }
    }

    fn update_title(&mut self, ctx: &egui::Context, snapshot: &SessionSnapshot) {
        let title = window_title(snapshot);
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }

    fn render_status(&self, ui: &mut egui::Ui, snapshot: &SessionSnapshot) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("Score: {}", snapshot.score)).strong());
            ui.separator();
            ui.label(format!("High Score: {}", snapshot.high_score));
            ui.separator();
            ui.label(status_text(snapshot.run_state));
        });
    }

    fn render_event_log(&self, ui: &mut egui::Ui) {
        let events = self.shared_state.events();
        egui::ScrollArea::vertical()
            .id_salt("event_log_scroll")
            .stick_to_bottom(true)
            .max_height(EVENT_LOG_HEIGHT)
            .show(ui, |ui| {
                if events.is_empty() {
                    ui.label(
                        egui::RichText::new("No events yet...")
                            .italics()
                            .color(egui::Color32::GRAY),
                    );
                } else {
                    for event in &events {
                        ui.label(event);
                    }
                }
            });
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.quit(ctx);
        }

        self.handle_input(ctx);

        let snapshot = self.shared_state.snapshot();
        self.update_title(ctx, &snapshot);

        egui::TopBottomPanel::top("status_panel").show(ctx, |ui| {
            self.render_status(ui, &snapshot);
        });

        egui::TopBottomPanel::bottom("event_panel")
            .resizable(false)
            .min_height(EVENT_LOG_HEIGHT)
            .show(ctx, |ui| {
                self.render_event_log(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(
                canvas_size(&snapshot, &self.display),
                egui::Sense::hover(),
            );
            let painter = painter.with_clip_rect(response.rect);
            paint(&painter, response.rect.min, &project(&snapshot, &self.display));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::snake::{FieldSize, Point};

    #[test]
    fn test_arrows_and_wasd_map_to_same_direction() {
        let pairs = [
            (egui::Key::ArrowUp, egui::Key::W, Direction::Up),
            (egui::Key::ArrowDown, egui::Key::S, Direction::Down),
            (egui::Key::ArrowLeft, egui::Key::A, Direction::Left),
            (egui::Key::ArrowRight, egui::Key::D, Direction::Right),
        ];
        for (arrow, letter, direction) in pairs {
            assert_eq!(map_key(arrow), Some(InputCommand::Turn(direction)));
            assert_eq!(map_key(letter), Some(InputCommand::Turn(direction)));
        }
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(egui::Key::Space), Some(InputCommand::TogglePause));
        assert_eq!(map_key(egui::Key::P), Some(InputCommand::TogglePause));
        assert_eq!(map_key(egui::Key::R), Some(InputCommand::Restart));
        assert_eq!(map_key(egui::Key::Q), Some(InputCommand::Quit));
        assert_eq!(map_key(egui::Key::Escape), Some(InputCommand::Quit));
        assert_eq!(map_key(egui::Key::Enter), None);
    }

    #[test]
    fn test_window_title_shows_scores() {
        let snapshot = SessionSnapshot {
            field_size: FieldSize {
                width: 20,
                height: 20,
            },
            snake: vec![Point::new(5, 5)],
            food: None,
            obstacles: Vec::new(),
            score: 40,
            high_score: 90,
            run_state: RunState::Running,
            game_over_reason: None,
            heading: Direction::Right,
            animation_progress: 0.0,
        };
        assert_eq!(
            window_title(&snapshot),
            "Snake Game - Score: 40 | High Score: 90"
        );
    }
}
