use eframe::egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(240, 240, 240);
pub const GRID_LINE: Color32 = Color32::from_rgb(200, 200, 200);
pub const SNAKE_BODY: Color32 = Color32::from_rgb(0, 255, 0);
pub const SNAKE_HEAD: Color32 = Color32::from_rgb(0, 170, 0);
pub const FOOD: Color32 = Color32::from_rgb(255, 0, 0);
pub const OBSTACLE: Color32 = Color32::from_rgb(0, 50, 128);
pub const GAME_OVER_TEXT: Color32 = Color32::from_rgb(255, 0, 0);
pub const PAUSED_TEXT: Color32 = Color32::from_rgb(60, 60, 60);
pub const OVERLAY_SHADE: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 60);
