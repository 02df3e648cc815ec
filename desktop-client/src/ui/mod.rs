mod painter;
mod palette;
mod projector;
mod snake_app;

pub use snake_app::SnakeApp;
