mod command_sender;
mod config;
mod constants;
mod game_loop;
mod state;
mod ui;

use clap::Parser;
use common::defaults::{FIELD_HEIGHT, FIELD_WIDTH};
use common::games::snake::GameSession;
use common::games::SessionRng;
use common::high_score::FileHighScoreStore;
use common::logger::init_logger;
use common::{log, warn};
use eframe::egui;
use std::path::PathBuf;
use tokio::sync::mpsc;

use command_sender::CommandSender;
use config::{default_config_path, get_config_manager, Config};
use constants::WINDOW_TITLE;
use game_loop::run_game_loop;
use state::SharedState;
use ui::SnakeApp;

const PANELS_HEIGHT: f32 = 190.0;
const SIDE_MARGIN: f32 = 16.0;

#[derive(Parser, Debug)]
#[command(about = "Classic Snake with obstacles and a persisted high score")]
struct Args {
    /// YAML config file, defaults to snake_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(args.use_log_prefix.then(|| "Snake".to_string()));

    let config_path = args.config.unwrap_or_else(default_config_path);
    log!("Using config {}", config_path.display());
    let config: Config = get_config_manager(Some(config_path)).get_config_or_default();

    let store = FileHighScoreStore::new(&config.high_score.location);
    log!("High score file {}", store.path().display());
    let session = GameSession::new(
        config.game.to_settings(),
        SessionRng::from_random(),
        Box::new(store),
    );

    let shared_state = SharedState::new(session);
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let loop_state = shared_state.clone();
    let game_loop_handle = std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                warn!("Failed to start game loop runtime: {}", e);
                return;
            }
        };
        runtime.block_on(run_game_loop(loop_state, command_rx));
    });

    let cell_size = config.display.cell_size;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                FIELD_WIDTH as f32 * cell_size + SIDE_MARGIN,
                FIELD_HEIGHT as f32 * cell_size + PANELS_HEIGHT,
            ])
            .with_resizable(false)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    let command_sender = CommandSender::new(command_tx);
    let app_sender = command_sender.clone();
    let display = config.display;
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            shared_state.set_context(cc.egui_ctx.clone());
            Ok(Box::new(SnakeApp::new(shared_state, app_sender, display)))
        }),
    )?;

    // the loop also stops once every sender is gone
    drop(command_sender);
    if game_loop_handle.join().is_err() {
        warn!("Game loop thread panicked");
    }

    Ok(())
}
