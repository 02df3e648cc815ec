use common::defaults::{FOOD_SCORE, TICK_INTERVAL};
use common::games::snake::{MoveOutcome, RunState, TickResult};
use common::log;
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};

use crate::state::{InputCommand, SharedState};

/// Drives the session: one `tick()` per interval, input commands in between.
/// Returns on `Quit` or when every sender is gone.
pub async fn run_game_loop(
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<InputCommand>,
) {
    let mut tick_timer = interval(TICK_INTERVAL);
    tick_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = tick_timer.tick() => {
                let result = shared_state.with_session(|session| session.tick());
                report_tick(&shared_state, result);
                if result != TickResult::Idle {
                    shared_state.request_repaint();
                }
            }
            command = command_rx.recv() => {
                match command {
                    Some(InputCommand::Quit) | None => break,
                    Some(command) => handle_command(&shared_state, command),
                }
                shared_state.request_repaint();
            }
        }
    }

    log!("Game loop stopped");
}

pub fn handle_command(shared_state: &SharedState, command: InputCommand) {
    match command {
        InputCommand::Turn(direction) => {
            shared_state.with_session(|session| session.set_direction(direction));
        }
        InputCommand::TogglePause => {
            let run_state = shared_state.with_session(|session| session.toggle_run());
            match run_state {
                RunState::Paused => shared_state.add_event("Paused".to_string()),
                RunState::Running => shared_state.add_event("Resumed".to_string()),
                RunState::GameOver => {}
            }
        }
        InputCommand::Restart => {
            if shared_state.with_session(|session| session.request_restart()) {
                log!("Game restarted");
                shared_state.add_event("New game".to_string());
            }
        }
        InputCommand::Quit => {}
    }
}

fn report_tick(shared_state: &SharedState, result: TickResult) {
    match result {
        TickResult::Stepped(MoveOutcome::Grew) => {
            shared_state.add_event(format!("+{} points", FOOD_SCORE));
        }
        TickResult::GameOver(reason) => {
            let (score, high_score) =
                shared_state.with_session(|session| (session.score(), session.high_score()));
            shared_state.add_event(format!(
                "Game over: {}. Score {} (best {})",
                reason, score, high_score
            ));
        }
        TickResult::Idle | TickResult::Advanced | TickResult::Stepped(_) => {}
    }
}
