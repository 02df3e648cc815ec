use common::games::snake::{Direction, GameSession, SessionSnapshot};
use eframe::egui;
use ringbuffer::{AllocRingBuffer, RingBuffer};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::constants::EVENT_LOG_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Turn(Direction),
    TogglePause,
    Restart,
    Quit,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// State shared by the game loop thread and the egui paint callback.
pub struct SharedState {
    session: Arc<Mutex<GameSession>>,
    event_log: Arc<Mutex<AllocRingBuffer<String>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new(session: GameSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            event_log: Arc::new(Mutex::new(AllocRingBuffer::new(EVENT_LOG_SIZE))),
            context: Arc::new(Mutex::new(None)),
        }
    }

    /// Runs `f` with the session locked. Keep `f` short: painting waits on it.
    pub fn with_session<R>(&self, f: impl FnOnce(&mut GameSession) -> R) -> R {
        f(&mut lock(&self.session))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        lock(&self.session).snapshot()
    }

    pub fn add_event(&self, event: String) {
        lock(&self.event_log).enqueue(event);
    }

    /// Oldest first.
    pub fn events(&self) -> Vec<String> {
        lock(&self.event_log).iter().cloned().collect()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *lock(&self.context) = Some(ctx);
    }

    pub fn request_repaint(&self) {
        if let Some(ctx) = lock(&self.context).as_ref() {
            ctx.request_repaint();
        }
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            event_log: Arc::clone(&self.event_log),
            context: Arc::clone(&self.context),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::SessionRng;
    use common::games::snake::SnakeSessionSettings;
    use common::high_score::MemoryHighScoreStore;

    fn create_shared_state() -> SharedState {
        let session = GameSession::new(
            SnakeSessionSettings::default(),
            SessionRng::new(42),
            Box::new(MemoryHighScoreStore::new(0)),
        );
        SharedState::new(session)
    }

    #[test]
    fn test_event_log_keeps_latest_entries() {
        let state = create_shared_state();
        for i in 0..(EVENT_LOG_SIZE + 3) {
            state.add_event(format!("event {}", i));
        }
        let events = state.events();
        assert_eq!(events.len(), EVENT_LOG_SIZE);
        assert_eq!(events.first().unwrap(), "event 3");
        assert_eq!(events.last().unwrap(), &format!("event {}", EVENT_LOG_SIZE + 2));
    }

    #[test]
    fn test_clones_share_session() {
        let state = create_shared_state();
        let other = state.clone();
        other.with_session(|session| session.toggle_run());
        assert_eq!(
            state.snapshot().run_state,
            common::games::snake::RunState::Paused
        );
    }

    #[test]
    fn test_repaint_without_context_is_noop() {
        let state = create_shared_state();
        state.request_repaint();
    }
}
