use common::warn;
use tokio::sync::mpsc;

use crate::state::InputCommand;

/// UI side of the input channel; the game loop owns the receiving end.
#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<InputCommand>,
}

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<InputCommand>) -> Self {
        Self { tx }
    }

    /// Returns false when the game loop has already stopped.
    pub fn send(&self, command: InputCommand) -> bool {
        if self.tx.send(command).is_err() {
            warn!("Game loop stopped, dropping {:?}", command);
            return false;
        }
        true
    }
}
