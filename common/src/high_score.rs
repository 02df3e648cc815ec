use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::config::{ConfigSerializer, ContentProvider, DecimalSerializer, FileContentProvider};
use crate::warn;

/// Best score across sessions. Load never fails and save is best effort.
pub trait HighScoreStore: Send {
    fn load(&self) -> u32;
    fn save(&self, score: u32);
}

/// Keeps the score as a bare decimal number in a text file.
pub struct FileHighScoreStore {
    content_provider: FileContentProvider,
    serializer: DecimalSerializer,
}

impl FileHighScoreStore {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            content_provider: FileContentProvider::new(file_path),
            serializer: DecimalSerializer,
        }
    }

    pub fn path(&self) -> &Path {
        self.content_provider.path()
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> u32 {
        let content = match self.content_provider.get_content() {
            Ok(Some(content)) => content,
            Ok(None) => return 0,
            Err(e) => {
                warn!("Treating high score as 0: {}", e);
                return 0;
            }
        };
        self.serializer.deserialize(&content).unwrap_or_else(|e| {
            warn!("Treating high score as 0: {}", e);
            0
        })
    }

    fn save(&self, score: u32) {
        let saved = self
            .serializer
            .serialize(&score)
            .and_then(|content| self.content_provider.set_content(&content));
        if let Err(e) = saved {
            warn!("High score {} not saved: {}", score, e);
        }
    }
}

/// In-memory store; clones share the same value.
#[derive(Clone, Default)]
pub struct MemoryHighScoreStore {
    value: Arc<Mutex<u32>>,
}

impl MemoryHighScoreStore {
    pub fn new(initial: u32) -> Self {
        Self {
            value: Arc::new(Mutex::new(initial)),
        }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> u32 {
        *self.value.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn save(&self, score: u32) {
        *self.value.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = score;
    }
}
