use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Raw text storage behind configs and the high score file.
pub trait ContentProvider {
    /// `Ok(None)` when there is nothing stored yet.
    fn get_content(&self) -> Result<Option<String>, String>;
    fn set_content(&self, content: &str) -> Result<(), String>;
}

#[derive(Clone, Debug)]
pub struct FileContentProvider {
    file_path: PathBuf,
}

impl FileContentProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl ContentProvider for FileContentProvider {
    fn get_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read {}: {}",
                self.file_path.display(),
                err
            )),
        }
    }

    fn set_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(&self.file_path, content)
            .map_err(|e| format!("Failed to write {}: {}", self.file_path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_snake_content_{}.txt", random_number))
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let provider = FileContentProvider::new("this_file_does_not_exist.txt");
        assert_eq!(provider.get_content(), Ok(None));
    }

    #[test]
    fn test_written_content_can_be_read_back() {
        let path = get_temp_file_path();
        let provider = FileContentProvider::new(path.clone());
        provider.set_content("120").unwrap();
        assert_eq!(provider.get_content(), Ok(Some("120".to_string())));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_directory_path_is_a_read_error() {
        let provider = FileContentProvider::new(std::env::temp_dir());
        assert!(provider.get_content().is_err());
    }
}
