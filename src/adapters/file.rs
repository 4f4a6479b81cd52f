use crate::domain::model::Lesson;
use crate::domain::ports::LessonSource;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Lesson source over a JSON file on disk (an array of lesson objects).
#[derive(Debug, Clone)]
pub struct FileLessonSource {
    path: PathBuf,
}

impl FileLessonSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl LessonSource for FileLessonSource {
    fn all(&self) -> Result<Vec<Lesson>> {
        let text = fs::read_to_string(&self.path)?;
        let lessons: Vec<Lesson> = serde_json::from_str(&text)?;
        tracing::debug!("Loaded {} lessons from {}", lessons.len(), self.path.display());
        Ok(lessons)
    }
}
