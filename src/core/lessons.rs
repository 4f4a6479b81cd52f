use crate::domain::ports::LessonSource;
use crate::utils::error::Result;

/// Lists lessons through the `LessonSource` capability. Because every
/// source returns the same shape, the catalog works identically no
/// matter which backing it was constructed with.
pub struct LessonCatalog<S: LessonSource> {
    source: S,
}

impl<S: LessonSource> LessonCatalog<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn titles(&self) -> Result<Vec<String>> {
        Ok(self
            .source
            .all()?
            .into_iter()
            .map(|lesson| lesson.title)
            .collect())
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.source.all()?.len())
    }
}
