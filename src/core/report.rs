use crate::domain::ports::{Formatter, Repository};
use crate::utils::error::Result;
use chrono::NaiveDate;

/// Report orchestration: one fetch, one render, nothing else. Data access
/// and output shape are both injected, so this type holds no query or
/// formatting logic of its own.
pub struct ReportEngine<R: Repository, F: Formatter> {
    title: String,
    repository: R,
    formatter: F,
}

impl<R: Repository, F: Formatter> ReportEngine<R, F> {
    pub fn new(title: impl Into<String>, repository: R, formatter: F) -> Self {
        Self {
            title: title.into(),
            repository,
            formatter,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub async fn between(&self, start: NaiveDate, end: NaiveDate) -> Result<String> {
        tracing::debug!("Fetching {} records between {} and {}", self.title, start, end);
        let records = self.repository.between(start, end).await?;

        tracing::debug!("Rendering {} records", records.len());
        self.formatter.render(&self.title, &records)
    }
}
