use crate::domain::model::{Lesson, Record};
use crate::domain::ports::{LessonSource, Repository};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Repository backed by a seeded record set. Stands in for a real data
/// store; consumers only ever see the `Repository` capability.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    records: Vec<Record>,
}

impl MemoryRepository {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Demo data set used when no external source is configured.
    pub fn seeded() -> Self {
        let entries = [
            (2024, 1, 9, "Acme", 120),
            (2024, 1, 24, "Globex", 80),
            (2024, 2, 3, "Initech", 310),
            (2024, 2, 17, "Acme", 45),
            (2024, 3, 28, "Umbrella", 200),
        ];

        let records = entries
            .iter()
            .map(|&(year, month, day, customer, amount)| {
                Record::new(NaiveDate::from_ymd_opt(year, month, day).unwrap())
                    .with("customer", customer)
                    .with("amount", amount)
            })
            .collect();

        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Record>> {
        let records: Vec<Record> = self
            .records
            .iter()
            .filter(|record| record.date >= start && record.date <= end)
            .cloned()
            .collect();

        tracing::debug!(
            "Memory repository matched {} of {} records",
            records.len(),
            self.records.len()
        );
        Ok(records)
    }
}

/// Lesson source over an owned map. The map is converted to the shared
/// `Vec<Lesson>` shape at the boundary, so callers see the same return
/// type as every other `LessonSource`.
#[derive(Debug, Clone, Default)]
pub struct MemoryLessonSource {
    lessons: BTreeMap<u32, String>,
}

impl MemoryLessonSource {
    pub fn insert(&mut self, id: u32, title: impl Into<String>) {
        self.lessons.insert(id, title.into());
    }
}

impl LessonSource for MemoryLessonSource {
    fn all(&self) -> Result<Vec<Lesson>> {
        Ok(self
            .lessons
            .iter()
            .map(|(&id, title)| Lesson {
                id,
                title: title.clone(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn between_is_inclusive_on_both_ends() {
        let repository = MemoryRepository::new(vec![
            Record::new(date(2024, 1, 1)).with("amount", 1),
            Record::new(date(2024, 1, 15)).with("amount", 2),
            Record::new(date(2024, 1, 31)).with("amount", 3),
            Record::new(date(2024, 2, 1)).with("amount", 4),
        ]);

        let records = repository
            .between(date(2024, 1, 1), date(2024, 1, 31))
            .await
            .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].get("amount").unwrap().as_i64().unwrap(), 1);
        assert_eq!(records[2].get("amount").unwrap().as_i64().unwrap(), 3);
    }

    #[tokio::test]
    async fn empty_range_yields_no_records() {
        let repository = MemoryRepository::seeded();
        let records = repository
            .between(date(2030, 1, 1), date(2030, 12, 31))
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn seeded_data_covers_the_demo_quarter() {
        let repository = MemoryRepository::seeded();
        assert_eq!(repository.len(), 5);

        let january = repository
            .between(date(2024, 1, 1), date(2024, 1, 31))
            .await
            .unwrap();
        assert_eq!(january.len(), 2);
    }

    #[test]
    fn lesson_source_returns_lessons_sorted_by_id() {
        let mut source = MemoryLessonSource::default();
        source.insert(3, "Lifetimes");
        source.insert(1, "Ownership");

        let lessons = source.all().unwrap();
        assert_eq!(lessons.len(), 2);
        assert_eq!(lessons[0].id, 1);
        assert_eq!(lessons[1].title, "Lifetimes");
    }
}
