use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single row handed back by a repository. Field order is stable so
/// renderers produce deterministic output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub date: NaiveDate,
    pub data: BTreeMap<String, serde_json::Value>,
}

impl Record {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            data: BTreeMap::new(),
        }
    }

    pub fn with(mut self, field: &str, value: impl Into<serde_json::Value>) -> Self {
        self.data.insert(field.to_string(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.data.get(field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: u32,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_builder_keeps_fields() {
        let record = Record::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
            .with("customer", "Acme")
            .with("amount", 120);

        assert_eq!(record.get("customer").unwrap().as_str().unwrap(), "Acme");
        assert_eq!(record.get("amount").unwrap().as_i64().unwrap(), 120);
        assert!(record.get("missing").is_none());
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = Record::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()).with("amount", 42);
        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
