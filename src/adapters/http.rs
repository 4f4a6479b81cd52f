use crate::domain::model::Record;
use crate::domain::ports::Repository;
use crate::utils::error::{KitError, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;

/// Repository over a JSON HTTP endpoint. Expects an array of objects,
/// each carrying an ISO `date` field; remaining fields become record
/// data. Objects without a usable date are skipped.
pub struct HttpRepository {
    endpoint: String,
    client: Client,
}

impl HttpRepository {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Repository for HttpRepository {
    async fn between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Record>> {
        tracing::debug!("Requesting records from {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("start", start.to_string()), ("end", end.to_string())])
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());
        if !response.status().is_success() {
            return Err(KitError::RepositoryError {
                message: format!("endpoint returned {}", response.status()),
            });
        }

        let payload: serde_json::Value = response.json().await?;
        let items = match payload {
            serde_json::Value::Array(items) => items,
            other => {
                return Err(KitError::RepositoryError {
                    message: format!("expected a JSON array, got {}", value_kind(&other)),
                })
            }
        };

        let mut records = Vec::new();
        for item in items {
            let serde_json::Value::Object(mut fields) = item else {
                tracing::warn!("Skipping non-object item in response");
                continue;
            };

            let date = fields
                .remove("date")
                .and_then(|value| value.as_str().map(str::to_string))
                .and_then(|text| text.parse::<NaiveDate>().ok());

            let Some(date) = date else {
                tracing::warn!("Skipping record without a parsable date");
                continue;
            };

            // Endpoints are trusted to honor the query range, but a record
            // outside it would break the Repository contract.
            if date < start || date > end {
                continue;
            }

            let mut record = Record::new(date);
            record.data.extend(fields);
            records.push(record);
        }

        tracing::debug!("Fetched {} records", records.len());
        Ok(records)
    }
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
