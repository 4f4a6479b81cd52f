use crate::domain::model::Record;
use crate::domain::ports::Formatter;
use crate::utils::error::{KitError, Result};
use std::collections::BTreeSet;

/// Heading-plus-list HTML, the house report style.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
    fn render(&self, title: &str, records: &[Record]) -> Result<String> {
        let mut out = format!("<h1>{}: {}</h1>\n<ul>\n", title, records.len());
        for record in records {
            let fields = record
                .data
                .iter()
                .map(|(key, value)| format!("{}={}", key, render_value(value)))
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&format!("  <li>{} {}</li>\n", record.date, fields));
        }
        out.push_str("</ul>\n");
        Ok(out)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn render(&self, title: &str, records: &[Record]) -> Result<String> {
        let document = serde_json::json!({
            "title": title,
            "count": records.len(),
            "records": records,
        });
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

/// CSV with a `date` column followed by the union of record fields in
/// alphabetical order.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn render(&self, _title: &str, records: &[Record]) -> Result<String> {
        let columns: BTreeSet<&str> = records
            .iter()
            .flat_map(|record| record.data.keys().map(String::as_str))
            .collect();

        let mut writer = csv::Writer::from_writer(Vec::new());

        let mut header = vec!["date"];
        header.extend(columns.iter().copied());
        writer.write_record(&header)?;

        for record in records {
            let mut row = vec![record.date.to_string()];
            for column in &columns {
                let cell = record
                    .data
                    .get(*column)
                    .map(render_value)
                    .unwrap_or_default();
                row.push(cell);
            }
            writer.write_record(&row)?;
        }

        let bytes = writer.into_inner().map_err(|e| KitError::RenderError {
            message: e.to_string(),
        })?;
        String::from_utf8(bytes).map_err(|e| KitError::RenderError {
            message: e.to_string(),
        })
    }
}

fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
