use crate::domain::ports::ConfigSource;
use crate::utils::error::{KitError, Result};
use crate::utils::validation::{
    validate_choice, validate_date_range, validate_unit_cost, validate_url, Validate,
};
use chrono::NaiveDate;
use clap::Parser;

pub const OUTPUT_FORMATS: &[&str] = &["html", "json", "csv"];
pub const DATA_SOURCES: &[&str] = &["memory", "http"];

#[derive(Debug, Clone, Parser)]
#[command(name = "solid-kit")]
#[command(about = "Assembles and runs the report and cost demos")]
pub struct CliConfig {
    #[arg(long, default_value = "Sales")]
    pub title: String,

    #[arg(long, default_value = "2024-01-01")]
    pub start: NaiveDate,

    #[arg(long, default_value = "2024-12-31")]
    pub end: NaiveDate,

    #[arg(long, default_value = "html", help = "Output format: html, json or csv")]
    pub format: String,

    #[arg(long, default_value = "memory", help = "Record source: memory or http")]
    pub source: String,

    #[arg(long, help = "Endpoint for the http source")]
    pub api_endpoint: Option<String>,

    #[arg(long, default_value = "1.5")]
    pub unit_cost: f64,

    #[arg(long, help = "TOML file describing the assembly (overrides the flags)")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigSource for CliConfig {
    fn report_title(&self) -> &str {
        &self.title
    }

    fn start_date(&self) -> NaiveDate {
        self.start
    }

    fn end_date(&self) -> NaiveDate {
        self.end
    }

    fn output_format(&self) -> &str {
        &self.format
    }

    fn data_source(&self) -> &str {
        &self.source
    }

    fn api_endpoint(&self) -> Option<&str> {
        self.api_endpoint.as_deref()
    }

    fn unit_cost(&self) -> f64 {
        self.unit_cost
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_choice("format", &self.format, OUTPUT_FORMATS)?;
        validate_choice("source", &self.source, DATA_SOURCES)?;
        validate_date_range(self.start, self.end)?;
        validate_unit_cost(self.unit_cost)?;

        if self.source == "http" {
            match &self.api_endpoint {
                Some(endpoint) => validate_url("api_endpoint", endpoint)?,
                None => {
                    return Err(KitError::InvalidConfigValueError {
                        field: "api_endpoint".to_string(),
                        value: String::new(),
                        reason: "Required when source is http".to_string(),
                    })
                }
            }
        }

        Ok(())
    }
}
