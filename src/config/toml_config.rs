use crate::core::geometry::{Circle, Rectangle, DEFAULT_UNIT_COST};
use crate::domain::ports::{Area, ConfigSource};
use crate::utils::error::{KitError, Result};
use crate::utils::validation::{
    validate_choice, validate_date_range, validate_unit_cost, validate_url, Validate,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub report: ReportSection,
    pub source: SourceSection,
    #[serde(default)]
    pub shapes: Vec<ShapeSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub format: String,
    pub unit_cost: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSection {
    pub r#type: String,
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeSection {
    pub kind: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub radius: Option<f64>,
}

impl TomlConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&text)?;
        tracing::debug!("Loaded assembly config from {}", path.display());
        Ok(config)
    }
}

fn require_field(section: &ShapeSection, field: &str, value: Option<f64>) -> Result<f64> {
    value.ok_or_else(|| KitError::InvalidConfigValueError {
        field: format!("shapes.{}", field),
        value: String::new(),
        reason: format!("Required for kind {:?}", section.kind),
    })
}

impl ShapeSection {
    pub fn build(&self) -> Result<Box<dyn Area>> {
        match self.kind.as_str() {
            "rectangle" => {
                let width = require_field(self, "width", self.width)?;
                let height = require_field(self, "height", self.height)?;
                Ok(Box::new(Rectangle::new(width, height)?))
            }
            "circle" => {
                let radius = require_field(self, "radius", self.radius)?;
                Ok(Box::new(Circle::new(radius)?))
            }
            other => Err(KitError::InvalidConfigValueError {
                field: "shapes.kind".to_string(),
                value: other.to_string(),
                reason: "Expected one of: rectangle, circle".to_string(),
            }),
        }
    }
}

impl ConfigSource for TomlConfig {
    fn report_title(&self) -> &str {
        &self.report.title
    }

    fn start_date(&self) -> NaiveDate {
        self.report.start
    }

    fn end_date(&self) -> NaiveDate {
        self.report.end
    }

    fn output_format(&self) -> &str {
        &self.report.format
    }

    fn data_source(&self) -> &str {
        &self.source.r#type
    }

    fn api_endpoint(&self) -> Option<&str> {
        self.source.endpoint.as_deref()
    }

    fn unit_cost(&self) -> f64 {
        self.report.unit_cost.unwrap_or(DEFAULT_UNIT_COST)
    }

    fn shapes(&self) -> Result<Vec<Box<dyn Area>>> {
        self.shapes.iter().map(ShapeSection::build).collect()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_choice("report.format", &self.report.format, &["html", "json", "csv"])?;
        validate_choice("source.type", &self.source.r#type, &["memory", "http"])?;
        validate_date_range(self.report.start, self.report.end)?;
        if let Some(unit_cost) = self.report.unit_cost {
            validate_unit_cost(unit_cost)?;
        }

        if self.source.r#type == "http" {
            match &self.source.endpoint {
                Some(endpoint) => validate_url("source.endpoint", endpoint)?,
                None => {
                    return Err(KitError::InvalidConfigValueError {
                        field: "source.endpoint".to_string(),
                        value: String::new(),
                        reason: "Required when source.type is http".to_string(),
                    })
                }
            }
        }

        // Building the shapes exercises every dimension check.
        self.shapes()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[report]
title = "Sales"
start = "2024-01-01"
end = "2024-03-31"
format = "html"

[source]
type = "memory"

[[shapes]]
kind = "rectangle"
width = 15.0
height = 20.0

[[shapes]]
kind = "circle"
radius = 5.0
"#;

    #[test]
    fn parses_and_validates_the_sample() {
        let config: TomlConfig = toml::from_str(SAMPLE).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.report_title(), "Sales");
        assert_eq!(config.unit_cost(), DEFAULT_UNIT_COST);

        let shapes = config.shapes().unwrap();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].area(), 300.0);
    }

    #[test]
    fn unknown_shape_kind_is_rejected() {
        let mut config: TomlConfig = toml::from_str(SAMPLE).unwrap();
        config.shapes.push(ShapeSection {
            kind: "hexagon".to_string(),
            width: None,
            height: None,
            radius: None,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn rectangle_without_height_is_rejected() {
        let config: TomlConfig = toml::from_str(
            r#"
[report]
title = "Sales"
start = "2024-01-01"
end = "2024-03-31"
format = "csv"

[source]
type = "memory"

[[shapes]]
kind = "rectangle"
width = 15.0
"#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            KitError::InvalidConfigValueError { ref field, .. } if field == "shapes.height"
        ));
    }

    #[test]
    fn negative_dimension_surfaces_from_validation() {
        let config: TomlConfig = toml::from_str(
            r#"
[report]
title = "Sales"
start = "2024-01-01"
end = "2024-03-31"
format = "csv"

[source]
type = "memory"

[[shapes]]
kind = "circle"
radius = -5.0
"#,
        )
        .unwrap();

        assert!(matches!(
            config.validate().unwrap_err(),
            KitError::InvalidDimensionError { .. }
        ));
    }

    #[test]
    fn http_source_requires_an_endpoint() {
        let config: TomlConfig = toml::from_str(
            r#"
[report]
title = "Sales"
start = "2024-01-01"
end = "2024-03-31"
format = "json"

[source]
type = "http"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }
}
