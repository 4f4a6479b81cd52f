use solid_kit::config::TomlConfig;
use solid_kit::core::geometry::CostManager;
use solid_kit::domain::ports::{ConfigSource, Formatter};
use solid_kit::utils::validation::Validate;
use solid_kit::{CsvFormatter, HtmlFormatter, JsonFormatter, MemoryRepository, ReportEngine};
use std::io::Write;

const ASSEMBLY: &str = r#"
[report]
title = "Quarterly Sales"
start = "2024-01-01"
end = "2024-03-31"
format = "json"
unit_cost = 1.5

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

fn load(text: &str) -> TomlConfig {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", text).unwrap();
    TomlConfig::from_file(file.path()).unwrap()
}

#[tokio::test]
async fn toml_config_drives_a_full_report_run() {
    let config = load(ASSEMBLY);
    config.validate().unwrap();

    // The same selection the binary performs at its assembly point.
    let formatter: Box<dyn Formatter> = match config.output_format() {
        "json" => Box::new(JsonFormatter),
        "csv" => Box::new(CsvFormatter),
        _ => Box::new(HtmlFormatter),
    };

    let engine = ReportEngine::new(config.report_title(), MemoryRepository::seeded(), formatter);
    let report = engine
        .between(config.start_date(), config.end_date())
        .await
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(value["title"], "Quarterly Sales");
    assert_eq!(value["count"], 5);
}

#[test]
fn toml_shapes_price_through_the_cost_manager() {
    let config = load(ASSEMBLY);
    let shapes = config.shapes().unwrap();
    let manager = CostManager::new(config.unit_cost());

    assert_eq!(shapes.len(), 2);
    assert_eq!(manager.calculate(shapes[0].as_ref()), 450.0);

    let expected_total = 1.5 * (300.0 + std::f64::consts::PI * 25.0);
    assert!((manager.total(&shapes) - expected_total).abs() < 1e-9);
}

#[test]
fn config_file_errors_are_reported_not_swallowed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "report = 12").unwrap();
    assert!(TomlConfig::from_file(file.path()).is_err());

    let config = load(
        r#"
[report]
title = "Sales"
start = "2024-12-31"
end = "2024-01-01"
format = "html"

[source]
type = "memory"
"#,
    );
    assert!(config.validate().is_err());
}
