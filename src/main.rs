use anyhow::Context;
use clap::Parser;
use solid_kit::config::{CliConfig, TomlConfig};
use solid_kit::core::access::StaticGate;
use solid_kit::core::geometry::CostManager;
use solid_kit::core::report::ReportEngine;
use solid_kit::domain::ports::{AccessGate, Area, ConfigSource, Formatter, Repository};
use solid_kit::utils::{logger, validation::Validate};
use solid_kit::{
    CsvFormatter, HtmlFormatter, HttpRepository, JsonFormatter, KitError, MemoryRepository,
};
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting solid-kit demo");

    let result = match &cli.config {
        Some(path) => {
            let config = TomlConfig::from_file(Path::new(path))
                .with_context(|| format!("Failed to load config file: {}", path))?;
            run(&config).await
        }
        None => run(&cli).await,
    };

    if let Err(e) = result {
        tracing::error!("❌ Demo run failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run<C: ConfigSource + Validate>(config: &C) -> solid_kit::Result<()> {
    // 驗證配置
    config.validate()?;

    // 報表屬於報表，認證屬於閘門
    let gate = StaticGate::allow();
    if !gate.check() {
        return Err(KitError::AccessDeniedError);
    }

    // 在組裝點選擇具體實作
    let repository: Box<dyn Repository> = match config.data_source() {
        "http" => {
            let endpoint = config.api_endpoint().unwrap_or_default();
            Box::new(HttpRepository::new(endpoint))
        }
        _ => Box::new(MemoryRepository::seeded()),
    };

    let formatter: Box<dyn Formatter> = match config.output_format() {
        "json" => Box::new(JsonFormatter),
        "csv" => Box::new(CsvFormatter),
        _ => Box::new(HtmlFormatter),
    };

    let engine = ReportEngine::new(config.report_title(), repository, formatter);
    let report = engine
        .between(config.start_date(), config.end_date())
        .await?;

    tracing::info!("✅ Report generated");
    println!("{}", report);

    // 配置了形狀時順便跑成本試算
    let shapes: Vec<Box<dyn Area>> = config.shapes()?;
    if !shapes.is_empty() {
        let manager = CostManager::new(config.unit_cost());
        for (index, shape) in shapes.iter().enumerate() {
            println!(
                "Shape {}: area {:.2}, cost {:.2}",
                index + 1,
                shape.area(),
                manager.calculate(shape.as_ref())
            );
        }
        println!("Total cost: {:.2}", manager.total(&shapes));
    }

    Ok(())
}
