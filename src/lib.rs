pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::format::{CsvFormatter, HtmlFormatter, JsonFormatter};
pub use crate::adapters::http::HttpRepository;
pub use crate::adapters::memory::MemoryRepository;
pub use crate::core::geometry::{total_area, Circle, CostManager, Rectangle};
pub use crate::core::report::ReportEngine;
pub use crate::utils::error::{KitError, Result};
