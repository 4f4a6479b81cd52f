// Adapters layer: concrete implementations of the domain ports (in-memory
// and HTTP repositories, file-backed lesson source, output formatters).

pub mod file;
pub mod format;
pub mod http;
pub mod memory;

pub use file::FileLessonSource;
pub use format::{CsvFormatter, HtmlFormatter, JsonFormatter};
pub use http::HttpRepository;
pub use memory::{MemoryLessonSource, MemoryRepository};
