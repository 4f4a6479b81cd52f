use crate::domain::model::{Lesson, Record};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Anything that can report its own surface area.
pub trait Area {
    fn area(&self) -> f64;
}

/// Data-access capability. Backends stay opaque to consumers; the only
/// promise is a row set for the requested date range.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Record>>;
}

#[async_trait]
impl<T: Repository + ?Sized> Repository for Box<T> {
    async fn between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Record>> {
        (**self).between(start, end).await
    }
}

/// Output-rendering capability. Pure: same title and rows, same string.
pub trait Formatter: Send + Sync {
    fn render(&self, title: &str, records: &[Record]) -> Result<String>;
}

impl<T: Formatter + ?Sized> Formatter for Box<T> {
    fn render(&self, title: &str, records: &[Record]) -> Result<String> {
        (**self).render(title, records)
    }
}

/// Opaque authentication capability, consulted before report assembly.
/// Report types never see it.
pub trait AccessGate: Send + Sync {
    fn check(&self) -> bool;
}

pub trait Workable {
    fn work(&self);
}

pub trait Sleepable {
    fn sleep(&self);
}

/// Plays the media file at `path`. The base contract accepts any path;
/// implementations must not narrow it (see `core::playback::AviPlayer`
/// for the counter-example that does).
pub trait MediaPlayer {
    fn play(&self, path: &str) -> Result<()>;
}

/// Lesson listing capability. Every implementation returns the same
/// shape, so callers can swap sources freely.
pub trait LessonSource {
    fn all(&self) -> Result<Vec<Lesson>>;
}

/// Opaque backing-service connection.
pub trait Connection {
    fn connect(&self) -> Result<()>;
}

/// Assembly-time choices for the demo binary: which report to run, over
/// which date range, rendered how, priced at what unit cost.
pub trait ConfigSource: Send + Sync {
    fn report_title(&self) -> &str;
    fn start_date(&self) -> NaiveDate;
    fn end_date(&self) -> NaiveDate;
    fn output_format(&self) -> &str;
    fn data_source(&self) -> &str;
    fn api_endpoint(&self) -> Option<&str>;
    fn unit_cost(&self) -> f64;

    fn shapes(&self) -> Result<Vec<Box<dyn Area>>> {
        Ok(Vec::new())
    }
}
