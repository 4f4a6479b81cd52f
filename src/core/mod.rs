pub mod access;
pub mod crew;
pub mod geometry;
pub mod lessons;
pub mod playback;
pub mod report;

pub use crate::domain::model::{Lesson, Record};
pub use crate::domain::ports::{
    AccessGate, Area, ConfigSource, Connection, Formatter, LessonSource, MediaPlayer, Repository,
    Sleepable, Workable,
};
pub use crate::utils::error::Result;
