pub mod derive;
pub mod engine;
pub mod generator;
pub mod navigation;
pub mod reader;
pub mod template;

pub use crate::domain::model::{CourseRecord, GenerationReport, NavEntry, OutputArtifact};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
