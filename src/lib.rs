pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};
pub use config::{storage::LocalStorage, toml_config::TomlConfig, GeneratorConfig};

pub use core::derive::{derive_course_tag, derive_folder_name};
pub use core::{engine::BatchEngine, generator::CourseGenerator, navigation::NavigationHelper};
pub use domain::model::{Category, CourseRecord, Electiveness, GenerationReport, NavEntry, OutputArtifact};
pub use utils::error::{CourseGenError, Result};
