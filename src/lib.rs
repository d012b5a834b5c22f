pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use app::session::{MenuSession, SessionEnd};
pub use config::{cli::LocalStorage, toml_config::RosterConfig};
pub use crate::core::store::CandidateStore;
pub use domain::model::{Candidate, Criterion, LoadOutcome, SortOutcome, SortStrategy};
pub use utils::error::{CodecError, Result, RosterError};
