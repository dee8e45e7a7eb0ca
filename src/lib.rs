pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use api::{create_router, AppState};
pub use config::{AppConfig, QueryConfig};
pub use crate::core::client::QueryClient;
pub use domain::model::{QueryResult, ResultField, ResultRecord};
pub use utils::error::{ConsultaError, Result};
