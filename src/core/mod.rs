pub mod client;
pub mod handler;
pub mod render;

pub use crate::domain::model::{QueryResult, ResultRecord, SubmittedForm};
pub use crate::domain::ports::PlanillaQuery;
pub use crate::utils::error::Result;
