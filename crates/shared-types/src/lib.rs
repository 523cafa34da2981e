pub mod analytics;
pub mod common;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod task;
pub mod user;

pub use analytics::*;
pub use common::*;
pub use config::*;
pub use dashboard::*;
pub use error::*;
pub use task::*;
pub use user::*;
