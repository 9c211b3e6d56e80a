pub mod config;
pub mod core;
pub mod domain;
pub mod feed;
pub mod render;
pub mod utils;

pub use config::CliConfig;
pub use core::classify::{classify, Urgency};
pub use core::refresh::RefreshManager;
pub use domain::model::{Order, ResolvedOrder};
pub use domain::ports::OrderSource;
pub use feed::CsvFeed;
pub use utils::error::{DashboardError, Result};
