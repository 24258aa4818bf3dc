pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod progress;
pub mod report;
pub mod scanner;
pub mod table;

pub use config::AppConfig;
pub use engine::ReportEngine;
pub use error::Error;
pub use model::FileRecord;
pub use progress::{ScanReporter, SilentReporter};
pub use report::{Section, View};
pub use table::{Table, TableRow};
