pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod period;
pub mod records;
pub mod state;
pub mod stats;
pub mod storage;

pub use app::router;
pub use config::Config;
pub use models::{DateRange, Location, StatsResult, WorkEntry};
pub use state::AppState;
pub use stats::compute_stats;
pub use storage::load_data;
