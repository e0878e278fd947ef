mod app;

pub use app::{load_config, log_summary, run};
