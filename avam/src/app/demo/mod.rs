mod app;
mod synthesize;

pub use app::run;
