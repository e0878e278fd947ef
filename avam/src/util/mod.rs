pub mod fs;
pub mod lv95;
pub mod stats;
