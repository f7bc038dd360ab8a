pub mod categories;
pub mod config;
pub mod sessions;
pub mod stats;
pub mod timer;
