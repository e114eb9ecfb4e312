pub mod config;
pub mod reveal;
pub mod scheduler;
pub mod state;
