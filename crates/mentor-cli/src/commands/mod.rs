pub mod config;
pub mod operations;
pub mod run;
pub mod utils;
