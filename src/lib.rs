pub mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod git;
pub mod hours;
pub mod lsof;
pub mod model;
pub mod tui;
pub mod util;
