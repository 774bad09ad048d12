//! Text front end for the warehouse: a one-shot demonstration and the
//! interactive operator menu.

pub mod config;
pub mod demo;
pub mod menu;

pub use config::CliConfig;
pub use menu::{Flow, Menu};
