mod args;
mod commands;
pub mod config;
mod handlers;
pub mod presentation;
mod store;
pub mod types;

pub use args::{ActivityCommand, Cli, Commands, OfferCommand, ProjectCommand};
pub use commands::run;
