pub mod args;
pub mod commands;
pub mod render;

pub use args::{Cli, Command};
pub use commands::dispatch;
