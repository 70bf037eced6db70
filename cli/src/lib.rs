pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod output;
pub mod search;

// Re-export commonly used items
pub use app::CastPathApp;
pub use args::{Cli, Command};
pub use display::format_number;
pub use search::{RunReport, run_connection_queries, run_path_queries};
