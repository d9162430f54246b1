pub mod args;
pub mod handlers;

pub use args::Cli;
pub use handlers::{build_config, handle_run};
