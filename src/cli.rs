pub mod cli_error;
pub use cli_error::CliError;

pub mod cli_parser;
pub use cli_parser::Cli;

pub mod commands;
pub use commands::Commands;

pub mod help_template;
pub use help_template::HELP_TEMPLATE;

pub mod execute_command;
pub use execute_command::execute_command;

pub mod prompt;
pub use prompt::{play, prompt_for_actor};
