//! Command-line interface over the workflow engine.
//!
//! Every command reads documents exported by the persistence layer and
//! prints the engine's decision; nothing is written back.

/// Command implementations
pub mod commands;
/// Output formatting
pub mod display;
/// clap definitions
pub mod types;

pub use types::{Cli, Commands};

use crate::domain::models::Config;

/// Run the parsed command. Returns `Ok(false)` when the command completed
/// but its verdict was negative (illegal transition, invalid payload).
pub fn run(cli: Cli, config: &Config) -> anyhow::Result<bool> {
    match cli.command {
        Commands::Enrich(args) => commands::enrich::execute(args, cli.json, &config.display),
        Commands::Transition(args) => commands::transition::execute(args, cli.json),
        Commands::Transitions(args) => commands::transitions::execute(args, cli.json),
        Commands::Validate(args) => commands::validate::execute(args, cli.json),
        Commands::Parse(args) => commands::parse::execute(args, cli.json),
        Commands::Compose(args) => commands::compose::execute(args, cli.json),
    }
}

/// Report an error and exit with status 2.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let causes: Vec<String> = err.chain().skip(1).map(ToString::to_string).collect();
        let value = serde_json::json!({
            "success": false,
            "error": err.to_string(),
            "causes": causes,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&value).unwrap_or_default()
        );
    } else {
        eprintln!("{}", display::action_failure(&format!("{err:#}")));
    }
    std::process::exit(2);
}
