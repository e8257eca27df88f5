//! lightbnb CLI - operator access to the LightBnB listing database
//!
//! Subcommands:
//! - `users` - look up users by email or id, create users
//! - `reservations` - list a guest's reservations with property details
//! - `properties` - filtered search (with `--explain` to print the SQL) and listing creation
//! - `completions` - shell completion scripts

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod config;
mod output;
mod tracing_setup;

use commands::CommandContext;
use config::LightbnbConfig;

#[derive(Parser, Debug)]
#[command(
    name = "lightbnb",
    author,
    version,
    about = "Query and manage LightBnB users, reservations, and property listings"
)]
struct Cli {
    /// Database URL (overrides config file)
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// Enable debug logging (shows generated SQL)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up or create users
    Users(commands::users::UsersArgs),
    /// List reservations for a guest
    Reservations(commands::reservations::ReservationsArgs),
    /// Search or create property listings
    Properties(commands::properties::PropertiesArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();
    config::load_dotenv()?;

    // .env files load after argument parsing, so check the environment again
    let ctx = CommandContext {
        config: LightbnbConfig::load(),
        database_url: cli
            .database_url
            .or_else(|| std::env::var("DATABASE_URL").ok()),
    };

    match cli.command {
        Commands::Users(args) => commands::run_users(args, &ctx).await?,
        Commands::Reservations(args) => commands::run_reservations(args, &ctx).await?,
        Commands::Properties(args) => commands::run_properties(args, &ctx).await?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
