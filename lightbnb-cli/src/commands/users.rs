//! User lookups and sign-up
//!
//! Examples:
//!   lightbnb users get --email tristanjacobs@gmail.com
//!   lightbnb users get --id 3 --json
//!   lightbnb users add --name "Eva Stanley" --email eva@example.com --password "$HASH"

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use lightbnb_db::{Email, NewUser, UserRepo};

use super::CommandContext;
use crate::output::{format_user, get_output_format, print_json, OutputFormat};

#[derive(Parser, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommands,
}

#[derive(Subcommand, Debug)]
pub enum UsersCommands {
    /// Look up a user by email or id
    Get(GetArgs),
    /// Create a user
    Add(AddArgs),
}

#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Look up by email (exact match)
    #[arg(long, conflicts_with = "id", required_unless_present = "id")]
    pub email: Option<String>,

    /// Look up by user id
    #[arg(long)]
    pub id: Option<i32>,

    /// Output format
    #[arg(long, short, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long, conflicts_with = "output")]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Email address (must be unique)
    #[arg(long)]
    pub email: String,

    /// Password as stored (hash it before passing it in)
    #[arg(long)]
    pub password: String,

    /// Output format
    #[arg(long, short, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long, conflicts_with = "output")]
    pub json: bool,
}

pub async fn run_users(args: UsersArgs, ctx: &CommandContext) -> Result<()> {
    match args.command {
        UsersCommands::Get(args) => run_get(args, ctx).await,
        UsersCommands::Add(args) => run_add(args, ctx).await,
    }
}

async fn run_get(args: GetArgs, ctx: &CommandContext) -> Result<()> {
    // Validate before connecting so bad input fails fast
    let email = args.email.as_deref().map(Email::new).transpose()?;

    let pool = ctx.connect().await?;
    let repo = UserRepo::new(&pool);

    let user = match (email, args.id) {
        (Some(email), _) => repo
            .find_by_email(&email)
            .await
            .context("Failed to look up user")?
            .ok_or_else(|| anyhow!("No user with email {}", email))?,
        (None, Some(id)) => repo.get(id).await?,
        (None, None) => return Err(anyhow!("Pass --email or --id")),
    };

    match get_output_format(args.output, args.json) {
        OutputFormat::Json => print_json(&user)?,
        OutputFormat::Human => println!("{}", format_user(&user)),
    }

    Ok(())
}

async fn run_add(args: AddArgs, ctx: &CommandContext) -> Result<()> {
    let new_user = NewUser::new(&args.name, Email::new(&args.email)?, &args.password)?;

    let pool = ctx.connect().await?;
    let user = UserRepo::new(&pool).create(new_user).await?;

    match get_output_format(args.output, args.json) {
        OutputFormat::Json => print_json(&user)?,
        OutputFormat::Human => println!("Created {}", format_user(&user)),
    }

    Ok(())
}
