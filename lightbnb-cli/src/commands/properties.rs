//! Property search and listing creation
//!
//! Examples:
//!   lightbnb properties search --city Vancouver --min-rating 4
//!   lightbnb properties search --min-price 50 --max-price 150 --explain
//!   lightbnb properties add listing.json
//!   cat listing.json | lightbnb properties add -

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lightbnb_db::{property_search, BindValue, NewProperty, PropertyRepo, SearchFilter};
use serde_json::json;

use super::CommandContext;
use crate::output::{format_listing, format_property, get_output_format, print_json, OutputFormat};

#[derive(Parser, Debug)]
pub struct PropertiesArgs {
    #[command(subcommand)]
    pub command: PropertiesCommands,
}

#[derive(Subcommand, Debug)]
pub enum PropertiesCommands {
    /// Search listings, cheapest first, with average rating
    Search(SearchArgs),
    /// Create a listing from a JSON file ("-" reads stdin)
    Add(AddArgs),
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// City name substring (case-sensitive)
    #[arg(long)]
    pub city: Option<String>,

    /// Minimum nightly cost (inclusive)
    #[arg(long)]
    pub min_price: Option<BindValue>,

    /// Maximum nightly cost (inclusive)
    #[arg(long)]
    pub max_price: Option<BindValue>,

    /// Minimum average rating
    #[arg(long)]
    pub min_rating: Option<BindValue>,

    /// Max listings to return, at least 1 (default from config, 10)
    #[arg(long, short)]
    pub limit: Option<i64>,

    /// Print the SQL and parameters instead of running the search
    #[arg(long)]
    pub explain: bool,

    /// Output format
    #[arg(long, short, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long, conflicts_with = "output")]
    pub json: bool,
}

impl SearchArgs {
    fn filter(&self) -> SearchFilter {
        SearchFilter {
            city: self.city.clone().filter(|c| !c.trim().is_empty()),
            minimum_price_per_night: self.min_price.clone(),
            maximum_price_per_night: self.max_price.clone(),
            minimum_rating: self.min_rating.clone(),
        }
    }
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// JSON file with the listing fields ("-" for stdin)
    pub file: PathBuf,

    /// Output format
    #[arg(long, short, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long, conflicts_with = "output")]
    pub json: bool,
}

pub async fn run_properties(args: PropertiesArgs, ctx: &CommandContext) -> Result<()> {
    match args.command {
        PropertiesCommands::Search(args) => run_search(args, ctx).await,
        PropertiesCommands::Add(args) => run_add(args, ctx).await,
    }
}

async fn run_search(args: SearchArgs, ctx: &CommandContext) -> Result<()> {
    let filter = args.filter();
    let limit = ctx.config.limit(args.limit)?;
    let format = get_output_format(args.output, args.json);

    if args.explain {
        let plan = property_search(&filter, limit);
        match format {
            OutputFormat::Json => print_json(&json!({
                "sql": plan.sql(),
                "params": plan.params(),
            }))?,
            OutputFormat::Human => print!("{}", plan),
        }
        return Ok(());
    }

    let pool = ctx.connect().await?;
    let listings = PropertyRepo::new(&pool)
        .search(&filter, limit)
        .await
        .context("Property search failed")?;

    match format {
        OutputFormat::Json => print_json(&listings)?,
        OutputFormat::Human => {
            if listings.is_empty() {
                println!("No properties found");
            }
            for listing in &listings {
                println!("{}", format_listing(listing));
            }
        }
    }

    Ok(())
}

fn read_listing(file: &Path) -> Result<NewProperty> {
    let contents = if file.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read listing from stdin")?;
        buf
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?
    };

    serde_json::from_str(&contents).context("Invalid listing JSON")
}

async fn run_add(args: AddArgs, ctx: &CommandContext) -> Result<()> {
    let listing = read_listing(&args.file)?;
    listing.validate()?;

    let pool = ctx.connect().await?;
    let property = PropertyRepo::new(&pool).create(&listing).await?;

    match get_output_format(args.output, args.json) {
        OutputFormat::Json => print_json(&property)?,
        OutputFormat::Human => println!("Created {}", format_property(&property)),
    }

    Ok(())
}
