//! Guest reservation listing

use anyhow::Result;
use clap::Parser;
use lightbnb_db::ReservationRepo;

use super::CommandContext;
use crate::output::{format_reservation, get_output_format, print_json, OutputFormat};

#[derive(Parser, Debug)]
pub struct ReservationsArgs {
    /// Guest (user) id
    #[arg(long)]
    pub guest_id: i32,

    /// Max reservations to return, at least 1 (default from config, 10)
    #[arg(long, short)]
    pub limit: Option<i64>,

    /// Output format
    #[arg(long, short, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long, conflicts_with = "output")]
    pub json: bool,
}

pub async fn run_reservations(args: ReservationsArgs, ctx: &CommandContext) -> Result<()> {
    let limit = ctx.config.limit(args.limit)?;
    let pool = ctx.connect().await?;

    let reservations = ReservationRepo::new(&pool)
        .list_for_guest(args.guest_id, limit)
        .await?;

    match get_output_format(args.output, args.json) {
        OutputFormat::Json => print_json(&reservations)?,
        OutputFormat::Human => {
            if reservations.is_empty() {
                println!("No reservations for guest {}", args.guest_id);
            }
            for reservation in &reservations {
                println!("{}", format_reservation(reservation));
            }
        }
    }

    Ok(())
}
