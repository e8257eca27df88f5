//! Output formatting shared by the listing commands

use anyhow::{Context, Result};
use clap::ValueEnum;
use lightbnb_db::{GuestReservation, Property, PropertyListing, User};
use serde::Serialize;

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (for piping to jq)
    Json,
}

pub fn get_output_format(output: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        OutputFormat::Json
    } else {
        output
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", rendered);
    Ok(())
}

pub fn format_user(user: &User) -> String {
    format!("#{} {} <{}>", user.id, user.name, user.email)
}

fn format_rating(rating: Option<f64>) -> String {
    rating
        .map(|r| format!("{:.2}", r))
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_property(property: &Property) -> String {
    format!(
        "#{} {} ({}, {})\n    {}/night, {} bd, {} ba, {} parking",
        property.id,
        property.title,
        property.city,
        property.province,
        property.cost_per_night,
        property.number_of_bedrooms,
        property.number_of_bathrooms,
        property.parking_spaces,
    )
}

pub fn format_listing(listing: &PropertyListing) -> String {
    format!(
        "{}, rating {}",
        format_property(&listing.property),
        format_rating(listing.average_rating)
    )
}

pub fn format_reservation(reservation: &GuestReservation) -> String {
    format!(
        "reservation #{}: {} to {} ({} nights)\n  {}, rating {}",
        reservation.reservation_id,
        reservation.start_date,
        reservation.end_date,
        reservation.nights(),
        format_property(&reservation.property).replace('\n', "\n  "),
        format_rating(reservation.average_rating)
    )
}
