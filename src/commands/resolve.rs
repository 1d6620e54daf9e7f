use anyhow::Result;
use chrono::NaiveDate;
use icsify_core::resolve;
use icsify_core::time::parse_date;

use crate::render::Render;

pub fn run(date: &str, time: &str, json: bool) -> Result<()> {
    let date = parse_date_arg(date)?;
    let interval = resolve(date, time)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&interval)?);
    } else {
        println!("{}", interval.render());
    }

    Ok(())
}

/// Parse `YYYY-MM-DD`, falling back to natural language ("tomorrow",
/// "next friday").
fn parse_date_arg(input: &str) -> Result<NaiveDate> {
    if let Ok(date) = parse_date(input) {
        return Ok(date);
    }

    let lowered = input.trim().to_lowercase();
    let dt = fuzzydate::parse(&lowered)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;

    Ok(dt.date())
}
