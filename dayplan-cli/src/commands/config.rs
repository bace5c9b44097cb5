use anyhow::Result;
use dayplan_core::config::{FirstWeekday, PlanConfig};
use owo_colors::OwoColorize;

/// Show the current settings, applying any changes first.
pub fn run(
    seed_samples: Option<bool>,
    drag_edit: Option<bool>,
    first_weekday: Option<String>,
) -> Result<()> {
    let mut config = PlanConfig::load()?;

    let first_weekday = first_weekday.map(|s| parse_weekday(&s)).transpose()?;
    let changed = seed_samples.is_some() || drag_edit.is_some() || first_weekday.is_some();

    if let Some(value) = seed_samples {
        config.seed_samples = value;
    }
    if let Some(value) = drag_edit {
        config.drag_edit = value;
    }
    if let Some(value) = first_weekday {
        config.first_weekday = value;
    }
    if changed {
        config.save()?;
    }

    println!("{}", "Settings".bold());
    println!("  Config:          {}", PlanConfig::config_path()?.display());
    println!("  seed_samples:    {}", config.seed_samples);
    println!("  drag_edit:       {}", config.drag_edit);
    println!("  first_weekday:   {}", weekday_label(config.first_weekday));

    Ok(())
}

fn parse_weekday(s: &str) -> Result<FirstWeekday> {
    match s {
        "sunday" => Ok(FirstWeekday::Sunday),
        "monday" => Ok(FirstWeekday::Monday),
        other => anyhow::bail!("Invalid first weekday '{}'. Expected sunday or monday", other),
    }
}

fn weekday_label(weekday: FirstWeekday) -> &'static str {
    match weekday {
        FirstWeekday::Sunday => "sunday",
        FirstWeekday::Monday => "monday",
    }
}
