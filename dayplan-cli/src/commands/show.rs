use anyhow::Result;
use dayplan_core::config::PlanConfig;
use dayplan_core::store::EventStore;
use dayplan_core::surface::display_entries;

use crate::grid;
use crate::month::Month;

/// Render the month grid once and exit.
pub fn run(month: Month) -> Result<()> {
    let config = PlanConfig::load()?;
    let store = if config.seed_samples {
        EventStore::with_samples()
    } else {
        EventStore::new()
    };

    let today = chrono::Local::now().date_naive();
    let entries = display_entries(store.entries());
    println!();
    println!("{}", grid::render(month, &entries, config.first_weekday, today));
    Ok(())
}
