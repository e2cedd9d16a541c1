use std::path::PathBuf;

use anyhow::{Context, Result};
use volcano_lens::load;

fn main() -> Result<()> {
    env_logger::init();

    let source: Option<PathBuf> = std::env::args().nth(1).map(PathBuf::from);
    let dataset = load(source.as_deref()).context("loading eruption dataset")?;

    println!("Eruption records:      {}", dataset.len());
    println!(
        "Erupted in the 1980s:  {}",
        dataset.erupted_between(1980, 1990)?.len()
    );
    println!(
        "VEI 6 or higher:       {}",
        dataset.names_with_min_vei(6).join(", ")
    );
    println!("Caused a tsunami:      {:.1}%", dataset.tsunami_percentage());
    println!(
        "Northern hemisphere:   {:.1}%",
        dataset.northern_hemisphere_percentage()
    );
    println!("Most common type:      {}", dataset.most_common_type()?);
    println!(
        "Distinct types:        {}",
        dataset.distinct_types().join(", ")
    );
    println!(
        "Average elevation:     {:.0} m",
        dataset.average_elevation()?
    );

    let deadliest = dataset.most_deadly()?;
    println!(
        "Deadliest eruption:    {} ({}, {} deaths)",
        deadliest.name,
        deadliest.country,
        deadliest.deaths.unwrap_or(0)
    );

    Ok(())
}
