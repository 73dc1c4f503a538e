//! `prospectlens value-props` — List a value-proposition catalog.

use prospectlens_compose::{ValuePropositionGroup, dedupe_by_name};
use std::path::Path;

pub async fn run(catalog: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let groups: Vec<ValuePropositionGroup> =
        serde_json::from_value(super::read_json(catalog).await?)?;
    let groups = dedupe_by_name(groups);

    if groups.is_empty() {
        println!("No value propositions in {}", catalog.display());
        return Ok(());
    }

    println!("💡 Value propositions ({}):\n", groups.len());
    for (i, group) in groups.iter().enumerate() {
        let leader = if group.is_leader_configured() { " (leader)" } else { "" };
        println!("  {}. {}{leader}", i + 1, group.name);
        for prop in &group.value_props {
            println!("     - {prop}");
        }
    }

    Ok(())
}
