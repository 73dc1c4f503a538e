//! `prospectlens extract` — List the insights found in a profile.

use super::Session;
use std::path::Path;

pub async fn run(
    config_override: Option<&Path>,
    profile_path: &Path,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config_override)?;
    let session = Session::open(&config, profile_path).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&session.extraction)?);
        return Ok(());
    }

    let name = session.profile.name.as_deref().unwrap_or("Unnamed profile");
    println!(
        "🔎 {name}: {} insights, {} selected\n",
        session.state.len(),
        session.state.selected_count()
    );

    if session.state.is_empty() {
        println!("No insights found. Is this a profile record?");
        return Ok(());
    }

    for (category, insights) in session.state.by_category() {
        println!("{} {category}", category.icon());
        for insight in insights {
            let mark = if insight.selected { "[x]" } else { "[ ]" };
            println!("  {mark} {:<11} {}", insight.id.to_string(), insight.title);
            println!("      {}", insight.content);
        }
        println!();
    }

    if !session.extraction.excess.is_empty() {
        println!("Not shown:");
        for (field, count) in &session.extraction.excess {
            println!("  {field}: {count} more");
        }
    }

    Ok(())
}
