//! `prospectlens score` — Personalization score for a profile.

use super::Session;
use prospectlens_scoring::{MAX_SCORE, ScoreBreakdown, has_additional_context};
use std::path::Path;

pub async fn run(
    config_override: Option<&Path>,
    profile_path: &Path,
    toggles: &[String],
    value_prop: bool,
    context: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config_override)?;
    let mut session = Session::open(&config, profile_path).await?;
    session.apply_toggles(toggles)?;

    let breakdown = ScoreBreakdown::compute(
        &session.profile,
        session.state.selected_count(),
        value_prop,
        context.is_some_and(has_additional_context),
    );

    println!("📊 Personalization score: {}/{MAX_SCORE}\n", breakdown.total());
    println!("   Profile completeness: {:>2}/40", breakdown.completeness);
    println!(
        "   Selected insights:    {:>2}/30  ({} selected)",
        breakdown.insights,
        session.state.selected_count()
    );
    println!("   Value proposition:    {:>2}/15", breakdown.value_proposition);
    println!("   Additional context:   {:>2}/14", breakdown.additional_context);

    Ok(())
}
