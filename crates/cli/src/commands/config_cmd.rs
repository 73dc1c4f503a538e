//! `prospectlens config` — Configuration management commands.

use std::path::Path;

pub async fn validate(config_override: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating configuration...");

    match super::load_config(config_override) {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");

            let mut warnings = Vec::new();

            let unknown: Vec<&String> = config
                .focus
                .default_tags
                .iter()
                .filter(|t| {
                    matches!(
                        prospectlens_focus::FocusTag::parse(t),
                        prospectlens_focus::FocusTag::Unknown(_)
                    )
                })
                .collect();
            if !unknown.is_empty() {
                warnings.push(format!("Unrecognized focus tags will match nothing: {unknown:?}"));
            }

            let defaults = config.category_defaults()?;
            if prospectlens_core::Category::ALL
                .iter()
                .all(|c| !defaults.is_selected(*c))
            {
                warnings.push("No category is selected by default".to_string());
            }

            if warnings.is_empty() {
                println!("   ✅ All checks passed");
            } else {
                println!();
                for w in &warnings {
                    println!("   ⚠️  {w}");
                }
            }

            println!();
            println!("   Display limit: {}", config.extraction.display_limit);
            println!("   Focus:         {}", config.focus.default_tags.join(","));
            println!(
                "   Compose:       {} / {} / {}",
                config.compose.content_type,
                config.compose.writing_style,
                config.compose.message_length
            );
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

pub async fn show(config_override: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config =
        super::load_config(config_override).map_err(|e| format!("Failed to load config: {e}"))?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

pub async fn path(config_override: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", super::config_file(config_override).display());
    Ok(())
}
