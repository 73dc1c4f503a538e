//! `prospectlens onboard` — First-time setup.

use prospectlens_config::AppConfig;
use std::path::Path;

pub async fn run(config_override: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = super::config_file(config_override);

    println!("🔎 ProspectLens — First-Time Setup");
    println!("==================================\n");

    if let Some(config_dir) = config_path.parent() {
        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            tokio::fs::create_dir_all(config_dir).await?;
            println!("✅ Created config directory: {}", config_dir.display());
        } else {
            println!("  Config directory exists: {}", config_dir.display());
        }
    }

    if config_path.exists() {
        println!("\n⚠️  Config already exists at: {}", config_path.display());
        println!("   Edit it manually or delete and re-run onboard.\n");
    } else {
        tokio::fs::write(&config_path, AppConfig::default_toml()).await?;
        println!("✅ Created config.toml at: {}", config_path.display());
        println!("\n📝 Next steps:");
        println!("   1. Adjust [selection.default_selected] and [focus] to taste");
        println!("   2. Run: prospectlens extract profile.json");
        println!("   3. Run: prospectlens compose profile.json\n");
    }

    println!("🎉 Setup complete!\n");

    Ok(())
}
