//! Init command implementation

use anyhow::{bail, Result};
use std::path::Path;
use tracing::info;

use streakboard::config::Config;

/// Comment block written above the default settings by `init`
pub const CONFIG_HEADER: &str = r##"# streakboard configuration
# ==========================
#
# Available options:
#   normalize_completed_days - Sort and de-duplicate completed days when loading
#                              a snapshot; when false, unsorted or duplicated
#                              lists are rejected (default: true)
#   podium_size              - Places shown once a challenge is completed (default: 3)
#   show_timeline            - Print each participant's day-by-day timeline (default: true)
#   streak_glyph             - Glyph for a completed day in printed timelines (default: "#")

"##;

/// Write the default config file
pub fn init_command(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::default().save_to_file_with_header(config_path, CONFIG_HEADER)?;
    info!("Created {}", config_path.display());
    println!("Created: {}", config_path.display());

    Ok(())
}
