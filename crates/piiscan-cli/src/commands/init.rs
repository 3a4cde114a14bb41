use anyhow::Result;
use piiscan_config::{Config, PROJECT_FILE};

pub fn handle() -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let path = current_dir.join(PROJECT_FILE);

    if path.exists() {
        anyhow::bail!("{} already exists in current directory", PROJECT_FILE);
    }

    Config::default().save(&path)?;

    println!("✓ Created {}", PROJECT_FILE);
    println!("  Run 'piiscan scan <input.csv>' to produce a report");

    Ok(())
}
