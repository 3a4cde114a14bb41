use std::path::Path;

use anyhow::Result;
use piiscan_config::{Config, ConfigSource};

pub fn handle(explicit: Option<&Path>) -> Result<()> {
    let (config, source) = Config::resolve(explicit)?;

    let kind = match source {
        ConfigSource::Explicit(_) => "explicit",
        ConfigSource::Project(_) => "project",
        ConfigSource::Global(_) => "global",
    };
    println!("# {} config: {}", kind, source.path().display());
    print!("{}", toml::to_string_pretty(&config)?);

    Ok(())
}
