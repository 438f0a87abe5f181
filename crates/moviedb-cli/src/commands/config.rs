use anyhow::Result;

use crate::config::{self, Config};

/// Show the effective configuration and where it came from.
pub fn show_config(config: &Config) -> Result<()> {
    let path = config::config_file_path();

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", path.display());
    println!(
        "File exists: {}\n",
        if path.exists() { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!("  database_path: {}", config.database_path.display());
    println!("  log_level: {}", config.log_level);

    println!("\nPriority: CLI args > ENV vars (MOVIEDB_*) > Config file > Defaults");
    Ok(())
}

pub fn show_path() -> Result<()> {
    println!("{}", config::config_file_path().display());
    Ok(())
}

pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Create the config file with commented defaults.
pub fn init_config() -> Result<()> {
    let path = config::config_file_path();

    if config::ensure_config_file(&path)? {
        println!("Created config file: {}", path.display());
    } else {
        println!("Config file already exists: {}", path.display());
    }
    Ok(())
}
