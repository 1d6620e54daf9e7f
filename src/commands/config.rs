use anyhow::Result;
use icsify_core::config::{IcsifyConfig, is_known_timezone};
use owo_colors::OwoColorize;

pub fn run(set_timezone: Option<String>) -> Result<()> {
    let config_path = IcsifyConfig::config_path()?;
    let mut config = IcsifyConfig::load()?;

    if let Some(tz) = set_timezone {
        if !is_known_timezone(&tz) {
            eprintln!(
                "{}",
                format!("  Warning: '{}' is not a known IANA timezone", tz).yellow()
            );
        }
        config.default_timezone = Some(tz.clone());
        config.save()?;
        println!("{}", format!("  Default timezone set to {}", tz).green());
        return Ok(());
    }

    let source = if config.default_timezone.is_some() {
        "config"
    } else {
        "system"
    };

    println!("{}", "Paths".bold());
    println!("  Config:    {}", config_path.display());
    println!();
    println!("{}", "Settings".bold());
    println!(
        "  Timezone:  {} {}",
        config.timezone(),
        format!("({})", source).dimmed()
    );
    println!("  Server:    http://{}", config.server.bind_addr());

    Ok(())
}
