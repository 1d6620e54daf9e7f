use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use icsify_core::config::{IcsifyConfig, is_known_timezone};
use icsify_core::{EventBatch, IcsDocument, serialize};
use owo_colors::OwoColorize;
use tracing::warn;

use crate::render::{Render, pluralize};

pub fn run(
    input: Option<PathBuf>,
    timezone: Option<String>,
    output: Option<PathBuf>,
    preview: bool,
) -> Result<()> {
    let json = read_input(input.as_deref())?;
    let batch = EventBatch::from_json(&json)?;

    let timezone = match timezone {
        Some(tz) => tz,
        None => IcsifyConfig::load()?.timezone(),
    };
    if !is_known_timezone(&timezone) {
        warn!(timezone = %timezone, "Unknown timezone, writing it as given");
    }

    let document = serialize(&batch.events, &timezone)?;

    if preview {
        print!("{}", document.preview());
        return Ok(());
    }

    let path = output_path(output);
    std::fs::write(&path, document.as_bytes())
        .with_context(|| format!("Could not write {}", path.display()))?;

    for event in &batch.events {
        println!("  {}", event.render());
    }
    println!();

    let count = document.event_count();
    println!(
        "{}",
        format!(
            "  Saved {} {} to {} ({})",
            count,
            pluralize("event", count),
            path.display(),
            timezone
        )
        .green()
    );

    Ok(())
}

/// Read the event JSON from a file, or from stdin for `None` / `-`.
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display())),
        _ => {
            let mut json = String::new();
            std::io::stdin()
                .read_to_string(&mut json)
                .context("Could not read events from stdin")?;
            Ok(json)
        }
    }
}

/// Default to events.ics and add the .ics extension when missing.
fn output_path(output: Option<PathBuf>) -> PathBuf {
    let mut path = output.unwrap_or_else(|| PathBuf::from(IcsDocument::DEFAULT_FILENAME));
    if path.extension().is_none() {
        path.set_extension(IcsDocument::FILE_EXTENSION);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_defaults() {
        assert_eq!(output_path(None), PathBuf::from("events.ics"));
        assert_eq!(
            output_path(Some(PathBuf::from("out/skydeck"))),
            PathBuf::from("out/skydeck.ics")
        );
        assert_eq!(
            output_path(Some(PathBuf::from("week.ical"))),
            PathBuf::from("week.ical")
        );
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, "[]").unwrap();

        assert_eq!(read_input(Some(path.as_path())).unwrap(), "[]");
        assert!(read_input(Some(dir.path().join("missing.json").as_path())).is_err());
    }
}
