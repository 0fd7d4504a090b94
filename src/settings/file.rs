//! Settings file persistence.
//!
//! One line: `length,numeric_only,allow_numbers,allow_symbols,rng`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::Settings;
use crate::error::Result;
use crate::pass::MAX_LENGTH;

const FIELDS: usize = 5;

pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{}\n",
        settings.pass_length,
        settings.numeric_only,
        settings.allow_numbers,
        settings.allow_symbols,
        settings.rng,
    );

    file.write_all(data.as_bytes())?;
    log::debug!("saved settings to {}", path.display());
    Ok(())
}

pub fn load(settings: &mut Settings, path: &Path) -> Result<()> {
    if !path.exists() {
        log::debug!("no settings at {}, writing defaults", path.display());
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut line = String::new();
    BufReader::new(file).read_line(&mut line)?;

    let parts: Vec<&str> = line.trim().split(',').collect();
    if parts.len() != FIELDS {
        if !line.trim().is_empty() {
            log::warn!(
                "settings file {} has {} field(s), resetting to defaults",
                path.display(),
                parts.len()
            );
        }
        return save(settings, path);
    }

    let length = field(parts[0], "length", settings.pass_length);
    if length <= MAX_LENGTH {
        settings.pass_length = length;
    } else {
        log::warn!("ignoring length {length} in settings file, the limit is {MAX_LENGTH}");
    }
    settings.numeric_only = field(parts[1], "numeric_only", settings.numeric_only);
    settings.allow_numbers = field(parts[2], "allow_numbers", settings.allow_numbers);
    settings.allow_symbols = field(parts[3], "allow_symbols", settings.allow_symbols);
    settings.rng = field(parts[4], "rng", settings.rng);
    Ok(())
}

pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/pairpass/settings")
}

fn field<T: FromStr>(raw: &str, name: &str, fallback: T) -> T {
    raw.trim().parse().unwrap_or_else(|_| {
        log::warn!("ignoring invalid {name} '{raw}' in settings file");
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SourceKind;

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings");
        let saved = Settings {
            pass_length: 42,
            numeric_only: true,
            allow_numbers: false,
            allow_symbols: false,
            rng: SourceKind::Secure,
        };

        saved.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), saved);
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");

        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), "16,false,true,true,fast\n");
    }

    #[test]
    fn bad_fields_fall_back_individually() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "-4,true,maybe,false,quantum\n").unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.pass_length, 16);
        assert!(loaded.numeric_only);
        assert!(loaded.allow_numbers);
        assert!(!loaded.allow_symbols);
        assert_eq!(loaded.rng, SourceKind::Fast);
    }

    #[test]
    fn oversized_length_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "18446744073709551615,false,true,false,secure\n").unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.pass_length, 16);
        assert!(!loaded.allow_symbols);
        assert_eq!(loaded.rng, SourceKind::Secure);
    }

    #[test]
    fn wrong_field_count_resets_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "74,19,false\n").unwrap();

        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), "16,false,true,true,fast\n");
    }
}
