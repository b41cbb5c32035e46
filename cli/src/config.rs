// SPDX-FileCopyrightText: 2026 Luach contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

const CONFIG_ENV: &str = "LUACH_CONFIG";

/// Optional user defaults, merged under explicit command-line switches.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default city for candle-lighting and zmanim.
    pub city: Option<String>,
    /// Default output language.
    pub lang: Option<String>,
    /// Minutes before sundown for candle-lighting.
    #[serde(rename = "candle-mins")]
    pub candle_mins: Option<u32>,
    /// Minutes after sundown for Havdalah.
    #[serde(rename = "havdalah-mins")]
    pub havdalah_mins: Option<u32>,
}

impl Config {
    /// Loads the config from `path`, from `$LUACH_CONFIG`, or from the
    /// platform config directory; a missing default file is not an error.
    pub fn load(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
        let path = if let Some(path) = path {
            path
        } else if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            PathBuf::from(env_path)
        } else {
            let Some(dir) = default_config_dir() else {
                return Ok(Config::default());
            };
            let path = dir.join("luach/config.toml");
            if !path.exists() {
                return Ok(Config::default());
            }
            path
        };

        log::debug!("reading config from {}", path.display());
        std::fs::read_to_string(&path)
            .map_err(|e| format!("failed to read config at {}: {e}", path.display()))?
            .parse()
    }
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Config, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn default_config_dir() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parses_all_fields() {
        let config: Config = "\
city = \"Jerusalem\"
lang = \"he\"
candle-mins = 40
"
        .parse()
        .unwrap();
        assert_eq!(config.city.as_deref(), Some("Jerusalem"));
        assert_eq!(config.lang.as_deref(), Some("he"));
        assert_eq!(config.candle_mins, Some(40));
        assert_eq!(config.havdalah_mins, None);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!("tzatziki = 1".parse::<Config>().is_err());
    }

    #[test]
    fn explicit_path_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "city = \"Haifa\"\n").unwrap();
        let config = Config::load(Some(path)).unwrap();
        assert_eq!(config.city.as_deref(), Some("Haifa"));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load(Some(dir.path().join("nope.toml"))).is_err());
    }
}
