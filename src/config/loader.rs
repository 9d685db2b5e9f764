use super::types::RateConfig;
use std::fs;
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load rate overrides from a TOML file.
    ///
    /// Fields missing from the file keep their default values; the merged
    /// result is validated before being returned.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<RateConfig, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let rates: RateConfig = toml::from_str(&content)?;
        rates.validate()?;
        Ok(rates)
    }

    /// Load rates from an optional path, falling back to the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> RateConfig {
        match path {
            Some(path) => Self::load_from_path(path).unwrap_or_else(|e| {
                eprintln!("Warning: failed to load rate config: {}", e);
                RateConfig::default()
            }),
            None => RateConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_path_merges_overrides() {
        let path = std::env::temp_dir().join("stayfee_rates_override.toml");
        fs::write(&path, "extension_unit_fee_excl = 120\nnight_rate = 0.2\n").unwrap();

        let rates = ConfigLoader::load_from_path(&path).unwrap();
        assert_eq!(rates.extension_unit_fee_excl, 120);
        assert_eq!(rates.night_rate, 0.2);
        assert_eq!(rates.extension_unit_seconds, 600);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_from_path_rejects_invalid_rates() {
        let path = std::env::temp_dir().join("stayfee_rates_invalid.toml");
        fs::write(&path, "extension_unit_seconds = -600\n").unwrap();

        assert!(ConfigLoader::load_from_path(&path).is_err());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_or_default_without_path() {
        let rates = ConfigLoader::load_or_default::<&Path>(None);
        assert_eq!(rates, RateConfig::default());
    }
}
