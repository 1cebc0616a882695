//! # Settings
//!
//! Layered loading of the rate table.
//!
//! Sources, lowest priority first:
//!
//! 1. [`RateTable::default`]
//! 2. A TOML file: the path in `FREIGHT_CONFIG`, else `freight.toml` in the
//!    working directory (optional)
//! 3. Environment variables prefixed `FREIGHT`, nested with `__`
//!
//! ```text
//! FREIGHT__RATES__CURRENCY=USD
//! FREIGHT__RATES__TOLL_FLAT=30.00
//! FREIGHT__RATES__ZONE_RATES__REGIONAL=70.00
//! ```
//!
//! A file looks like:
//!
//! ```toml
//! [rates]
//! currency = "R$"
//! per_kg_rate = "8.50"
//! insurance_rate = "0.04"
//!
//! [rates.zone_rates]
//! local = "30.00"
//! ```
//!
//! Decimal values may be written as strings to keep them exact.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::value_objects::rate_table::RateTable;
use config::{Config, Environment, File, FileFormat, Map};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the settings file.
pub const CONFIG_PATH_ENV: &str = "FREIGHT_CONFIG";

/// File read when `FREIGHT_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "freight.toml";

/// Prefix of rate overrides in the environment.
pub const ENV_PREFIX: &str = "FREIGHT";

/// Nesting separator of rate overrides in the environment.
pub const ENV_SEPARATOR: &str = "__";

/// Process settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pricing constants.
    pub rates: RateTable,
}

impl Settings {
    /// Loads settings from the default file location and the environment.
    ///
    /// A missing default file is not an error; a missing file named by
    /// `FREIGHT_CONFIG` is.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if a source cannot be read
    /// or parsed, or if the rates are invalid.
    pub fn load() -> ApplicationResult<Self> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_sources(Some(PathBuf::from(path).as_path())),
            None => Self::build(Some((Path::new(DEFAULT_CONFIG_FILE), false)), None),
        }
    }

    /// Loads settings from an optional file plus the environment.
    ///
    /// `file`, when given, must exist.
    ///
    /// # Errors
    ///
    /// Same as [`Settings::load`].
    pub fn from_sources(file: Option<&Path>) -> ApplicationResult<Self> {
        Self::build(file.map(|path| (path, true)), None)
    }

    /// Builds settings from a file and an environment map. `env` of `None`
    /// reads the process environment.
    fn build(
        file: Option<(&Path, bool)>,
        env: Option<Map<String, String>>,
    ) -> ApplicationResult<Self> {
        let mut builder = Config::builder();

        if let Some((path, required)) = file {
            tracing::debug!(path = %path.display(), required, "reading settings file");
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .source(env),
        );

        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validate()?;
        tracing::debug!(currency = %settings.rates.currency, "settings loaded");
        Ok(settings)
    }

    /// Validates the rate table.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` naming the offending field.
    pub fn validate(&self) -> ApplicationResult<()> {
        self.rates
            .validate()
            .map_err(|err| ApplicationError::configuration(err.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn env(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn defaults_without_sources() {
        let settings = Settings::build(None, env(&[])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn file_overrides_defaults() {
        let file = toml_file(
            r#"
            [rates]
            currency = "USD"
            toll_flat = "30.00"

            [rates.zone_rates]
            regional = "70.00"
            "#,
        );
        let settings = Settings::build(Some((file.path(), true)), env(&[])).unwrap();
        assert_eq!(settings.rates.currency, "USD");
        assert_eq!(settings.rates.toll_flat, dec!(30.00));
        assert_eq!(settings.rates.zone_rates.regional, dec!(70.00));
        assert_eq!(settings.rates.zone_rates.local, dec!(30.00));
        assert_eq!(settings.rates.per_kg_rate, dec!(8.50));
    }

    #[test]
    fn float_values_are_accepted() {
        let file = toml_file("[rates]\nexpress_multiplier = 3.0\n");
        let settings = Settings::build(Some((file.path(), true)), env(&[])).unwrap();
        assert_eq!(settings.rates.express_multiplier, dec!(3));
    }

    #[test]
    fn environment_overrides_file() {
        let file = toml_file("[rates]\ntoll_flat = \"30.00\"\n");
        let settings = Settings::build(
            Some((file.path(), true)),
            env(&[
                ("FREIGHT__RATES__TOLL_FLAT", "12.50"),
                ("FREIGHT__RATES__ZONE_RATES__LOCAL", "35.00"),
            ]),
        )
        .unwrap();
        assert_eq!(settings.rates.toll_flat, dec!(12.50));
        assert_eq!(settings.rates.zone_rates.local, dec!(35.00));
    }

    #[test]
    fn unprefixed_environment_is_ignored() {
        let settings =
            Settings::build(None, env(&[("RATES__TOLL_FLAT", "1.00")])).unwrap();
        assert_eq!(settings.rates.toll_flat, dec!(27.50));
    }

    #[test]
    fn missing_required_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = Settings::build(Some((path.as_path(), true)), env(&[])).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn missing_optional_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let settings = Settings::build(Some((path.as_path(), false)), env(&[])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn malformed_value_is_configuration_error() {
        let file = toml_file("[rates]\nper_kg_rate = \"eight\"\n");
        let err = Settings::build(Some((file.path(), true)), env(&[])).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn invalid_rate_is_rejected() {
        let file = toml_file("[rates]\ninsurance_rate = \"-0.10\"\n");
        let err = Settings::build(Some((file.path(), true)), env(&[])).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("insurance_rate"));
    }
}
