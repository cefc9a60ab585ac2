//! Environment-backed ranking configuration.
//!
//! Every setting has a default. Override with `RANKER_*` environment variables,
//! the CLI then overrides the environment.

pub mod error;


pub use error::ConfigError;

use std::env;

use crate::vectorizer::tfidf::TfScheme;

/// Settings for one ranking run.
///
/// Use [`RankerConfig::from_env`] to read `RANKER_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankerConfig {
    /// Term-frequency scheme. Default: raw counts.
    pub tf_scheme: TfScheme,

    /// Drop English stop words before building the vocabulary. Default: `true`.
    pub stop_words: bool,

    /// Tokens shorter than this many characters are dropped. Default: `1`,
    /// which keeps single-letter terms such as `c` or `r`. Set it to `2` to
    /// drop them the way a `\w\w+` token pattern does.
    pub min_token_len: usize,

    /// Decimal places used when persisting scores. Default: `4`.
    pub precision: usize,

    /// Use rayon for document analysis and similarity rows. Default: `true`.
    pub parallel: bool,
}

/// Upper bound for [`RankerConfig::precision`].
pub const MAX_PRECISION: usize = 12;

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            tf_scheme: TfScheme::Raw,
            stop_words: true,
            min_token_len: 1,
            precision: 4,
            parallel: true,
        }
    }
}

impl RankerConfig {
    const ENV_TF_SCHEME: &'static str = "RANKER_TF_SCHEME";
    const ENV_STOP_WORDS: &'static str = "RANKER_STOP_WORDS";
    const ENV_MIN_TOKEN_LEN: &'static str = "RANKER_MIN_TOKEN_LEN";
    const ENV_PRECISION: &'static str = "RANKER_SCORE_PRECISION";
    const ENV_PARALLEL: &'static str = "RANKER_PARALLEL";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let tf_scheme = match env::var(Self::ENV_TF_SCHEME) {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                name: Self::ENV_TF_SCHEME,
                value,
            })?,
            Err(_) => defaults.tf_scheme,
        };
        let stop_words = Self::parse_bool_from_env(Self::ENV_STOP_WORDS, defaults.stop_words)?;
        let min_token_len =
            Self::parse_usize_from_env(Self::ENV_MIN_TOKEN_LEN, defaults.min_token_len)?;
        let precision = Self::parse_usize_from_env(Self::ENV_PRECISION, defaults.precision)?;
        let parallel = Self::parse_bool_from_env(Self::ENV_PARALLEL, defaults.parallel)?;

        let config = Self {
            tf_scheme,
            stop_words,
            min_token_len,
            precision,
            parallel,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks numeric bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_token_len == 0 {
            return Err(ConfigError::OutOfRange {
                name: "min_token_len",
                value: self.min_token_len,
                min: 1,
                max: usize::MAX,
            });
        }
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::OutOfRange {
                name: "precision",
                value: self.precision,
                min: 0,
                max: MAX_PRECISION,
            });
        }
        Ok(())
    }

    fn parse_bool_from_env(name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(name) {
            Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue { name, value }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_usize_from_env(name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name, value }),
            Err(_) => Ok(default),
        }
    }
}
