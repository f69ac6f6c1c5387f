//! Tunable parameters of the [`Matcher`](crate::Matcher).

use crate::geo::DEFAULT_METERS_PER_DEGREE;
use crate::transition::{DEFAULT_EMISSION_SIGMA, DEFAULT_SEARCH_CUTOFF, DEFAULT_TRANSITION_BETA};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 50 meters, the radius within which candidates are searched for.
pub const DEFAULT_SEARCH_RADIUS: f64 = 50.0;

pub const ENV_EMISSION_SIGMA: &str = "MATCHER_EMISSION_SIGMA";
pub const ENV_TRANSITION_BETA: &str = "MATCHER_TRANSITION_BETA";
pub const ENV_SEARCH_RADIUS: &str = "MATCHER_SEARCH_RADIUS";
pub const ENV_METERS_PER_DEGREE: &str = "MATCHER_METERS_PER_DEGREE";
pub const ENV_SEARCH_CUTOFF: &str = "MATCHER_SEARCH_CUTOFF";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("`{field}` must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("environment variable `{key}` is not a number: {value:?}")]
    InvalidEnv { key: &'static str, value: String },
}

/// Parameters of the probability model, the candidate search and the router.
///
/// Every field has a default, so partial documents deserialize cleanly.
///
/// ```rust
/// use snapline::MatcherConfig;
///
/// let config = MatcherConfig::default()
///     .with_search_radius(30.0)
///     .with_search_cutoff(1_000.0);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.emission_sigma, 4.07);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Standard deviation of GPS noise, in meters.
    pub emission_sigma: f64,

    /// Scale of the route discrepancy distribution, in meters.
    pub transition_beta: f64,

    /// Candidate search radius around each input point, in meters.
    pub search_radius: f64,

    /// Conversion from planar degree-space distance to meters.
    pub meters_per_degree: f64,

    /// Upper bound of every shortest-path search, in meters.
    pub search_cutoff: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            emission_sigma: DEFAULT_EMISSION_SIGMA,
            transition_beta: DEFAULT_TRANSITION_BETA,
            search_radius: DEFAULT_SEARCH_RADIUS,
            meters_per_degree: DEFAULT_METERS_PER_DEGREE,
            search_cutoff: DEFAULT_SEARCH_CUTOFF,
        }
    }
}

impl MatcherConfig {
    pub fn with_emission_sigma(self, emission_sigma: f64) -> Self {
        Self {
            emission_sigma,
            ..self
        }
    }

    pub fn with_transition_beta(self, transition_beta: f64) -> Self {
        Self {
            transition_beta,
            ..self
        }
    }

    pub fn with_search_radius(self, search_radius: f64) -> Self {
        Self {
            search_radius,
            ..self
        }
    }

    pub fn with_meters_per_degree(self, meters_per_degree: f64) -> Self {
        Self {
            meters_per_degree,
            ..self
        }
    }

    pub fn with_search_cutoff(self, search_cutoff: f64) -> Self {
        Self {
            search_cutoff,
            ..self
        }
    }

    /// Every parameter must be a positive, finite number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        [
            ("emission_sigma", self.emission_sigma),
            ("transition_beta", self.transition_beta),
            ("search_radius", self.search_radius),
            ("meters_per_degree", self.meters_per_degree),
            ("search_cutoff", self.search_cutoff),
        ]
        .into_iter()
        .find(|(_, value)| !(value.is_finite() && *value > 0.0))
        .map_or(Ok(()), |(field, value)| {
            Err(ConfigError::NotPositive { field, value })
        })
    }

    /// Loads a `.env` file if one is present, then reads overrides from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(err) = dotenv::dotenv() {
            debug!("No .env file loaded: {err}");
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Overrides the defaults with any values `lookup` returns for the `MATCHER_*` keys.
    /// The result is not validated.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let read = |key: &'static str, default: f64| -> Result<f64, ConfigError> {
            match lookup(key) {
                Some(value) => value
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| ConfigError::InvalidEnv { key, value }),
                None => Ok(default),
            }
        };

        let defaults = Self::default();
        Ok(Self {
            emission_sigma: read(ENV_EMISSION_SIGMA, defaults.emission_sigma)?,
            transition_beta: read(ENV_TRANSITION_BETA, defaults.transition_beta)?,
            search_radius: read(ENV_SEARCH_RADIUS, defaults.search_radius)?,
            meters_per_degree: read(ENV_METERS_PER_DEGREE, defaults.meters_per_degree)?,
            search_cutoff: read(ENV_SEARCH_CUTOFF, defaults.search_cutoff)?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = MatcherConfig::default();

        assert_eq!(config.emission_sigma, 4.07);
        assert_eq!(config.transition_beta, 10.0);
        assert_eq!(config.search_radius, 50.0);
        assert_eq!(config.meters_per_degree, 111_000.0);
        assert_eq!(config.search_cutoff, 2_000.0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_parameters() {
        let config = MatcherConfig::default().with_transition_beta(0.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "transition_beta",
                value: 0.0
            })
        );

        let config = MatcherConfig::default().with_search_radius(f64::INFINITY);
        assert!(config.validate().is_err());

        let config = MatcherConfig::default().with_emission_sigma(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn lookup_overrides_defaults() {
        let config = MatcherConfig::from_lookup(|key| match key {
            ENV_SEARCH_RADIUS => Some("25".to_string()),
            ENV_SEARCH_CUTOFF => Some(" 500.5 ".to_string()),
            _ => None,
        })
        .expect("values parse");

        assert_eq!(config.search_radius, 25.0);
        assert_eq!(config.search_cutoff, 500.5);
        assert_eq!(config.emission_sigma, MatcherConfig::default().emission_sigma);
    }

    #[test]
    fn lookup_rejects_unparsable_values() {
        let result = MatcherConfig::from_lookup(|key| {
            (key == ENV_TRANSITION_BETA).then(|| "ten".to_string())
        });

        assert_eq!(
            result,
            Err(ConfigError::InvalidEnv {
                key: ENV_TRANSITION_BETA,
                value: "ten".to_string()
            })
        );
    }
}
