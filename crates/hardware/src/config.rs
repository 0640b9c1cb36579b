//! Configuration system for the prefetcher simulator.
//!
//! This module defines all configuration structures and enums used to parameterize
//! a simulation. It provides:
//! 1. **Defaults:** Baseline predictor parameters and the default access-pattern suite.
//! 2. **Structures:** Hierarchical config for the transition-table predictor and the run suite.
//! 3. **Enums:** Prefetcher kinds and synthetic access-pattern descriptions.
//!
//! Configuration is supplied as JSON (`Config::from_file`, `Config::from_json_str`)
//! or use `Config::default()` for the built-in suite.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::{Address, ConfigError};

/// Default configuration constants for the simulator.
///
/// These values define the baseline configuration when not explicitly
/// overridden in a JSON configuration file.
mod defaults {
    /// Number of entries held by the access-history window.
    ///
    /// Prefetches that are not confirmed within this many window insertions
    /// are evicted unused.
    pub const HISTORY_WINDOW_SIZE: usize = 5;

    /// Seed used by random access patterns that do not carry their own.
    pub const RANDOM_SEED: u64 = 42;

    /// Length of the generated patterns in the default suite.
    pub const PATTERN_LENGTH: usize = 10;

    /// Stride of the strided pattern in the default suite.
    pub const PATTERN_STRIDE: u64 = 2;

    /// Number of repetitions of the repeated pattern in the default suite.
    pub const PATTERN_REPETITIONS: usize = 2;

    /// Label given to custom patterns that do not name themselves.
    pub const CUSTOM_LABEL: &str = "Custom";
}

/// Prefetcher model types.
///
/// Specifies which predictive model observes the access stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum PrefetcherKind {
    /// First-order Markov (transition-table) predictor.
    ///
    /// Learns successor frequencies per address and prefetches the most
    /// frequent successor of the current address.
    #[default]
    #[serde(alias = "markov", alias = "TransitionTable")]
    Markov,
    /// Stride predictor.
    ///
    /// Remembers the last observed stride and prefetches
    /// `address + last_stride`.
    #[serde(alias = "stride")]
    Stride,
}

impl PrefetcherKind {
    /// Every supported prefetcher kind, in report order.
    pub const ALL: [Self; 2] = [Self::Markov, Self::Stride];

    /// Returns the display name used in logs and reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Markov => "Markov",
            Self::Stride => "Stride",
        }
    }
}

/// Synthetic access-pattern descriptions.
///
/// Each variant names one address-sequence generator and its parameters.
/// Sequences are materialized with `AccessPattern::generate`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "PascalCase")]
pub enum AccessPattern {
    /// Ascending addresses `0..length`.
    Sequential {
        /// Number of addresses to generate.
        length: usize,
    },
    /// Addresses `start + i * stride` for `i` in `0..length`.
    Strided {
        /// First address.
        start: u64,
        /// Distance between consecutive addresses.
        stride: u64,
        /// Number of addresses to generate.
        length: usize,
    },
    /// Adjacent address pairs `2j, 2j + 1` for `j` in `0..length / 2`.
    Interleaved {
        /// Requested length; odd lengths drop the final element.
        length: usize,
    },
    /// Uniformly random addresses in `[0, length)`.
    Random {
        /// Number of addresses to generate.
        length: usize,
        /// Seed for this pattern; falls back to the simulation seed.
        #[serde(default)]
        seed: Option<u64>,
    },
    /// A base pattern repeated back to back.
    Repeated {
        /// The base pattern.
        pattern: Vec<Address>,
        /// Number of copies.
        repetitions: usize,
    },
    /// A literal address list.
    Custom {
        /// Report label.
        #[serde(default = "AccessPattern::default_label")]
        label: String,
        /// The addresses, in access order.
        addresses: Vec<Address>,
    },
}

impl AccessPattern {
    /// Returns the default label for custom patterns.
    fn default_label() -> String {
        defaults::CUSTOM_LABEL.to_string()
    }

    /// Returns the label used for this pattern in logs and reports.
    pub fn name(&self) -> &str {
        match self {
            Self::Sequential { .. } => "Sequential",
            Self::Strided { .. } => "Strided",
            Self::Interleaved { .. } => "Interleaved",
            Self::Random { .. } => "Random",
            Self::Repeated { .. } => "Repeated",
            Self::Custom { label, .. } => label,
        }
    }
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use pfsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.markov.history_window_size, 5);
/// assert_eq!(config.simulation.patterns.len(), 6);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use pfsim_core::config::{AccessPattern, Config, PrefetcherKind};
///
/// let json = r#"{
///     "prefetchers": ["Stride"],
///     "markov": { "num_addresses": 64, "history_window_size": 8 },
///     "simulation": {
///         "seed": 7,
///         "patterns": [
///             { "kind": "Strided", "start": 0, "stride": 4, "length": 16 },
///             { "kind": "Random", "length": 32 }
///         ]
///     }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.prefetchers, vec![PrefetcherKind::Stride]);
/// assert_eq!(config.markov.num_addresses, Some(64));
/// assert!(matches!(
///     config.simulation.patterns[1],
///     AccessPattern::Random { length: 32, seed: None }
/// ));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Prefetcher kinds to evaluate on every pattern.
    #[serde(default = "Config::default_prefetchers")]
    pub prefetchers: Vec<PrefetcherKind>,
    /// Transition-table predictor settings.
    #[serde(default)]
    pub markov: MarkovConfig,
    /// Pattern suite and seed.
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl Default for Config {
    /// Evaluates every prefetcher kind on the default pattern suite.
    fn default() -> Self {
        Self {
            prefetchers: Self::default_prefetchers(),
            markov: MarkovConfig::default(),
            simulation: SimulationConfig::default(),
        }
    }
}

impl Config {
    /// Returns the default prefetcher list (every kind).
    fn default_prefetchers() -> Vec<PrefetcherKind> {
        PrefetcherKind::ALL.to_vec()
    }

    /// Parses a configuration from JSON text.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a valid configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are not a valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// Transition-table (Markov) predictor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MarkovConfig {
    /// Exclusive upper bound on accepted addresses.
    ///
    /// `None` accepts any address; the table itself is always sparse.
    #[serde(default)]
    pub num_addresses: Option<usize>,

    /// Capacity of the access-history window.
    #[serde(default = "MarkovConfig::default_history_window_size")]
    pub history_window_size: usize,
}

impl Default for MarkovConfig {
    /// Unbounded address space with the default window.
    fn default() -> Self {
        Self {
            num_addresses: None,
            history_window_size: defaults::HISTORY_WINDOW_SIZE,
        }
    }
}

impl MarkovConfig {
    /// Returns the default access-history window capacity.
    const fn default_history_window_size() -> usize {
        defaults::HISTORY_WINDOW_SIZE
    }
}

/// Pattern suite configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Seed for random patterns that do not carry their own.
    #[serde(default = "SimulationConfig::default_seed")]
    pub seed: u64,

    /// Patterns to run, in report order.
    #[serde(default = "SimulationConfig::default_patterns")]
    pub patterns: Vec<AccessPattern>,
}

impl Default for SimulationConfig {
    /// The default seed and pattern suite.
    fn default() -> Self {
        Self {
            seed: defaults::RANDOM_SEED,
            patterns: Self::default_patterns(),
        }
    }
}

impl SimulationConfig {
    /// Returns the default random seed.
    const fn default_seed() -> u64 {
        defaults::RANDOM_SEED
    }

    /// Returns the default pattern suite.
    ///
    /// Sequential, strided, interleaved, and random patterns of length 10,
    /// followed by `0..6` repeated twice and the same list given literally.
    fn default_patterns() -> Vec<AccessPattern> {
        let base: Vec<Address> = (0..6).map(Address).collect();
        let mut custom = base.clone();
        custom.extend_from_slice(&base);
        vec![
            AccessPattern::Sequential {
                length: defaults::PATTERN_LENGTH,
            },
            AccessPattern::Strided {
                start: 0,
                stride: defaults::PATTERN_STRIDE,
                length: defaults::PATTERN_LENGTH,
            },
            AccessPattern::Interleaved {
                length: defaults::PATTERN_LENGTH,
            },
            AccessPattern::Random {
                length: defaults::PATTERN_LENGTH,
                seed: None,
            },
            AccessPattern::Repeated {
                pattern: base,
                repetitions: defaults::PATTERN_REPETITIONS,
            },
            AccessPattern::Custom {
                label: defaults::CUSTOM_LABEL.to_string(),
                addresses: custom,
            },
        ]
    }
}
