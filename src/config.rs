//! TOML-based quote configuration and preset definitions.
//!
//! Quote files carry the four user-supplied inputs. Every field is
//! optional at the file level so a missing value is detected and
//! reported instead of silently defaulted; [`QuoteConfig::resolve`]
//! performs the completeness gate before any computation runs.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::billing::{ConnectionType, QuoteInput};

/// Top-level quote configuration parsed from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuoteConfig {
    /// User-supplied quote inputs.
    #[serde(default)]
    pub quote: QuoteFields,
}

/// The four quote inputs, each optional until resolved.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuoteFields {
    /// Monthly average energy consumption (kWh).
    pub average_consumption_kwh: Option<f64>,
    /// Fixed monthly municipal public-lighting charge.
    pub public_lighting_fee: Option<f64>,
    /// Connection type: `"single-phase"` or `"three-phase"`.
    pub connection_type: Option<ConnectionType>,
    /// Discount percentage contracted with the solar provider.
    pub contracted_discount_pct: Option<f64>,
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"quote.average_consumption_kwh"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl QuoteConfig {
    /// Returns the example quote matching the reference household
    /// (480 kWh, three-phase, 15% contracted discount).
    pub fn example() -> Self {
        Self {
            quote: QuoteFields {
                average_consumption_kwh: Some(480.0),
                public_lighting_fee: Some(48.0),
                connection_type: Some(ConnectionType::ThreePhase),
                contracted_discount_pct: Some(15.0),
            },
        }
    }

    /// Returns the small-home preset: single-phase, modest consumption.
    pub fn small_home() -> Self {
        Self {
            quote: QuoteFields {
                average_consumption_kwh: Some(180.0),
                public_lighting_fee: Some(15.5),
                connection_type: Some(ConnectionType::SinglePhase),
                contracted_discount_pct: Some(20.0),
            },
        }
    }

    /// Returns the full-discount preset: 100% contracted discount, so the
    /// solar invoice collapses to zero and only utility fees remain.
    pub fn full_discount() -> Self {
        Self {
            quote: QuoteFields {
                average_consumption_kwh: Some(480.0),
                public_lighting_fee: Some(48.0),
                connection_type: Some(ConnectionType::ThreePhase),
                contracted_discount_pct: Some(100.0),
            },
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["example", "small_home", "full_discount"];

    /// Loads a quote from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "example" => Ok(Self::example()),
            "small_home" => Ok(Self::small_home()),
            "full_discount" => Ok(Self::full_discount()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a quote from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "quote".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a quote from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown
    /// fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates the fields that are present and returns a list of errors.
    ///
    /// Completeness is checked separately by [`Self::resolve`]; this only
    /// rejects out-of-range values.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let q = &self.quote;

        if let Some(kwh) = q.average_consumption_kwh {
            if !kwh.is_finite() || kwh < 0.0 {
                errors.push(ConfigError {
                    field: "quote.average_consumption_kwh".into(),
                    message: "must be a finite value >= 0".into(),
                });
            }
        }
        if let Some(fee) = q.public_lighting_fee {
            if !fee.is_finite() || fee < 0.0 {
                errors.push(ConfigError {
                    field: "quote.public_lighting_fee".into(),
                    message: "must be a finite value >= 0".into(),
                });
            }
        }
        if let Some(pct) = q.contracted_discount_pct {
            if !(0.0..=100.0).contains(&pct) {
                errors.push(ConfigError {
                    field: "quote.contracted_discount_pct".into(),
                    message: "must be in [0, 100]".into(),
                });
            }
        }

        errors
    }

    /// Resolves the configuration into a complete [`QuoteInput`].
    ///
    /// # Errors
    ///
    /// Returns a single `ConfigError` naming every missing field when any
    /// of the four inputs is absent. No partial computation is attempted.
    pub fn resolve(&self) -> Result<QuoteInput, ConfigError> {
        let q = &self.quote;
        if let (Some(kwh), Some(fee), Some(connection), Some(pct)) = (
            q.average_consumption_kwh,
            q.public_lighting_fee,
            q.connection_type,
            q.contracted_discount_pct,
        ) {
            return Ok(QuoteInput {
                average_consumption_kwh: kwh,
                public_lighting_fee: fee,
                connection_type: connection,
                contracted_discount_pct: pct,
            });
        }

        let mut missing = Vec::new();
        if q.average_consumption_kwh.is_none() {
            missing.push("average_consumption_kwh");
        }
        if q.public_lighting_fee.is_none() {
            missing.push("public_lighting_fee");
        }
        if q.connection_type.is_none() {
            missing.push("connection_type");
        }
        if q.contracted_discount_pct.is_none() {
            missing.push("contracted_discount_pct");
        }
        Err(ConfigError {
            field: "quote".to_string(),
            message: format!("incomplete input, missing: {}", missing.join(", ")),
        })
    }
}
