// ─────────────────────────────────────────────────────────────────────
// ABC Sweep Kernel — Sweep Control Parameters
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{AbcError, AbcResult};

/// Price-adjustment rule applied by the simulation driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceRule {
    /// Estimator-based price update with convergence damping.
    Martin,
}

impl PriceRule {
    /// Parse a rule from its configured name.
    pub fn from_name(name: &str) -> AbcResult<Self> {
        match name {
            "martin" => Ok(Self::Martin),
            other => Err(AbcError::Config(format!(
                "unrecognized price rule `{other}`"
            ))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Martin => "martin",
        }
    }
}

/// Auxiliary control parameters for one sweep.
///
/// `dust`, `rule`, `price_step`, `sigma` and `period` are per-scenario
/// columns; a single entry means the same policy for every scenario and
/// is broadcast at table assembly. `phi` and `beta` are sweep-wide
/// scalars, never per-scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlParams {
    /// Convergence threshold below which balances are treated as zero.
    pub dust: Vec<f64>,

    /// Price-adjustment rule name per scenario (parsed at assembly).
    pub rule: Vec<String>,

    /// Fixed price step per scenario; `None` lets the rule choose.
    pub price_step: Vec<Option<f64>>,

    /// Noise decay factor per scenario.
    pub sigma: Vec<f64>,

    /// Observation period in steps; `None` disables periodic observation.
    pub period: Vec<Option<u64>>,

    /// Exit fee charged on funds leaving the reserve, in [0, 1].
    pub phi: f64,

    /// Step-size control coefficient (Armijo backtracking factor),
    /// in (0, 1).
    pub beta: f64,
}

impl Default for ControlParams {
    fn default() -> Self {
        Self {
            dust: vec![1e-8],
            rule: vec!["martin".to_string()],
            price_step: vec![None],
            sigma: vec![0.1 * 0.5f64.powi(10)],
            period: vec![None],
            phi: 0.0,
            beta: 0.9,
        }
    }
}

impl ControlParams {
    /// Validate every control value. Lengths are checked later, against
    /// the scenario count, at table assembly.
    pub fn validate(&self) -> AbcResult<()> {
        if self.dust.is_empty() {
            return Err(AbcError::Config("dust must contain at least one value".to_string()));
        }
        if self.rule.is_empty() {
            return Err(AbcError::Config("rule must contain at least one value".to_string()));
        }
        if self.price_step.is_empty() {
            return Err(AbcError::Config(
                "price_step must contain at least one value".to_string(),
            ));
        }
        if self.sigma.is_empty() {
            return Err(AbcError::Config("sigma must contain at least one value".to_string()));
        }
        if self.period.is_empty() {
            return Err(AbcError::Config("period must contain at least one value".to_string()));
        }
        for (i, &d) in self.dust.iter().enumerate() {
            if !(d.is_finite() && d > 0.0) {
                return Err(AbcError::Config(format!(
                    "dust[{i}] must be positive and finite, got {d}"
                )));
            }
        }
        for (i, name) in self.rule.iter().enumerate() {
            if PriceRule::from_name(name).is_err() {
                return Err(AbcError::Config(format!(
                    "rule[{i}]: unrecognized price rule `{name}`"
                )));
            }
        }
        for (i, step) in self.price_step.iter().enumerate() {
            if let Some(dp) = step {
                if !(dp.is_finite() && *dp > 0.0) {
                    return Err(AbcError::Config(format!(
                        "price_step[{i}] must be positive and finite, got {dp}"
                    )));
                }
            }
        }
        for (i, &s) in self.sigma.iter().enumerate() {
            if !(s.is_finite() && s >= 0.0) {
                return Err(AbcError::Config(format!(
                    "sigma[{i}] must be non-negative and finite, got {s}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.phi) {
            return Err(AbcError::Config(format!(
                "phi must be in [0, 1], got {}",
                self.phi
            )));
        }
        if !(self.beta > 0.0 && self.beta < 1.0) {
            return Err(AbcError::Config(format!(
                "beta must be in (0, 1), got {}",
                self.beta
            )));
        }
        Ok(())
    }

    /// Per-scenario rules, parsed. The error names the offending index.
    pub fn parsed_rules(&self) -> AbcResult<Vec<PriceRule>> {
        self.rule
            .iter()
            .enumerate()
            .map(|(i, name)| {
                PriceRule::from_name(name).map_err(|_| {
                    AbcError::Config(format!("rule[{i}]: unrecognized price rule `{name}`"))
                })
            })
            .collect()
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> AbcResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| AbcError::Config(format!("JSON parse error: {e}")))
    }
}
