// ─────────────────────────────────────────────────────────────────────
// ABC Sweep Kernel — Hatch Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{AbcError, AbcResult};

/// Outcome of the hatch (initial token sale).
///
/// Fixed once per sweep and shared read-only by every scenario: the
/// reserve and supply derived here are identical across curve exponents,
/// only the invariant and spot price vary with kappa.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HatchOutcome {
    /// Capital raised during the hatch (fiat units).
    pub raised_capital: f64,

    /// Price paid per token during the hatch (fiat per token).
    pub hatch_price: f64,

    /// Share of the raise routed to the funding pool at launch; the
    /// remainder seeds the reserve. Must stay below 1 or the reserve
    /// would start empty.
    pub funding_split: f64,
}

impl Default for HatchOutcome {
    fn default() -> Self {
        Self {
            raised_capital: 100_000.0,
            hatch_price: 0.1,
            funding_split: 0.5,
        }
    }
}

impl HatchOutcome {
    /// Construct and validate in one step.
    pub fn new(raised_capital: f64, hatch_price: f64, funding_split: f64) -> AbcResult<Self> {
        let hatch = Self {
            raised_capital,
            hatch_price,
            funding_split,
        };
        hatch.validate()?;
        Ok(hatch)
    }

    /// Reserve seeded at t=0: the share of the raise kept in the pool.
    pub fn initial_reserve(&self) -> f64 {
        self.raised_capital * (1.0 - self.funding_split)
    }

    /// Supply minted at t=0: tokens sold at the hatch price.
    pub fn initial_supply(&self) -> f64 {
        self.raised_capital / self.hatch_price
    }

    /// Validate the raw parameters and both derived quantities.
    pub fn validate(&self) -> AbcResult<()> {
        if !(self.raised_capital.is_finite() && self.raised_capital > 0.0) {
            return Err(AbcError::Config(format!(
                "raised_capital must be positive and finite, got {}",
                self.raised_capital
            )));
        }
        if !(self.hatch_price.is_finite() && self.hatch_price > 0.0) {
            return Err(AbcError::Config(format!(
                "hatch_price must be positive and finite, got {}",
                self.hatch_price
            )));
        }
        if !(0.0..=1.0).contains(&self.funding_split) {
            return Err(AbcError::Config(format!(
                "funding_split must be in [0, 1], got {}",
                self.funding_split
            )));
        }
        let reserve = self.initial_reserve();
        if !(reserve.is_finite() && reserve > 0.0) {
            return Err(AbcError::Config(format!(
                "initial reserve must be positive, got {reserve} (funding_split = {})",
                self.funding_split
            )));
        }
        let supply = self.initial_supply();
        if !(supply.is_finite() && supply > 0.0) {
            return Err(AbcError::Config(format!(
                "initial supply must be positive, got {supply}"
            )));
        }
        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> AbcResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| AbcError::Config(format!("JSON parse error: {e}")))
    }
}
