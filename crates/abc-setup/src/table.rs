// ─────────────────────────────────────────────────────────────────────
// ABC Sweep Kernel — Aligned Parameter Table
// ─────────────────────────────────────────────────────────────────────
//! Per-scenario control columns with explicit broadcast.
//!
//! The sweep driver consumes parallel sequences keyed by name. A column
//! whose length is neither 1 (broadcast) nor the scenario count is
//! rejected at assembly instead of silently misaligning the sweep.

use serde::{Deserialize, Serialize};

use abc_types::{AbcError, AbcResult, ControlParams, InitialConditions, PriceRule};

/// One table field: either a value per scenario or one shared value.
///
/// Broadcasting is represented, not inferred: a consumer never indexes
/// a length-1 vector by scenario index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Column<T> {
    /// One value per scenario, index-aligned with the kappa list.
    PerScenario(Vec<T>),
    /// A single value shared by every scenario.
    Shared(T),
}

impl<T: Clone> Column<T> {
    /// Build from a configured sequence, enforcing length 1 or `count`.
    pub fn from_values(name: &str, values: &[T], count: usize) -> AbcResult<Self> {
        match values.len() {
            1 => Ok(Self::Shared(values[0].clone())),
            n if n == count => Ok(Self::PerScenario(values.to_vec())),
            n => Err(AbcError::Config(format!(
                "control parameter `{name}` has {n} values for {count} scenarios \
                 (expected {count}, or a single value to broadcast)"
            ))),
        }
    }

    /// Value for scenario `index`.
    pub fn get(&self, index: usize) -> &T {
        match self {
            Self::PerScenario(values) => &values[index],
            Self::Shared(value) => value,
        }
    }

    /// Materialize one value per scenario.
    pub fn values(&self, count: usize) -> Vec<T> {
        match self {
            Self::PerScenario(values) => values.clone(),
            Self::Shared(value) => vec![value.clone(); count],
        }
    }

    pub fn is_shared(&self) -> bool {
        matches!(self, Self::Shared(_))
    }
}

/// Aligned per-scenario parameter table handed to the sweep driver.
///
/// `kappa` and `invariant` always carry one value per scenario (they are
/// derived, never broadcast). The control columns may be broadcast; `phi`
/// and `beta` are sweep-wide scalars stored as shared columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioParameterTable {
    scenario_count: usize,
    pub kappa: Vec<f64>,
    pub invariant: Vec<f64>,
    pub dust: Column<f64>,
    pub rule: Column<PriceRule>,
    pub price_step: Column<Option<f64>>,
    pub sigma: Column<f64>,
    pub period: Column<Option<u64>>,
    pub phi: Column<f64>,
    pub beta: Column<f64>,
}

impl ScenarioParameterTable {
    /// Assemble the table, validating every column against the scenario
    /// count.
    pub fn assemble(
        kappas: &[f64],
        scenarios: &[InitialConditions],
        controls: &ControlParams,
    ) -> AbcResult<Self> {
        if kappas.len() != scenarios.len() {
            return Err(AbcError::Config(format!(
                "kappa list has {} entries but {} scenarios were derived",
                kappas.len(),
                scenarios.len()
            )));
        }
        controls.validate()?;

        let count = scenarios.len();
        let rules = controls.parsed_rules()?;
        Ok(Self {
            scenario_count: count,
            kappa: kappas.to_vec(),
            invariant: scenarios.iter().map(|s| s.invariant).collect(),
            dust: Column::from_values("dust", &controls.dust, count)?,
            rule: Column::from_values("rule", &rules, count)?,
            price_step: Column::from_values("price_step", &controls.price_step, count)?,
            sigma: Column::from_values("sigma", &controls.sigma, count)?,
            period: Column::from_values("period", &controls.period, count)?,
            phi: Column::Shared(controls.phi),
            beta: Column::Shared(controls.beta),
        })
    }

    pub fn scenario_count(&self) -> usize {
        self.scenario_count
    }
}
