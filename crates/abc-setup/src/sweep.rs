// ─────────────────────────────────────────────────────────────────────
// ABC Sweep Kernel — Sweep Configuration
// ─────────────────────────────────────────────────────────────────────
//! Bundles the aligned parameter table with the Monte-Carlo run count
//! and horizon, and provides the one-shot setup entry point.
//!
//! Construction order is fixed and explicit: hatch validation, per-kappa
//! derivation, genesis projection, table assembly, sweep bundling.
//! Nothing is computed at load time and nothing is mutated afterwards.

use serde::{Deserialize, Serialize};

use abc_types::{AbcError, AbcResult, ControlParams, GenesisState, HatchOutcome, InitialConditions};

use crate::genesis::to_genesis_states;
use crate::scenario::build_scenarios;
use crate::table::ScenarioParameterTable;

/// Stock Monte-Carlo run count per scenario.
pub const DEFAULT_RUNS: u32 = 50;
/// Stock horizon (timesteps per run).
pub const DEFAULT_TIMESTEPS: u64 = 4000;

/// Sweep-level configuration for the downstream driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Monte-Carlo runs per scenario.
    pub runs: u32,
    /// Timesteps per run.
    pub timesteps: u64,
    /// Aligned per-scenario parameters.
    pub params: ScenarioParameterTable,
}

impl SweepConfig {
    pub fn new(runs: u32, timesteps: u64, params: ScenarioParameterTable) -> AbcResult<Self> {
        if runs == 0 {
            return Err(AbcError::Config("runs must be >= 1".to_string()));
        }
        if timesteps == 0 {
            return Err(AbcError::Config("timesteps must be >= 1".to_string()));
        }
        Ok(Self {
            runs,
            timesteps,
            params,
        })
    }
}

/// Immutable result of sweep initialization: the validated hatch, one
/// initial-conditions record and genesis state per kappa, and the sweep
/// configuration for the driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepSetup {
    pub hatch: HatchOutcome,
    pub scenarios: Vec<InitialConditions>,
    pub genesis: Vec<GenesisState>,
    pub sweep: SweepConfig,
}

impl SweepSetup {
    /// Build the whole setup in one call.
    pub fn initialize(
        hatch: HatchOutcome,
        kappas: &[f64],
        controls: &ControlParams,
        runs: u32,
        timesteps: u64,
    ) -> AbcResult<Self> {
        let scenarios = build_scenarios(&hatch, kappas)?;
        let genesis = to_genesis_states(&scenarios);
        let params = ScenarioParameterTable::assemble(kappas, &scenarios, controls)?;
        let sweep = SweepConfig::new(runs, timesteps, params)?;
        log::debug!(
            "sweep setup initialized: {} scenarios, {} runs x {} steps",
            scenarios.len(),
            runs,
            timesteps
        );
        Ok(Self {
            hatch,
            scenarios,
            genesis,
            sweep,
        })
    }

    /// Initialize with the stock run count and horizon.
    pub fn with_defaults(
        hatch: HatchOutcome,
        kappas: &[f64],
        controls: &ControlParams,
    ) -> AbcResult<Self> {
        Self::initialize(hatch, kappas, controls, DEFAULT_RUNS, DEFAULT_TIMESTEPS)
    }

    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_seed_sweep() {
        let setup = SweepSetup::with_defaults(
            HatchOutcome::default(),
            &[2.0, 3.0],
            &ControlParams::default(),
        )
        .unwrap();

        assert_eq!(setup.scenario_count(), 2);
        assert_eq!(setup.genesis.len(), 2);
        assert_eq!(setup.sweep.params.scenario_count(), 2);
        assert_eq!(setup.sweep.runs, 50);
        assert_eq!(setup.sweep.timesteps, 4000);

        // Genesis and table stay index-aligned with the kappa list.
        assert!((setup.genesis[0].price - 0.1).abs() < 1e-9);
        assert!((setup.genesis[1].price - 0.15).abs() < 1e-9);
        assert_eq!(setup.sweep.params.kappa, vec![2.0, 3.0]);
    }

    #[test]
    fn test_zero_runs_rejected() {
        let err = SweepSetup::initialize(
            HatchOutcome::default(),
            &[2.0],
            &ControlParams::default(),
            0,
            4000,
        )
        .unwrap_err();
        assert!(err.to_string().contains("runs"));
    }

    #[test]
    fn test_zero_timesteps_rejected() {
        assert!(SweepSetup::initialize(
            HatchOutcome::default(),
            &[2.0],
            &ControlParams::default(),
            50,
            0,
        )
        .is_err());
    }

    #[test]
    fn test_scenario_failure_propagates_unmodified() {
        let err = SweepSetup::with_defaults(
            HatchOutcome::default(),
            &[2.0, f64::NAN],
            &ControlParams::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AbcError::Scenario { index: 1, .. }));
    }

    #[test]
    fn test_setup_serde_round_trip() {
        let setup = SweepSetup::with_defaults(
            HatchOutcome::default(),
            &[2.0, 3.0],
            &ControlParams::default(),
        )
        .unwrap();
        let json = serde_json::to_string(&setup).unwrap();
        let back: SweepSetup = serde_json::from_str(&json).unwrap();
        assert_eq!(back.scenario_count(), 2);
        assert_eq!(back.sweep.params.kappa, setup.sweep.params.kappa);
    }
}
