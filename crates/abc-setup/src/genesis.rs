// ─────────────────────────────────────────────────────────────────────
// ABC Sweep Kernel — Genesis State Generator
// ─────────────────────────────────────────────────────────────────────
//! Projects initial-conditions records into t=0 simulation states.
//!
//! A pure 1:1 relabeling, kept apart from the scenario builder so the
//! genesis shape can grow fields without touching curve algebra.

use abc_types::{GenesisState, InitialConditions};

/// Map each record into its genesis state, preserving order.
pub fn to_genesis_states(scenarios: &[InitialConditions]) -> Vec<GenesisState> {
    scenarios
        .iter()
        .map(GenesisState::from_initial_conditions)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::build_scenarios;
    use abc_types::HatchOutcome;

    #[test]
    fn test_seed_genesis_states() {
        let scenarios = build_scenarios(&HatchOutcome::default(), &[2.0, 3.0]).unwrap();
        let genesis = to_genesis_states(&scenarios);
        assert_eq!(genesis.len(), 2);

        assert!((genesis[0].supply - 1_000_000.0).abs() < 1e-9);
        assert!((genesis[0].reserve - 50_000.0).abs() < 1e-9);
        assert!((genesis[0].price - 0.1).abs() < 1e-9);
        assert!((genesis[1].price - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_price_fields_coincide_at_genesis() {
        let scenarios = build_scenarios(&HatchOutcome::default(), &[2.0, 3.0]).unwrap();
        for g in to_genesis_states(&scenarios) {
            assert_eq!(g.price, g.spot_price);
            assert_eq!(g.price, g.output_price);
        }
    }

    #[test]
    fn test_order_preserved() {
        let scenarios = build_scenarios(&HatchOutcome::default(), &[3.0, 2.0]).unwrap();
        let genesis = to_genesis_states(&scenarios);
        assert_eq!(genesis[0].price, scenarios[0].spot_price);
        assert_eq!(genesis[1].price, scenarios[1].spot_price);
    }

    #[test]
    fn test_empty_input() {
        assert!(to_genesis_states(&[]).is_empty());
    }
}
