// ─────────────────────────────────────────────────────────────────────
// ABC Sweep Kernel — Scenario State Records
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

/// Initial conditions derived for one curve exponent.
///
/// Reserve and supply come from the hatch and are identical across all
/// scenarios of a sweep; invariant and spot price vary with kappa.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitialConditions {
    /// Reserve balance R0.
    pub reserve: f64,
    /// Token supply S0.
    pub supply: f64,
    /// Curve invariant V0 = R0 / S0^kappa.
    pub invariant: f64,
    /// Spot price P0 at genesis.
    pub spot_price: f64,
}

impl InitialConditions {
    /// Residual of the defining relation R = V · S^kappa.
    pub fn curve_residual(&self, kappa: f64) -> f64 {
        self.reserve - self.invariant * self.supply.powf(kappa)
    }

    /// Whether the record satisfies the curve relation within a relative
    /// tolerance (scaled by the reserve).
    pub fn is_consistent(&self, kappa: f64, tol: f64) -> bool {
        self.curve_residual(kappa).abs() <= tol * self.reserve.abs().max(1.0)
    }
}

/// Simulation starting state (t = 0) for one scenario.
///
/// `price`, `spot_price` and `output_price` all start at P0; the
/// external engine evolves them separately from the first step on. The
/// kernel never mutates a genesis state after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenesisState {
    pub supply: f64,
    pub price: f64,
    pub reserve: f64,
    pub spot_price: f64,
    pub output_price: f64,
}

impl GenesisState {
    /// Project initial conditions into the t=0 state.
    pub fn from_initial_conditions(ic: &InitialConditions) -> Self {
        Self {
            supply: ic.supply,
            price: ic.spot_price,
            reserve: ic.reserve,
            spot_price: ic.spot_price,
            output_price: ic.spot_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_conditions() -> InitialConditions {
        InitialConditions {
            reserve: 50_000.0,
            supply: 1_000_000.0,
            invariant: 5e-8,
            spot_price: 0.1,
        }
    }

    #[test]
    fn test_curve_residual_zero_for_consistent_record() {
        let ic = seed_conditions();
        assert!(ic.is_consistent(2.0, 1e-12));
    }

    #[test]
    fn test_curve_residual_nonzero_for_wrong_kappa() {
        let ic = seed_conditions();
        assert!(!ic.is_consistent(3.0, 1e-12));
    }

    #[test]
    fn test_genesis_projection() {
        let genesis = GenesisState::from_initial_conditions(&seed_conditions());
        assert_eq!(genesis.supply, 1_000_000.0);
        assert_eq!(genesis.reserve, 50_000.0);
        assert_eq!(genesis.price, 0.1);
        assert_eq!(genesis.spot_price, 0.1);
        assert_eq!(genesis.output_price, 0.1);
    }

    #[test]
    fn test_genesis_serde_round_trip() {
        let genesis = GenesisState::from_initial_conditions(&seed_conditions());
        let json = serde_json::to_string(&genesis).unwrap();
        let back: GenesisState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.supply, genesis.supply);
        assert_eq!(back.output_price, genesis.output_price);
    }
}
