// ─────────────────────────────────────────────────────────────────────
// ABC Sweep Kernel — Scenario Parameter Builder
// ─────────────────────────────────────────────────────────────────────
//! Derives per-scenario initial conditions from one hatch outcome.
//!
//! The hatch fixes (R0, S0) once; each curve exponent then gets its own
//! invariant and spot price. Output order matches the kappa list, and
//! duplicate exponents produce independently computed duplicate records.

use abc_curve::{invariant, spot_price};
use abc_types::{AbcError, AbcResult, HatchOutcome, InitialConditions};

/// Derive one `InitialConditions` record per entry of `kappas`.
///
/// The whole batch aborts on the first failing exponent; the error
/// carries the scenario index and kappa. Callers that want
/// skip-and-continue semantics invoke the curve algebra per kappa
/// themselves.
pub fn build_scenarios(
    hatch: &HatchOutcome,
    kappas: &[f64],
) -> AbcResult<Vec<InitialConditions>> {
    hatch.validate()?;
    let reserve = hatch.initial_reserve();
    let supply = hatch.initial_supply();

    let mut scenarios = Vec::with_capacity(kappas.len());
    for (index, &kappa) in kappas.iter().enumerate() {
        let record = derive_one(reserve, supply, kappa).map_err(|source| {
            log::error!("scenario {index} failed for kappa {kappa}: {source}");
            AbcError::Scenario {
                index,
                kappa,
                source: Box::new(source),
            }
        })?;
        scenarios.push(record);
    }
    Ok(scenarios)
}

fn derive_one(reserve: f64, supply: f64, kappa: f64) -> AbcResult<InitialConditions> {
    let v0 = invariant(reserve, supply, kappa)?;
    let p0 = spot_price(reserve, v0, kappa)?;
    Ok(InitialConditions {
        reserve,
        supply,
        invariant: v0,
        spot_price: p0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn rel_close(a: f64, b: f64) -> bool {
        (a - b).abs() <= TOL * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_seed_scenarios() {
        let scenarios = build_scenarios(&HatchOutcome::default(), &[2.0, 3.0]).unwrap();
        assert_eq!(scenarios.len(), 2);

        assert!(rel_close(scenarios[0].reserve, 50_000.0));
        assert!(rel_close(scenarios[0].supply, 1_000_000.0));
        assert!(rel_close(scenarios[0].invariant, 5e-8));
        assert!(rel_close(scenarios[0].spot_price, 0.1));

        assert!(rel_close(scenarios[1].invariant, 5e-14));
        assert!(rel_close(scenarios[1].spot_price, 0.15));
    }

    #[test]
    fn test_shared_hatch_across_scenarios() {
        let scenarios =
            build_scenarios(&HatchOutcome::default(), &[1.0, 2.0, 3.0, 4.0]).unwrap();
        for s in &scenarios {
            assert_eq!(s.reserve, scenarios[0].reserve);
            assert_eq!(s.supply, scenarios[0].supply);
        }
    }

    #[test]
    fn test_records_satisfy_curve_relation() {
        let kappas = [1.0, 2.0, 2.5, 3.0];
        let scenarios = build_scenarios(&HatchOutcome::default(), &kappas).unwrap();
        for (s, &kappa) in scenarios.iter().zip(&kappas) {
            assert!(s.is_consistent(kappa, 1e-12), "kappa = {kappa}");
        }
    }

    #[test]
    fn test_order_follows_kappa_list() {
        let hatch = HatchOutcome::default();
        let forward = build_scenarios(&hatch, &[2.0, 3.0]).unwrap();
        let reversed = build_scenarios(&hatch, &[3.0, 2.0]).unwrap();
        assert_eq!(forward[0].invariant, reversed[1].invariant);
        assert_eq!(forward[1].invariant, reversed[0].invariant);
    }

    #[test]
    fn test_duplicate_kappas_kept() {
        let scenarios = build_scenarios(&HatchOutcome::default(), &[2.0, 2.0]).unwrap();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].invariant, scenarios[1].invariant);
    }

    #[test]
    fn test_empty_kappa_list() {
        let scenarios = build_scenarios(&HatchOutcome::default(), &[]).unwrap();
        assert!(scenarios.is_empty());
    }

    #[test]
    fn test_failing_kappa_reported_with_index() {
        let err = build_scenarios(&HatchOutcome::default(), &[2.0, -1.0]).unwrap_err();
        match err {
            AbcError::Scenario { index, kappa, .. } => {
                assert_eq!(index, 1);
                assert_eq!(kappa, -1.0);
            }
            other => panic!("expected Scenario error, got {other}"),
        }
    }

    #[test]
    fn test_invalid_hatch_rejected_before_derivation() {
        let hatch = HatchOutcome {
            raised_capital: -5.0,
            ..Default::default()
        };
        assert!(matches!(
            build_scenarios(&hatch, &[2.0]),
            Err(AbcError::Config(_))
        ));
    }
}
