// ─────────────────────────────────────────────────────────────────────
// ABC Sweep Kernel — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all sweep-kernel failures.
#[derive(Error, Debug)]
pub enum AbcError {
    /// Curve algebra invoked outside its domain, or a computation that
    /// produced a non-finite result.
    #[error("domain error: {0}")]
    Domain(String),

    /// Derivation failed for one curve exponent. Carries the scenario
    /// index and the exponent so a sweep driver can report exactly which
    /// entry of its kappa list is at fault.
    #[error("scenario {index} (kappa = {kappa}): {source}")]
    Scenario {
        index: usize,
        kappa: f64,
        #[source]
        source: Box<AbcError>,
    },

    /// Configuration error (hatch parameters, control-parameter values,
    /// table alignment).
    #[error("config error: {0}")]
    Config(String),
}

pub type AbcResult<T> = Result<T, AbcError>;
