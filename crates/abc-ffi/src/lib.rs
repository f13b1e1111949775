// ─────────────────────────────────────────────────────────────────────
// ABC Sweep Kernel — PyO3 FFI Bindings
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
// Note: #[deny(unsafe_code)] not applied — PyO3 proc macros generate
// unsafe blocks internally. All hand-written code in this crate is safe.
//! Python-callable wrappers around the Rust ABC sweep kernel.
//!
//! Exposes the curve algebra as free functions and the full setup as a
//! `SweepSetup` class, for the Python sweep driver.
//!
//! Install: `pip install -e crates/abc-ffi` (requires maturin).
//!
//! Usage from Python:
//! ```python
//! from abc_kernel import SweepSetup, invariant, spot_price
//!
//! setup = SweepSetup(kappas=[2.0, 3.0])
//! states = setup.genesis_states()
//! params = setup.sys_params()
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use abc_setup::{Column, SweepSetup as CoreSweepSetup};
use abc_types::{AbcError, ControlParams, HatchOutcome};

fn to_py_err(e: AbcError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

// ─── Curve algebra ──────────────────────────────────────────────────

/// Invariant V of the curve R = V · S^kappa.
#[pyfunction]
fn invariant(reserve: f64, supply: f64, kappa: f64) -> PyResult<f64> {
    abc_curve::invariant(reserve, supply, kappa).map_err(to_py_err)
}

/// Spot price from (reserve, invariant, kappa).
#[pyfunction]
fn spot_price(reserve: f64, invariant: f64, kappa: f64) -> PyResult<f64> {
    abc_curve::spot_price(reserve, invariant, kappa).map_err(to_py_err)
}

/// Spot price from (reserve, supply, kappa).
#[pyfunction]
fn spot_price_from_state(reserve: f64, supply: f64, kappa: f64) -> PyResult<f64> {
    abc_curve::spot_price_from_state(reserve, supply, kappa).map_err(to_py_err)
}

/// Tokens minted for a reserve deposit against the frozen curve.
#[pyfunction]
fn mint(deposit: f64, reserve: f64, supply: f64, kappa: f64) -> PyResult<f64> {
    abc_curve::mint(deposit, reserve, supply, kappa).map_err(to_py_err)
}

/// Reserve returned for burning tokens against the frozen curve.
#[pyfunction]
fn burn(tokens: f64, reserve: f64, supply: f64, kappa: f64) -> PyResult<f64> {
    abc_curve::burn(tokens, reserve, supply, kappa).map_err(to_py_err)
}

// ─── SweepSetup ─────────────────────────────────────────────────────

/// Emit a column the way the driver expects its parameter sequences:
/// shared columns as a single-element list, per-scenario columns in full.
fn emit<T: Clone>(column: &Column<T>) -> Vec<T> {
    match column {
        Column::PerScenario(values) => values.clone(),
        Column::Shared(value) => vec![value.clone()],
    }
}

/// Python-visible sweep setup.
#[pyclass(name = "SweepSetup")]
struct PySweepSetup {
    inner: CoreSweepSetup,
}

#[pymethods]
impl PySweepSetup {
    #[new]
    #[pyo3(signature = (
        raised_capital = 100_000.0,
        hatch_price = 0.1,
        funding_split = 0.5,
        kappas = vec![2.0, 3.0],
        controls_json = None,
        runs = 50,
        timesteps = 4000,
    ))]
    fn new(
        raised_capital: f64,
        hatch_price: f64,
        funding_split: f64,
        kappas: Vec<f64>,
        controls_json: Option<&str>,
        runs: u32,
        timesteps: u64,
    ) -> PyResult<Self> {
        let hatch =
            HatchOutcome::new(raised_capital, hatch_price, funding_split).map_err(to_py_err)?;
        let controls = match controls_json {
            Some(json) => ControlParams::from_json(json).map_err(to_py_err)?,
            None => ControlParams::default(),
        };
        let inner = CoreSweepSetup::initialize(hatch, &kappas, &controls, runs, timesteps)
            .map_err(to_py_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn scenario_count(&self) -> usize {
        self.inner.scenario_count()
    }

    #[getter]
    fn runs(&self) -> u32 {
        self.inner.sweep.runs
    }

    #[getter]
    fn timesteps(&self) -> u64 {
        self.inner.sweep.timesteps
    }

    /// Genesis states as a list of dicts, index-aligned with the kappa
    /// list.
    fn genesis_states(&self, py: Python<'_>) -> PyResult<Py<PyList>> {
        let list = PyList::empty(py);
        for g in &self.inner.genesis {
            let d = PyDict::new(py);
            d.set_item("supply", g.supply)?;
            d.set_item("price", g.price)?;
            d.set_item("reserve", g.reserve)?;
            d.set_item("spot_price", g.spot_price)?;
            d.set_item("output_price", g.output_price)?;
            list.append(d)?;
        }
        Ok(list.into())
    }

    /// System parameters as a dict of per-field lists. Shared columns
    /// come out as single-element lists, the driver's broadcast
    /// convention.
    fn sys_params(&self, py: Python<'_>) -> PyResult<Py<PyDict>> {
        let params = &self.inner.sweep.params;
        let d = PyDict::new(py);
        d.set_item("kappa", params.kappa.clone())?;
        d.set_item("invariant", params.invariant.clone())?;
        d.set_item("dust", emit(&params.dust))?;
        d.set_item(
            "rule",
            emit(&params.rule)
                .iter()
                .map(|r| r.name())
                .collect::<Vec<_>>(),
        )?;
        d.set_item("dP", emit(&params.price_step))?;
        d.set_item("sigma", emit(&params.sigma))?;
        d.set_item("period", emit(&params.period))?;
        d.set_item("phi", emit(&params.phi))?;
        d.set_item("beta", emit(&params.beta))?;
        Ok(d.into())
    }

    /// The whole setup as JSON (hatch, scenarios, genesis, sweep).
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner).map_err(|e| PyValueError::new_err(e.to_string()))
    }
}

#[pymodule]
fn abc_kernel(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(invariant, m)?)?;
    m.add_function(wrap_pyfunction!(spot_price, m)?)?;
    m.add_function(wrap_pyfunction!(spot_price_from_state, m)?)?;
    m.add_function(wrap_pyfunction!(mint, m)?)?;
    m.add_function(wrap_pyfunction!(burn, m)?)?;
    m.add_class::<PySweepSetup>()?;
    Ok(())
}
