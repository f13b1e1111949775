// ─────────────────────────────────────────────────────────────────────
// ABC Sweep Kernel — Sweep Setup
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Sweep setup for augmented-bonding-curve simulations.
//!
//! Composition, leaves first:
//!   - `scenario`: one hatch outcome → per-kappa initial conditions
//!   - `genesis`: initial conditions → t=0 simulation states
//!   - `table`: control parameters → aligned per-scenario columns
//!   - `sweep`: the one-shot initialization call bundling all of it
//!
//! Every stage is pure and synchronous; the output sequences are
//! index-aligned with the input kappa list.

pub mod genesis;
pub mod scenario;
pub mod sweep;
pub mod table;

pub use genesis::to_genesis_states;
pub use scenario::build_scenarios;
pub use sweep::{SweepConfig, SweepSetup, DEFAULT_RUNS, DEFAULT_TIMESTEPS};
pub use table::{Column, ScenarioParameterTable};
