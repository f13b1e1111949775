// ─────────────────────────────────────────────────────────────────────
// ABC Sweep Kernel — Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy for the ABC
//! sweep kernel: genesis setup for augmented-bonding-curve parameter
//! sweeps.

pub mod controls;
pub mod error;
pub mod hatch;
pub mod state;

pub use controls::{ControlParams, PriceRule};
pub use error::{AbcError, AbcResult};
pub use hatch::HatchOutcome;
pub use state::{GenesisState, InitialConditions};
