// ─────────────────────────────────────────────────────────────────────
// ABC Sweep Kernel — Bonding-Curve Algebra
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Closed-form algebra for the power-law bonding curve
//!
//!   R = V · S^κ
//!
//! relating reserve R, supply S and the invariant V through the curve
//! exponent κ. Everything here is a pure function of scalars, with no
//! state and no side effects, so callers can derive any number of
//! scenarios with no ordering dependency and every result stays
//! referentially transparent for testing.

pub mod algebra;

pub use algebra::{burn, invariant, mint, spot_price, spot_price_from_state};
