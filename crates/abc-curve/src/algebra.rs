// ─────────────────────────────────────────────────────────────────────
// ABC Sweep Kernel — Curve Functions
// ─────────────────────────────────────────────────────────────────────
//! Invariant, spot price, and single-operation mint/burn pricing against
//! the frozen curve. The invariant is fixed at genesis; mint and burn
//! move (R, S) along the curve without changing V.

use abc_types::{AbcError, AbcResult};

fn check_reserve(reserve: f64) -> AbcResult<()> {
    if !(reserve.is_finite() && reserve >= 0.0) {
        return Err(AbcError::Domain(format!(
            "reserve must be non-negative and finite, got {reserve}"
        )));
    }
    Ok(())
}

fn check_supply(supply: f64) -> AbcResult<()> {
    if !(supply.is_finite() && supply > 0.0) {
        return Err(AbcError::Domain(format!(
            "curve undefined for supply {supply}; supply must be positive and finite"
        )));
    }
    Ok(())
}

fn check_kappa(kappa: f64) -> AbcResult<()> {
    if !(kappa.is_finite() && kappa > 0.0) {
        return Err(AbcError::Domain(format!(
            "kappa must be positive and finite, got {kappa}"
        )));
    }
    Ok(())
}

/// Solve R = V · S^κ for the invariant:
///
///   V = R / S^κ
///
/// Extreme kappa/supply combinations that overflow or underflow the
/// power are rejected rather than silently collapsing the invariant.
pub fn invariant(reserve: f64, supply: f64, kappa: f64) -> AbcResult<f64> {
    check_reserve(reserve)?;
    check_supply(supply)?;
    check_kappa(kappa)?;

    let v = reserve / supply.powf(kappa);
    if !v.is_finite() {
        return Err(AbcError::Domain(format!(
            "invariant overflowed for reserve {reserve}, supply {supply}, kappa {kappa}"
        )));
    }
    if reserve > 0.0 && v == 0.0 {
        return Err(AbcError::Domain(format!(
            "invariant underflowed to zero for reserve {reserve}, supply {supply}, kappa {kappa}"
        )));
    }
    Ok(v)
}

/// Marginal price dR/dS along the curve, in terms of (R, V, κ):
///
///   P = κ · V^(1/κ) · R^((κ−1)/κ)
///
/// Substituting S = (R/V)^(1/κ) shows this equals κ · V · S^(κ−1) and,
/// purely in curve state, κ · R / S (see [`spot_price_from_state`]).
pub fn spot_price(reserve: f64, invariant: f64, kappa: f64) -> AbcResult<f64> {
    check_reserve(reserve)?;
    check_kappa(kappa)?;
    if !(invariant.is_finite() && invariant > 0.0) {
        return Err(AbcError::Domain(format!(
            "invariant must be positive and finite, got {invariant}"
        )));
    }

    let price = kappa * invariant.powf(1.0 / kappa) * reserve.powf((kappa - 1.0) / kappa);
    if !price.is_finite() {
        return Err(AbcError::Domain(format!(
            "spot price overflowed for reserve {reserve}, invariant {invariant}, kappa {kappa}"
        )));
    }
    Ok(price)
}

/// Marginal price expressed in reserve and supply alone:
///
///   P = κ · R / S
pub fn spot_price_from_state(reserve: f64, supply: f64, kappa: f64) -> AbcResult<f64> {
    check_reserve(reserve)?;
    check_supply(supply)?;
    check_kappa(kappa)?;

    let price = kappa * reserve / supply;
    if !price.is_finite() {
        return Err(AbcError::Domain(format!(
            "spot price overflowed for reserve {reserve}, supply {supply}, kappa {kappa}"
        )));
    }
    Ok(price)
}

/// Tokens minted for a reserve deposit, holding the invariant fixed:
///
///   ΔS = S · (((R + ΔR) / R)^(1/κ) − 1)
pub fn mint(deposit: f64, reserve: f64, supply: f64, kappa: f64) -> AbcResult<f64> {
    if !(deposit.is_finite() && deposit >= 0.0) {
        return Err(AbcError::Domain(format!(
            "deposit must be non-negative and finite, got {deposit}"
        )));
    }
    if !(reserve.is_finite() && reserve > 0.0) {
        return Err(AbcError::Domain(format!(
            "mint requires a positive reserve, got {reserve}"
        )));
    }
    check_supply(supply)?;
    check_kappa(kappa)?;

    let minted = supply * (((reserve + deposit) / reserve).powf(1.0 / kappa) - 1.0);
    if !minted.is_finite() {
        return Err(AbcError::Domain(format!(
            "mint overflowed for deposit {deposit}, reserve {reserve}, supply {supply}, kappa {kappa}"
        )));
    }
    Ok(minted)
}

/// Reserve returned for burning tokens, holding the invariant fixed:
///
///   ΔR = R · (1 − ((S − ΔS) / S)^κ)
pub fn burn(tokens: f64, reserve: f64, supply: f64, kappa: f64) -> AbcResult<f64> {
    check_reserve(reserve)?;
    check_supply(supply)?;
    check_kappa(kappa)?;
    if !(tokens.is_finite() && (0.0..=supply).contains(&tokens)) {
        return Err(AbcError::Domain(format!(
            "cannot burn {tokens} tokens of a supply of {supply}"
        )));
    }

    let returned = reserve * (1.0 - ((supply - tokens) / supply).powf(kappa));
    if !returned.is_finite() {
        return Err(AbcError::Domain(format!(
            "burn overflowed for tokens {tokens}, reserve {reserve}, supply {supply}, kappa {kappa}"
        )));
    }
    Ok(returned)
}
