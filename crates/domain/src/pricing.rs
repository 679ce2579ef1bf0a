// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking price table.
//!
//! Amounts are integral currency units. The quantity multiplier applies
//! only to the per-unit services (Boarding per night, Daycare per day);
//! flat-fee services ignore `qty` for pricing.

use crate::booking::ServiceKind;

/// Returns the base price for a service.
#[must_use]
pub const fn base_price(service: ServiceKind) -> i64 {
    match service {
        ServiceKind::Grooming => 1200,
        ServiceKind::Veterinary => 800,
        ServiceKind::Boarding => 1000,
        ServiceKind::Daycare => 600,
        ServiceKind::Training => 1500,
    }
}

/// Computes the total amount for a service booking.
///
/// For per-unit services the base price is multiplied by `qty`; flat-fee
/// services cost the base price regardless of `qty`. Callers must have
/// validated `qty >= 1` beforehand; a quantity of 0 would price a
/// per-unit booking at 0.
#[must_use]
pub fn compute_amount(service: ServiceKind, qty: u32) -> i64 {
    if service.is_per_unit() {
        base_price(service) * i64::from(qty)
    } else {
        base_price(service)
    }
}
