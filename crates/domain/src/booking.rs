// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// The service catalog for bookings.
///
/// Boarding and Daycare are per-unit services (per night / per day); the
/// rest are flat-fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceKind {
    /// Grooming session (flat fee).
    Grooming,
    /// Veterinary / doctor visit (flat fee).
    Veterinary,
    /// Boarding, priced per night.
    Boarding,
    /// Daycare, priced per day.
    Daycare,
    /// Training session (flat fee).
    Training,
}

impl ServiceKind {
    /// Parses a service from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not in the service catalog.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Grooming" => Ok(Self::Grooming),
            "Veterinary" => Ok(Self::Veterinary),
            "Boarding" => Ok(Self::Boarding),
            "Daycare" => Ok(Self::Daycare),
            "Training" => Ok(Self::Training),
            _ => Err(DomainError::InvalidService(s.to_string())),
        }
    }

    /// Returns the string representation of this service.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Grooming => "Grooming",
            Self::Veterinary => "Veterinary",
            Self::Boarding => "Boarding",
            Self::Daycare => "Daycare",
            Self::Training => "Training",
        }
    }

    /// Returns whether the quantity multiplier applies to this service.
    ///
    /// Only Boarding (per night) and Daycare (per day) are priced per
    /// unit; for the flat-fee services `qty` is stored but ignored for
    /// pricing.
    #[must_use]
    pub const fn is_per_unit(&self) -> bool {
        matches!(self, Self::Boarding | Self::Daycare)
    }
}

impl FromStr for ServiceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a booking.
///
/// A non-admin update to a booking's mutable fields forces the status to
/// `ChangeRequested`; only an admin update may set the status directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BookingStatus {
    /// Initial state after creation.
    #[default]
    Pending,
    /// Confirmed by an admin.
    Confirmed,
    /// Cancelled by the owner or an admin.
    Cancelled,
    /// The owner edited the booking; awaiting admin re-confirmation.
    #[serde(rename = "Change Requested")]
    ChangeRequested,
}

impl BookingStatus {
    /// Parses a booking status from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Confirmed" => Ok(Self::Confirmed),
            "Cancelled" => Ok(Self::Cancelled),
            "Change Requested" => Ok(Self::ChangeRequested),
            _ => Err(DomainError::InvalidBookingStatus(s.to_string())),
        }
    }

    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
            Self::ChangeRequested => "Change Requested",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A service booking.
///
/// `amount` is always recomputed server-side from `service` and `qty`;
/// it is never trusted from caller input. `pet_name` is denormalized from
/// the pet registry at creation time for display convenience and is not
/// kept in sync afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Canonical identifier. `None` indicates the booking has not been
    /// persisted yet.
    pub booking_id: Option<i64>,
    /// The booking owner (access-control scoping field).
    pub user_id: i64,
    /// Optional reference to a registered pet.
    pub pet_id: Option<i64>,
    /// Denormalized pet name, resolved once at creation.
    pub pet_name: Option<String>,
    /// The booked service.
    pub service: ServiceKind,
    /// Quantity (nights / days for per-unit services; stored but not
    /// priced otherwise). Always at least 1.
    pub qty: u32,
    /// Total cost in integral currency units, computed server-side.
    pub amount: i64,
    /// Service date.
    pub date: Date,
    /// Requested time slot (free-form, e.g. "10:00 AM").
    pub time_slot: String,
    /// Optional notes for staff.
    pub notes: Option<String>,
    /// Lifecycle status.
    pub status: BookingStatus,
}

impl Booking {
    /// Creates a new `Booking` in `Pending` status without a persisted id.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        user_id: i64,
        pet_id: Option<i64>,
        pet_name: Option<String>,
        service: ServiceKind,
        qty: u32,
        amount: i64,
        date: Date,
        time_slot: String,
        notes: Option<String>,
    ) -> Self {
        Self {
            booking_id: None,
            user_id,
            pet_id,
            pet_name,
            service,
            qty,
            amount,
            date,
            time_slot,
            notes,
            status: BookingStatus::Pending,
        }
    }
}
