// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Species classification for an adoptable pet.
///
/// Pet types are fixed domain constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PetType {
    /// Dog.
    Dog,
    /// Cat.
    Cat,
    /// Bird.
    Bird,
    /// Rabbit.
    Rabbit,
    /// Any species not covered by the other variants.
    Other,
}

impl PetType {
    /// Parses a pet type from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid pet type.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Dog" => Ok(Self::Dog),
            "Cat" => Ok(Self::Cat),
            "Bird" => Ok(Self::Bird),
            "Rabbit" => Ok(Self::Rabbit),
            "Other" => Ok(Self::Other),
            _ => Err(DomainError::InvalidPetType(s.to_string())),
        }
    }

    /// Returns the string representation of this pet type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dog => "Dog",
            Self::Cat => "Cat",
            Self::Bird => "Bird",
            Self::Rabbit => "Rabbit",
            Self::Other => "Other",
        }
    }
}

impl FromStr for PetType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for PetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Age bracket for listing filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    /// Under one year.
    Baby,
    /// One to three years.
    Young,
    /// Three to eight years.
    Adult,
    /// Over eight years.
    Senior,
}

impl AgeGroup {
    /// Parses an age group from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid age group.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Baby" => Ok(Self::Baby),
            "Young" => Ok(Self::Young),
            "Adult" => Ok(Self::Adult),
            "Senior" => Ok(Self::Senior),
            _ => Err(DomainError::InvalidAgeGroup(s.to_string())),
        }
    }

    /// Returns the string representation of this age group.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Baby => "Baby",
            Self::Young => "Young",
            Self::Adult => "Adult",
            Self::Senior => "Senior",
        }
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Availability status of an adoptable pet.
///
/// `Adopted` is reachable only as a side effect of an adoption request
/// reaching `Approved`; it is never set directly by surrender or booking
/// flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PetStatus {
    /// Listed and open to adoption requests.
    #[default]
    Available,
    /// Temporarily held (for example, an adoption is under review).
    Pending,
    /// Adopted. The pet is hidden from public listing by default.
    Adopted,
}

impl PetStatus {
    /// Parses a pet status from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid pet status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Available" => Ok(Self::Available),
            "Pending" => Ok(Self::Pending),
            "Adopted" => Ok(Self::Adopted),
            _ => Err(DomainError::InvalidPetStatus(s.to_string())),
        }
    }

    /// Returns the string representation of this pet status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Pending => "Pending",
            Self::Adopted => "Adopted",
        }
    }

    /// Returns whether an adoption request for a pet in this status may
    /// still be approved.
    #[must_use]
    pub const fn is_adoptable(&self) -> bool {
        matches!(self, Self::Available | Self::Pending)
    }
}

impl FromStr for PetStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for PetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An adoptable pet record.
///
/// `pet_id` is the canonical identifier assigned by the persistence layer.
/// `created_by` references the admin who listed the pet, not the eventual
/// adopter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Canonical identifier. `None` indicates the pet has not been
    /// persisted yet.
    pub pet_id: Option<i64>,
    /// Display name.
    pub name: String,
    /// Species classification.
    pub pet_type: PetType,
    /// Breed, if known.
    pub breed: Option<String>,
    /// Age bracket.
    pub age_group: AgeGroup,
    /// Shelter or foster location.
    pub location: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Pre-resolved image reference (URL). Required at creation; image
    /// bytes are the image collaborator's concern.
    pub image_ref: String,
    /// Whether this pet appears in the featured carousel.
    pub featured: bool,
    /// Availability status.
    pub status: PetStatus,
    /// The actor who created this record.
    pub created_by: i64,
}

impl Pet {
    /// Creates a new `Pet` without a persisted id.
    ///
    /// The id will be assigned by the persistence layer on first save.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        name: String,
        pet_type: PetType,
        breed: Option<String>,
        age_group: AgeGroup,
        location: String,
        description: Option<String>,
        image_ref: String,
        featured: bool,
        status: PetStatus,
        created_by: i64,
    ) -> Self {
        Self {
            pet_id: None,
            name,
            pet_type,
            breed,
            age_group,
            location,
            description,
            image_ref,
            featured,
            status,
            created_by,
        }
    }

    /// Creates a `Pet` with an existing persisted id.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn with_id(
        pet_id: i64,
        name: String,
        pet_type: PetType,
        breed: Option<String>,
        age_group: AgeGroup,
        location: String,
        description: Option<String>,
        image_ref: String,
        featured: bool,
        status: PetStatus,
        created_by: i64,
    ) -> Self {
        Self {
            pet_id: Some(pet_id),
            name,
            pet_type,
            breed,
            age_group,
            location,
            description,
            image_ref,
            featured,
            status,
            created_by,
        }
    }
}
