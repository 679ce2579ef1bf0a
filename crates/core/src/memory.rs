// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! An in-memory `Store` backend.
//!
//! Used by unit and workflow tests across the workspace so they do not
//! need a real database. Transactions are snapshot-based: the whole
//! state is cloned before the closure runs and restored if it fails.

use crate::paging::{Page, PageRequest};
use crate::store::{
    AdoptionFilter, BookingFilter, PetFilter, Store, StoreError, SurrenderFilter,
};
use adoptnest_domain::{AdoptionRequest, Booking, Pet, PetStatus, Surrender};

/// An in-memory store of domain records.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pets: Vec<Pet>,
    adoptions: Vec<AdoptionRequest>,
    bookings: Vec<Booking>,
    surrenders: Vec<Surrender>,
    next_id: i64,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pets: Vec::new(),
            adoptions: Vec::new(),
            bookings: Vec::new(),
            surrenders: Vec::new(),
            next_id: 0,
        }
    }

    fn assign_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

fn matches_pet(pet: &Pet, filter: &PetFilter) -> bool {
    if let Some(pet_type) = filter.pet_type
        && pet.pet_type != pet_type
    {
        return false;
    }
    if let Some(age_group) = filter.age_group
        && pet.age_group != age_group
    {
        return false;
    }
    if let Some(location) = &filter.location
        && !pet.location.eq_ignore_ascii_case(location)
    {
        return false;
    }
    if let Some(statuses) = &filter.statuses
        && !statuses.contains(&pet.status)
    {
        return false;
    }
    if let Some(featured) = filter.featured
        && pet.featured != featured
    {
        return false;
    }
    if let Some(query) = &filter.text_query {
        let needle: String = query.to_lowercase();
        let in_name: bool = pet.name.to_lowercase().contains(&needle);
        let in_breed: bool = pet
            .breed
            .as_ref()
            .is_some_and(|breed| breed.to_lowercase().contains(&needle));
        let in_description: bool = pet
            .description
            .as_ref()
            .is_some_and(|description| description.to_lowercase().contains(&needle));
        if !(in_name || in_breed || in_description) {
            return false;
        }
    }
    true
}

impl Store for MemoryStore {
    fn insert_pet(&mut self, pet: &Pet) -> Result<Pet, StoreError> {
        let mut stored: Pet = pet.clone();
        stored.pet_id = Some(self.assign_id());
        self.pets.push(stored.clone());
        Ok(stored)
    }

    fn find_pet(&mut self, pet_id: i64) -> Result<Option<Pet>, StoreError> {
        Ok(self
            .pets
            .iter()
            .find(|pet| pet.pet_id == Some(pet_id))
            .cloned())
    }

    fn list_pets(
        &mut self,
        filter: &PetFilter,
        page: &PageRequest,
    ) -> Result<Page<Pet>, StoreError> {
        let matching: Vec<Pet> = self
            .pets
            .iter()
            .filter(|pet| matches_pet(pet, filter))
            .cloned()
            .collect();
        let total: u64 = u64::try_from(matching.len()).unwrap_or(u64::MAX);
        let items: Vec<Pet> = matching
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
            .collect();
        Ok(Page::new(items, total, page))
    }

    fn update_pet(&mut self, pet: &Pet) -> Result<Pet, StoreError> {
        let slot: &mut Pet = self
            .pets
            .iter_mut()
            .find(|stored| stored.pet_id == pet.pet_id && pet.pet_id.is_some())
            .ok_or(StoreError::NotFound {
                resource: "Pet",
                id: pet.pet_id.unwrap_or(0),
            })?;
        *slot = pet.clone();
        Ok(pet.clone())
    }

    fn delete_pet(&mut self, pet_id: i64) -> Result<(), StoreError> {
        let before: usize = self.pets.len();
        self.pets.retain(|pet| pet.pet_id != Some(pet_id));
        if self.pets.len() == before {
            return Err(StoreError::NotFound {
                resource: "Pet",
                id: pet_id,
            });
        }
        Ok(())
    }

    fn transition_pet_status(
        &mut self,
        pet_id: i64,
        allowed_from: &[PetStatus],
        to: PetStatus,
    ) -> Result<Pet, StoreError> {
        let pet: &mut Pet = self
            .pets
            .iter_mut()
            .find(|pet| pet.pet_id == Some(pet_id))
            .ok_or(StoreError::NotFound {
                resource: "Pet",
                id: pet_id,
            })?;
        if !allowed_from.contains(&pet.status) {
            return Err(StoreError::Conflict(format!(
                "pet {pet_id} is {} and cannot move to {}",
                pet.status.as_str(),
                to.as_str()
            )));
        }
        pet.status = to;
        Ok(pet.clone())
    }

    fn insert_adoption(&mut self, request: &AdoptionRequest) -> Result<AdoptionRequest, StoreError> {
        let mut stored: AdoptionRequest = request.clone();
        stored.request_id = Some(self.assign_id());
        self.adoptions.push(stored.clone());
        Ok(stored)
    }

    fn find_adoption(&mut self, request_id: i64) -> Result<Option<AdoptionRequest>, StoreError> {
        Ok(self
            .adoptions
            .iter()
            .find(|request| request.request_id == Some(request_id))
            .cloned())
    }

    fn list_adoptions(
        &mut self,
        filter: &AdoptionFilter,
    ) -> Result<Vec<AdoptionRequest>, StoreError> {
        Ok(self
            .adoptions
            .iter()
            .filter(|request| {
                filter
                    .applicant_id
                    .is_none_or(|applicant_id| request.applicant_id == applicant_id)
                    && filter.pet_id.is_none_or(|pet_id| request.pet_id == pet_id)
                    && filter.status.is_none_or(|status| request.status == status)
            })
            .cloned()
            .collect())
    }

    fn update_adoption(&mut self, request: &AdoptionRequest) -> Result<AdoptionRequest, StoreError> {
        let slot: &mut AdoptionRequest = self
            .adoptions
            .iter_mut()
            .find(|stored| stored.request_id == request.request_id && request.request_id.is_some())
            .ok_or(StoreError::NotFound {
                resource: "Adoption request",
                id: request.request_id.unwrap_or(0),
            })?;
        *slot = request.clone();
        Ok(request.clone())
    }

    fn insert_booking(&mut self, booking: &Booking) -> Result<Booking, StoreError> {
        let mut stored: Booking = booking.clone();
        stored.booking_id = Some(self.assign_id());
        self.bookings.push(stored.clone());
        Ok(stored)
    }

    fn find_booking(&mut self, booking_id: i64) -> Result<Option<Booking>, StoreError> {
        Ok(self
            .bookings
            .iter()
            .find(|booking| booking.booking_id == Some(booking_id))
            .cloned())
    }

    fn list_bookings(&mut self, filter: &BookingFilter) -> Result<Vec<Booking>, StoreError> {
        Ok(self
            .bookings
            .iter()
            .filter(|booking| {
                filter
                    .user_id
                    .is_none_or(|user_id| booking.user_id == user_id)
                    && filter.status.is_none_or(|status| booking.status == status)
            })
            .cloned()
            .collect())
    }

    fn update_booking(&mut self, booking: &Booking) -> Result<Booking, StoreError> {
        let slot: &mut Booking = self
            .bookings
            .iter_mut()
            .find(|stored| stored.booking_id == booking.booking_id && booking.booking_id.is_some())
            .ok_or(StoreError::NotFound {
                resource: "Booking",
                id: booking.booking_id.unwrap_or(0),
            })?;
        *slot = booking.clone();
        Ok(booking.clone())
    }

    fn insert_surrender(&mut self, surrender: &Surrender) -> Result<Surrender, StoreError> {
        let mut stored: Surrender = surrender.clone();
        stored.surrender_id = Some(self.assign_id());
        self.surrenders.push(stored.clone());
        Ok(stored)
    }

    fn find_surrender(&mut self, surrender_id: i64) -> Result<Option<Surrender>, StoreError> {
        Ok(self
            .surrenders
            .iter()
            .find(|surrender| surrender.surrender_id == Some(surrender_id))
            .cloned())
    }

    fn list_surrenders(&mut self, filter: &SurrenderFilter) -> Result<Vec<Surrender>, StoreError> {
        Ok(self
            .surrenders
            .iter()
            .filter(|surrender| {
                filter
                    .user_id
                    .is_none_or(|user_id| surrender.user_id == user_id)
                    && filter
                        .status
                        .is_none_or(|status| surrender.status == status)
            })
            .cloned()
            .collect())
    }

    fn update_surrender(&mut self, surrender: &Surrender) -> Result<Surrender, StoreError> {
        let slot: &mut Surrender = self
            .surrenders
            .iter_mut()
            .find(|stored| {
                stored.surrender_id == surrender.surrender_id && surrender.surrender_id.is_some()
            })
            .ok_or(StoreError::NotFound {
                resource: "Surrender",
                id: surrender.surrender_id.unwrap_or(0),
            })?;
        *slot = surrender.clone();
        Ok(surrender.clone())
    }

    fn transaction<T, F>(&mut self, f: F) -> Result<T, StoreError>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> Result<T, StoreError>,
    {
        let snapshot: Self = self.clone();
        match f(self) {
            Ok(value) => Ok(value),
            Err(e) => {
                *self = snapshot;
                Err(e)
            }
        }
    }
}
