// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The image store collaborator port.
//!
//! Image bytes live with an external CDN collaborator; this crate only
//! requests best-effort cleanup when a pet is deleted. Failures are
//! logged and never fail the primary operation.

/// Error returned by an image store collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageStoreError {
    /// Description of the failure.
    pub message: String,
}

impl std::fmt::Display for ImageStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Image store error: {}", self.message)
    }
}

impl std::error::Error for ImageStoreError {}

/// Deletes stored images by reference.
pub trait ImageStore {
    /// Requests deletion of the image behind `image_ref`.
    ///
    /// # Errors
    ///
    /// Returns an error if the collaborator could not delete the image.
    /// Callers treat this as best-effort and must not fail their primary
    /// operation on it.
    fn delete_image(&self, image_ref: &str) -> Result<(), ImageStoreError>;
}

/// An image store that accepts every deletion without doing anything.
///
/// Used when no CDN collaborator is wired in, and by tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopImageStore;

impl ImageStore for NoopImageStore {
    fn delete_image(&self, _image_ref: &str) -> Result<(), ImageStoreError> {
        Ok(())
    }
}
