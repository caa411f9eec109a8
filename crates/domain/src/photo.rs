//! Photo value types
//!
//! A [`Photo`] is an immutable record fetched from the remote catalog.
//! Construction validates required fields; callers assembling pages drop
//! records that fail validation instead of surfacing them as errors.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// The multi-resolution image locators carried by every photo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoUrls {
    /// Raw, uncropped source image.
    pub raw: String,
    /// Full-resolution variant.
    pub full: String,
    /// Default display variant.
    pub regular: String,
    /// Small variant for list cells.
    pub small: String,
    /// Thumbnail variant.
    pub thumb: String,
}

/// The author attached to a photo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoAuthor {
    /// Unique username, used for profile lookups.
    pub username: String,
    /// Display name.
    pub name: String,
}

/// A single photo from the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Server-assigned identifier.
    pub id: String,
    /// Pixel width of the source image.
    pub width: u32,
    /// Pixel height of the source image.
    pub height: u32,
    /// Multi-resolution image locators.
    pub urls: PhotoUrls,
    /// The photo's author.
    pub author: PhotoAuthor,
    /// Like count at fetch time.
    pub likes: u64,
}

impl Photo {
    /// Validates the required fields of a photo record.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidPhoto`] if the id, display locator, or
    /// author username is empty, or if either dimension is zero.
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.is_empty() {
            return Err(DomainError::InvalidPhoto("empty id".into()));
        }
        if self.urls.regular.is_empty() {
            return Err(DomainError::InvalidPhoto(format!(
                "photo {}: missing display url",
                self.id
            )));
        }
        if self.author.username.is_empty() {
            return Err(DomainError::InvalidPhoto(format!(
                "photo {}: missing author",
                self.id
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(DomainError::InvalidPhoto(format!(
                "photo {}: zero dimension",
                self.id
            )));
        }
        Ok(())
    }

    /// Width-over-height ratio. Grid views in the presentation layer use
    /// this to reserve a correctly shaped cell before the image bytes
    /// arrive.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// A full author profile, fetched independently of any photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorProfile {
    /// Unique username.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Optional self-description.
    pub bio: Option<String>,
    /// Number of photos published by this author.
    pub total_photos: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Photo {
        Photo {
            id: "abc123".into(),
            width: 4000,
            height: 3000,
            urls: PhotoUrls {
                raw: "https://img.example/raw".into(),
                full: "https://img.example/full".into(),
                regular: "https://img.example/regular".into(),
                small: "https://img.example/small".into(),
                thumb: "https://img.example/thumb".into(),
            },
            author: PhotoAuthor {
                username: "jane".into(),
                name: "Jane Doe".into(),
            },
            likes: 42,
        }
    }

    #[test]
    fn valid_photo_passes() {
        assert_eq!(sample().validate(), Ok(()));
    }

    #[test]
    fn empty_id_is_rejected() {
        let mut photo = sample();
        photo.id.clear();
        assert!(matches!(
            photo.validate(),
            Err(DomainError::InvalidPhoto(_))
        ));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let mut photo = sample();
        photo.height = 0;
        assert!(photo.validate().is_err());
    }

    #[test]
    fn aspect_ratio_is_width_over_height() {
        let photo = sample();
        assert!((photo.aspect_ratio() - 4.0 / 3.0).abs() < f64::EPSILON);
    }
}
