//! Wire types for the remote photo service.
//!
//! The service is lenient about what it sends; every field is optional
//! here and conversion into domain types happens per record, so one
//! malformed photo drops silently instead of failing the whole page.

use serde::Deserialize;

use aperture_domain::{AuthorProfile, Photo, PhotoAuthor, PhotoUrls};

/// One photo record as the service sends it.
#[derive(Debug, Deserialize)]
pub(crate) struct PhotoDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub urls: Option<UrlsDto>,
    #[serde(default)]
    pub user: Option<UserDto>,
    #[serde(default)]
    pub likes: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UrlsDto {
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub full: Option<String>,
    #[serde(default)]
    pub regular: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserDto {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// The `{total, total_pages, results}` envelope the search endpoint wraps
/// its records in.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelopeDto {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub results: Vec<PhotoDto>,
}

/// A full user profile record.
#[derive(Debug, Deserialize)]
pub(crate) struct UserProfileDto {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub total_photos: Option<u64>,
}

impl PhotoDto {
    /// Converts into a validated domain photo, or `None` when a required
    /// field is missing or invalid.
    pub(crate) fn into_photo(self) -> Option<Photo> {
        let urls = self.urls?;
        let user = self.user?;
        let photo = Photo {
            id: self.id?,
            width: self.width?,
            height: self.height?,
            urls: PhotoUrls {
                raw: urls.raw?,
                full: urls.full?,
                regular: urls.regular?,
                small: urls.small?,
                thumb: urls.thumb?,
            },
            author: PhotoAuthor {
                username: user.username?,
                name: user.name.unwrap_or_default(),
            },
            likes: self.likes.unwrap_or(0),
        };
        photo.validate().ok()?;
        Some(photo)
    }
}

impl UserProfileDto {
    pub(crate) fn into_profile(self) -> Option<AuthorProfile> {
        let username = self.username?;
        if username.is_empty() {
            return None;
        }
        Some(AuthorProfile {
            username,
            name: self.name.unwrap_or_default(),
            bio: self.bio,
            total_photos: self.total_photos.unwrap_or(0),
        })
    }
}

/// Converts a page of records, dropping the invalid ones.
pub(crate) fn collect_photos(records: Vec<PhotoDto>) -> Vec<Photo> {
    let received = records.len();
    let photos: Vec<Photo> = records
        .into_iter()
        .filter_map(PhotoDto::into_photo)
        .collect();
    if photos.len() < received {
        tracing::warn!(
            dropped = received - photos.len(),
            "dropped photo records failing validation"
        );
    }
    photos
}
