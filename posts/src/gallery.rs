use serde::{Deserialize, Serialize};

use crate::{record::ContentRecord, title::Title};

/// An image gallery slide built from a photo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub original: String,
    pub thumbnail: String,
    pub description: String,
}

impl From<&ContentRecord> for GalleryItem {
    fn from(photo: &ContentRecord) -> Self {
        let field = |name: &str| photo.field_str(name).unwrap_or_default().to_string();

        Self {
            original: field("file"),
            thumbnail: field("thumbnailFile"),
            description: photo.title().to_string(),
        }
    }
}

/// Slides in the order the photos are given.
pub fn gallery<'a, I>(photos: I) -> Vec<GalleryItem>
where
    I: IntoIterator<Item = &'a ContentRecord>,
{
    photos.into_iter().map(GalleryItem::from).collect()
}
