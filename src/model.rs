use serde::{Deserialize, Serialize};

/// One pet record as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    /// Unique identifier, used to build the detail-page path.
    pub id: i64,
    pub name: String,
    pub breed: String,
    /// Image URL. Absent, `null`, or empty means no image was uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Pet {
    /// The image URL when one is present and non-empty.
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.is_empty())
    }

    /// Detail-page path for this pet.
    pub fn detail_path(&self) -> String {
        format!("/pets/{}/", self.id)
    }
}

/// Body of a successful search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub pets: Vec<Pet>,
}
