//! Attachment models.

use serde::{Deserialize, Serialize};

use super::user::UserScheme;

/// Attachment settings, returned by `GET /rest/api/{v}/attachment/meta`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttachmentSettingScheme {
    /// Whether attachments are enabled on the site.
    pub enabled: bool,
    /// Maximum upload size in bytes.
    pub upload_limit: i64,
}

/// Attachment metadata, returned by `GET /rest/api/{v}/attachment/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttachmentMetadataScheme {
    pub id: i64,
    #[serde(rename = "self")]
    pub self_url: String,
    pub filename: String,
    pub author: Option<UserScheme>,
    pub created: String,
    pub size: i64,
    pub mime_type: String,
    pub properties: Option<serde_json::Value>,
    /// Download URL.
    pub content: String,
    pub thumbnail: Option<String>,
}

/// An uploaded attachment, as returned by the upload endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttachmentScheme {
    #[serde(rename = "self")]
    pub self_url: String,
    pub id: String,
    pub filename: String,
    pub author: Option<UserScheme>,
    pub created: String,
    pub size: i64,
    pub mime_type: String,
    pub content: String,
    pub thumbnail: Option<String>,
}

/// Contents of an archive attachment, with human-readable sizes.
///
/// Returned by `GET /rest/api/{v}/attachment/{id}/expand/human`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttachmentHumanMetadataScheme {
    pub id: i64,
    pub name: String,
    pub entries: Vec<AttachmentArchiveEntryScheme>,
    pub total_entry_count: i64,
    pub media_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttachmentArchiveEntryScheme {
    pub path: String,
    pub index: i64,
    /// Size as text, e.g. `"2 kB"`.
    pub size: String,
    pub media_type: String,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_metadata_deserializes() {
        let human: AttachmentHumanMetadataScheme = serde_json::from_value(serde_json::json!({
            "id": 7237823,
            "name": "images.zip",
            "entries": [
                {"path": "MG00N067.JPG", "index": 0, "size": "119 kB", "mediaType": "image/jpeg", "label": "MG00N067.JPG"}
            ],
            "totalEntryCount": 1,
            "mediaType": "application/zip"
        }))
        .unwrap();

        assert_eq!(human.entries.len(), 1);
        assert_eq!(human.entries[0].size, "119 kB");
    }
}
