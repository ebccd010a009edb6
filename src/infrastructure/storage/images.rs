use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::supabase::{StorageApi, StorageError};

pub const DEFAULT_LIST_LIMIT: u32 = 1000;

const IMAGE_EXTENSIONS: [&str; 6] = [".png", ".jpg", ".jpeg", ".gif", ".webp", ".svg"];

/// One normalized listing entry. The listing API answers with slightly
/// different shapes depending on version and nesting; everything is collapsed
/// into this record before the filtering pipeline runs.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageEntry {
    pub name: String,
    pub id: Option<String>,
    pub metadata: Option<Value>,
}

impl StorageEntry {
    /// Returns `None` for entries that carry no usable name.
    pub fn from_value(value: &Value) -> Option<StorageEntry> {
        let fields = value.as_object()?;

        let name = fields.get("name").and_then(Value::as_str)?;
        if name.is_empty() {
            return None;
        }

        let id = fields.get("id").and_then(Value::as_str).map(str::to_owned);
        let metadata = fields.get("metadata").filter(|m| !m.is_null()).cloned();

        Some(StorageEntry {
            name: name.to_string(),
            id,
            metadata,
        })
    }

    /// The listing API has no explicit type flag. An entry exposing neither an
    /// id nor metadata is assumed to be a folder; a file with zero metadata is
    /// misclassified by this rule.
    pub fn looks_like_directory(&self) -> bool {
        self.id.is_none() && self.metadata.is_none()
    }
}

fn normalize_folder(folder: &str) -> String {
    if folder.ends_with('/') {
        folder.to_string()
    } else {
        format!("{folder}/")
    }
}

fn is_placeholder(name: &str) -> bool {
    name.starts_with('.')
        || name.ends_with(".gitkeep")
        || name.contains(".emptyFolderPlaceholder")
}

fn has_image_extension(name: &str) -> bool {
    let lower = name.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Direct construction of a public object URL, bypassing the resolution call.
/// Path segments are percent-encoded individually so the separators survive.
pub fn build_public_url(endpoint: &str, bucket: &str, path: &str) -> String {
    let encoded = path
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");

    format!("{endpoint}/storage/v1/object/public/{bucket}/{encoded}")
}

/// Pulls a URL out of whichever shape the resolution call answered with:
/// `{"data": {"publicUrl": ..}}`, a flat `{"publicUrl": ..}` or a bare string.
pub fn extract_public_url(response: &Value) -> Option<String> {
    if let Some(url) = response.as_str() {
        return Some(url.to_string());
    }
    if let Some(url) = response.pointer("/data/publicUrl").and_then(Value::as_str) {
        return Some(url.to_string());
    }
    response
        .get("publicUrl")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Lists a storage folder and returns the public URLs of its image files, in
/// listing order. This routine never fails: any error along the way is logged
/// and collapses into an empty result, so the caller cannot distinguish an
/// empty folder from a broken fetch except through the logs.
pub async fn get_storage_images(
    api: &dyn StorageApi,
    bucket: &str,
    folder: &str,
    limit: u32,
) -> Vec<String> {
    match list_folder_images(api, bucket, folder, limit).await {
        Ok(urls) => urls,
        Err(e) => {
            error!("Failed to fetch images from storage: {e}");
            Vec::new()
        }
    }
}

async fn list_folder_images(
    api: &dyn StorageApi,
    bucket: &str,
    folder: &str,
    limit: u32,
) -> Result<Vec<String>, StorageError> {
    let folder_path = normalize_folder(folder);

    info!("Listing files under '{folder_path}' in storage bucket '{bucket}'");

    let response = api.list_objects(bucket, &folder_path, limit, 0).await?;

    let entries = match response {
        Value::Array(entries) => entries,
        _ => {
            warn!("Listing response is not an array, treating folder '{folder_path}' as empty");
            return Ok(Vec::new());
        }
    };

    if entries.is_empty() {
        warn!("No files found under '{folder_path}'");
        return Ok(Vec::new());
    }

    info!("Found {} entries under '{folder_path}'", entries.len());

    let mut image_urls = Vec::new();
    for (idx, raw) in entries.iter().enumerate() {
        let Some(entry) = StorageEntry::from_value(raw) else {
            warn!("Entry {}: unrecognized shape or missing name, skipping", idx + 1);
            continue;
        };

        if entry.looks_like_directory() {
            debug!("'{}' looks like a directory, skipping", entry.name);
            continue;
        }
        if is_placeholder(&entry.name) {
            debug!("'{}' is a placeholder entry, skipping", entry.name);
            continue;
        }
        if !has_image_extension(&entry.name) {
            debug!("'{}' is not an image file, skipping", entry.name);
            continue;
        }

        let file_path = format!("{folder_path}{}", entry.name);
        image_urls.push(resolve_image_url(api, bucket, &file_path).await);
    }

    info!("Resolved {} image URLs under '{folder_path}'", image_urls.len());

    Ok(image_urls)
}

/// Prefers the storage API's own URL resolution; a failed call or a response
/// with no usable URL field falls back to direct construction. Either way the
/// occasional trailing '?' is stripped.
async fn resolve_image_url(api: &dyn StorageApi, bucket: &str, file_path: &str) -> String {
    let url = match api.resolve_public_url(bucket, file_path).await {
        Ok(response) => extract_public_url(&response)
            .unwrap_or_else(|| build_public_url(api.endpoint(), bucket, file_path)),
        Err(e) => {
            debug!("Public URL lookup for '{file_path}' failed ({e}), constructing directly");
            build_public_url(api.endpoint(), bucket, file_path)
        }
    };

    url.trim_end_matches('?').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entries_without_id_or_metadata_look_like_directories() {
        let dir = StorageEntry::from_value(&json!({ "name": "subfolder" })).unwrap();
        assert!(dir.looks_like_directory());

        let with_id =
            StorageEntry::from_value(&json!({ "name": "a.png", "id": "123" })).unwrap();
        assert!(!with_id.looks_like_directory());

        let with_metadata = StorageEntry::from_value(
            &json!({ "name": "a.png", "metadata": { "size": 1024 } }),
        )
        .unwrap();
        assert!(!with_metadata.looks_like_directory());
    }

    #[test]
    fn null_id_and_metadata_count_as_absent() {
        let entry =
            StorageEntry::from_value(&json!({ "name": "sub", "id": null, "metadata": null }))
                .unwrap();
        assert!(entry.looks_like_directory());
    }

    #[test]
    fn entries_without_a_name_are_rejected() {
        assert!(StorageEntry::from_value(&json!({ "id": "123" })).is_none());
        assert!(StorageEntry::from_value(&json!({ "name": "" })).is_none());
        assert!(StorageEntry::from_value(&json!("just a string")).is_none());
    }

    #[test]
    fn placeholder_names_are_recognized() {
        assert!(is_placeholder(".hidden"));
        assert!(is_placeholder("keep.gitkeep"));
        assert!(is_placeholder("x.emptyFolderPlaceholder"));
        assert!(!is_placeholder("shot1.png"));
    }

    #[test]
    fn extension_filter_is_case_insensitive_but_keeps_the_name() {
        assert!(has_image_extension("shot1.PNG"));
        assert!(has_image_extension("photo.jpeg"));
        assert!(has_image_extension("icon.svg"));
        assert!(!has_image_extension("photo.TXT"));
        assert!(!has_image_extension("notes.md"));
    }

    #[test]
    fn public_urls_are_built_with_per_segment_encoding() {
        let url = build_public_url(
            "https://abc123.supabase.co",
            "screenshots",
            "project 1/shot 1.png",
        );
        assert_eq!(
            url,
            "https://abc123.supabase.co/storage/v1/object/public/screenshots/project%201/shot%201.png"
        );
    }

    #[test]
    fn extract_public_url_handles_all_accepted_shapes() {
        let nested = json!({ "data": { "publicUrl": "https://x/a.png" } });
        assert_eq!(extract_public_url(&nested).as_deref(), Some("https://x/a.png"));

        let flat = json!({ "publicUrl": "https://x/b.png" });
        assert_eq!(extract_public_url(&flat).as_deref(), Some("https://x/b.png"));

        let bare = json!("https://x/c.png");
        assert_eq!(extract_public_url(&bare).as_deref(), Some("https://x/c.png"));

        let useless = json!({ "data": {} });
        assert_eq!(extract_public_url(&useless), None);
    }

    #[test]
    fn folder_normalization_appends_exactly_one_separator() {
        assert_eq!(normalize_folder("project1"), "project1/");
        assert_eq!(normalize_folder("project1/"), "project1/");
    }
}
