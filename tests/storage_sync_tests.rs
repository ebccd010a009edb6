use async_trait::async_trait;
use serde_json::{Value, json};

use portfolio_api::storage::{
    images::{DEFAULT_LIST_LIMIT, get_storage_images},
    supabase::{StorageApi, StorageError},
};

const ENDPOINT: &str = "https://abc123.supabase.co";

/// Scriptable stand-in for the storage service.
struct FakeStorage {
    listing: Result<Value, String>,
    resolve_fails_for: Vec<String>,
    resolve_shape: ResolveShape,
}

enum ResolveShape {
    Nested,
    Flat,
    BareString,
    TrailingQuestionMark,
    Useless,
}

impl FakeStorage {
    fn with_listing(listing: Value) -> Self {
        FakeStorage {
            listing: Ok(listing),
            resolve_fails_for: Vec::new(),
            resolve_shape: ResolveShape::Nested,
        }
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{ENDPOINT}/storage/v1/object/public/{bucket}/{path}")
    }
}

#[async_trait]
impl StorageApi for FakeStorage {
    fn endpoint(&self) -> &str {
        ENDPOINT
    }

    async fn list_objects(
        &self,
        _bucket: &str,
        _prefix: &str,
        _limit: u32,
        _offset: u32,
    ) -> Result<Value, StorageError> {
        self.listing
            .clone()
            .map_err(StorageError::UnexpectedResponse)
    }

    async fn resolve_public_url(&self, bucket: &str, path: &str) -> Result<Value, StorageError> {
        if self.resolve_fails_for.iter().any(|p| p == path) {
            return Err(StorageError::Request("connection reset".to_string()));
        }

        let url = self.public_url(bucket, path);
        Ok(match self.resolve_shape {
            ResolveShape::Nested => json!({ "data": { "publicUrl": url } }),
            ResolveShape::Flat => json!({ "publicUrl": url }),
            ResolveShape::BareString => json!(url),
            ResolveShape::TrailingQuestionMark => json!({ "data": { "publicUrl": format!("{url}?") } }),
            ResolveShape::Useless => json!({ "data": {} }),
        })
    }
}

fn mixed_listing() -> Value {
    json!([
        { "name": ".gitkeep" },
        { "name": "photo.TXT", "id": "f1", "metadata": { "size": 10 } },
        { "name": "shot1.PNG", "id": "f2", "metadata": { "size": 2048 } },
        { "name": "thumbnails", "id": null, "metadata": null },
        { "name": "shot2.jpg", "id": "f3", "metadata": { "size": 4096 } }
    ])
}

#[tokio::test]
async fn only_image_files_survive_and_order_is_preserved() {
    let storage = FakeStorage::with_listing(mixed_listing());

    let urls = get_storage_images(&storage, "screenshots", "project1", DEFAULT_LIST_LIMIT).await;

    assert_eq!(
        urls,
        vec![
            format!("{ENDPOINT}/storage/v1/object/public/screenshots/project1/shot1.PNG"),
            format!("{ENDPOINT}/storage/v1/object/public/screenshots/project1/shot2.jpg"),
        ]
    );
    // Case of the stored file name is preserved.
    assert!(urls[0].ends_with("shot1.PNG"));
}

#[tokio::test]
async fn folder_without_trailing_separator_is_normalized() {
    let storage = FakeStorage::with_listing(json!([
        { "name": "a.png", "id": "f1", "metadata": {} }
    ]));

    let with_slash =
        get_storage_images(&storage, "screenshots", "project1/", DEFAULT_LIST_LIMIT).await;
    let without_slash =
        get_storage_images(&storage, "screenshots", "project1", DEFAULT_LIST_LIMIT).await;

    assert_eq!(with_slash, without_slash);
    assert!(with_slash[0].contains("/project1/a.png"));
}

#[tokio::test]
async fn non_array_listing_response_yields_an_empty_result() {
    let storage = FakeStorage::with_listing(json!({ "error": "bucket not found" }));

    let urls = get_storage_images(&storage, "screenshots", "project1", DEFAULT_LIST_LIMIT).await;
    assert!(urls.is_empty());
}

#[tokio::test]
async fn listing_failure_yields_an_empty_result_instead_of_an_error() {
    let storage = FakeStorage {
        listing: Err("list returned HTTP 500".to_string()),
        resolve_fails_for: Vec::new(),
        resolve_shape: ResolveShape::Nested,
    };

    let urls = get_storage_images(&storage, "screenshots", "project1", DEFAULT_LIST_LIMIT).await;
    assert!(urls.is_empty());
}

#[tokio::test]
async fn resolver_failure_for_one_file_falls_back_without_aborting_the_batch() {
    let storage = FakeStorage {
        listing: Ok(mixed_listing()),
        resolve_fails_for: vec!["project1/shot1.PNG".to_string()],
        resolve_shape: ResolveShape::Nested,
    };

    let urls = get_storage_images(&storage, "screenshots", "project1", DEFAULT_LIST_LIMIT).await;

    // The failed file still gets a directly constructed URL and the rest of
    // the batch is unaffected.
    assert_eq!(urls.len(), 2);
    assert_eq!(
        urls[0],
        format!("{ENDPOINT}/storage/v1/object/public/screenshots/project1/shot1.PNG")
    );
}

#[tokio::test]
async fn resolver_responses_with_no_usable_url_fall_back_to_construction() {
    let storage = FakeStorage {
        listing: Ok(json!([{ "name": "a.png", "id": "f1", "metadata": {} }])),
        resolve_fails_for: Vec::new(),
        resolve_shape: ResolveShape::Useless,
    };

    let urls = get_storage_images(&storage, "screenshots", "project1", DEFAULT_LIST_LIMIT).await;
    assert_eq!(
        urls,
        vec![format!(
            "{ENDPOINT}/storage/v1/object/public/screenshots/project1/a.png"
        )]
    );
}

#[tokio::test]
async fn flat_and_bare_string_resolver_shapes_are_accepted() {
    for shape in [ResolveShape::Flat, ResolveShape::BareString] {
        let storage = FakeStorage {
            listing: Ok(json!([{ "name": "a.png", "id": "f1", "metadata": {} }])),
            resolve_fails_for: Vec::new(),
            resolve_shape: shape,
        };

        let urls =
            get_storage_images(&storage, "screenshots", "project1", DEFAULT_LIST_LIMIT).await;
        assert_eq!(urls.len(), 1);
        assert!(urls[0].ends_with("/project1/a.png"));
    }
}

#[tokio::test]
async fn trailing_question_marks_are_stripped_from_resolved_urls() {
    let storage = FakeStorage {
        listing: Ok(json!([{ "name": "a.png", "id": "f1", "metadata": {} }])),
        resolve_fails_for: Vec::new(),
        resolve_shape: ResolveShape::TrailingQuestionMark,
    };

    let urls = get_storage_images(&storage, "screenshots", "project1", DEFAULT_LIST_LIMIT).await;
    assert!(urls[0].ends_with("a.png"));
}

#[tokio::test]
async fn entries_with_no_name_are_skipped_not_fatal() {
    let storage = FakeStorage::with_listing(json!([
        { "id": "f1", "metadata": {} },
        "garbage",
        { "name": "a.png", "id": "f2", "metadata": {} }
    ]));

    let urls = get_storage_images(&storage, "screenshots", "project1", DEFAULT_LIST_LIMIT).await;
    assert_eq!(urls.len(), 1);
}
