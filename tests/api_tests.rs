//! Integration tests for discogs-rs against a local mock server.
//!
//! Every test stands up an `httpmock` server and points the client at
//! it via the base-URL override, so the suite runs without network
//! access or real credentials.
//!
//! Run with: cargo test --test api_tests

use std::sync::Once;

use httpmock::{Method::GET, MockServer};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use discogs_rs::prelude::*;

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// An anonymous client aimed at the mock server.
fn anonymous_client(server: &MockServer) -> DiscogsClient {
    init_logging();
    let mut config = ClientConfig::default()
        .with_base_url(server.base_url())
        .with_username("memory");
    config.credentials = None;
    DiscogsClient::with_config(config).expect("client should build")
}

/// A token-authenticated client aimed at the mock server.
fn token_client(server: &MockServer, token: &str) -> DiscogsClient {
    init_logging();
    let config = ClientConfig::default()
        .with_base_url(server.base_url())
        .with_username("memory")
        .with_credentials(Credentials::token(token));
    DiscogsClient::with_config(config).expect("client should build")
}

fn collection_body() -> serde_json::Value {
    json!({
        "pagination": {"page": 1, "pages": 1, "per_page": 50, "items": 1},
        "releases": [{
            "id": 2464521,
            "instance_id": 1,
            "folder_id": 1,
            "rating": 4,
            "basic_information": {
                "id": 2464521,
                "title": "Dreamboat Annie",
                "year": 1976,
                "artists": [{"id": 153073, "name": "Heart"}]
            }
        }]
    })
}

// ============================================================================
// AUTHENTICATION
// ============================================================================

mod auth_tests {
    use super::*;

    #[tokio::test]
    async fn test_token_auth_header_on_user_path() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/users/memory")
                .header("authorization", "Discogs token=abc");
            then.status(200)
                .json_body(json!({"id": 1, "username": "memory"}));
        });

        let client = token_client(&server, "abc");
        let profile = client.users().profile().await.expect("profile");

        mock.assert();
        assert_eq!(profile.username, "memory");
    }

    #[tokio::test]
    async fn test_key_secret_auth_header() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/releases/1")
                .header("authorization", "Discogs key=k1, secret=s1");
            then.status(200).json_body(json!({"id": 1, "title": "Test"}));
        });

        let config = ClientConfig::default()
            .with_base_url(server.base_url())
            .with_username("memory")
            .with_credentials(Credentials::key_secret("k1", "s1"));
        let client = DiscogsClient::with_config(config).unwrap();

        client.releases().get(ReleaseId::new(1)).await.expect("release");
        mock.assert();
    }

    #[tokio::test]
    async fn test_anonymous_requests_send_no_auth_header() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/releases/1").matches(|req| {
                !req.headers
                    .as_ref()
                    .map(|headers| {
                        headers
                            .iter()
                            .any(|(name, _)| name.eq_ignore_ascii_case("authorization"))
                    })
                    .unwrap_or(false)
            });
            then.status(200).json_body(json!({"id": 1, "title": "Test"}));
        });

        let client = anonymous_client(&server);
        client.releases().get(ReleaseId::new(1)).await.expect("release");
        mock.assert();
    }
}

// ============================================================================
// QUERY COMPOSITION
// ============================================================================

mod query_tests {
    use super::*;

    #[tokio::test]
    async fn test_collection_defaults() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/users/memory/collection")
                .query_param("sort", "added")
                .query_param("sort_order", "desc")
                .query_param("per_page", "50")
                .query_param("page", "1");
            then.status(200).json_body(collection_body());
        });

        let client = anonymous_client(&server);
        let page = client.collection().list(None).await.expect("collection");

        mock.assert();
        assert_eq!(page.releases[0].basic_information.title, "Dreamboat Annie");
    }

    #[tokio::test]
    async fn test_collection_unrecognized_sort_falls_back_to_added() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/users/memory/collection")
                .query_param("sort", "added");
            then.status(200).json_body(collection_body());
        });

        let client = anonymous_client(&server);
        client
            .collection()
            .list(Some(PageQuery::default().sort("bogus")))
            .await
            .expect("collection");
        mock.assert();
    }

    #[tokio::test]
    async fn test_collection_explicit_parameters() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/users/memory/collection")
                .query_param("sort", "artist")
                .query_param("sort_order", "asc")
                .query_param("page", "3");
            then.status(200).json_body(collection_body());
        });

        let client = anonymous_client(&server);
        client
            .collection()
            .list(Some(PageQuery::default().sort("artist").sort_order("asc").page(3)))
            .await
            .expect("collection");
        mock.assert();
    }

    #[tokio::test]
    async fn test_per_page_comes_from_config() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/users/memory/wants")
                .query_param("per_page", "10");
            then.status(200).json_body(json!({
                "pagination": {"page": 1, "pages": 1, "per_page": 10, "items": 0},
                "wants": []
            }));
        });

        let mut config = ClientConfig::default()
            .with_base_url(server.base_url())
            .with_username("memory")
            .with_per_page(10);
        config.credentials = None;
        let client = DiscogsClient::with_config(config).unwrap();

        client.wantlist().list(None).await.expect("wantlist");
        mock.assert();
    }

    #[tokio::test]
    async fn test_artist_releases_sort_fallback_to_title() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/artists/108713/releases")
                .query_param("sort", "title")
                .query_param("sort_order", "desc");
            then.status(200).json_body(json!({
                "pagination": {"page": 1, "pages": 1, "per_page": 50, "items": 0},
                "releases": []
            }));
        });

        let client = anonymous_client(&server);
        // "rating" is valid for collections but not artist releases
        client
            .artists()
            .releases(ArtistId::new(108713), Some(PageQuery::default().sort("rating")))
            .await
            .expect("artist releases");
        mock.assert();
    }

    #[tokio::test]
    async fn test_label_releases_accepts_catno_sort() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/labels/1/releases")
                .query_param("sort", "catno");
            then.status(200).json_body(json!({
                "pagination": {"page": 1, "pages": 1, "per_page": 50, "items": 0},
                "releases": []
            }));
        });

        let client = anonymous_client(&server);
        client
            .labels()
            .releases(LabelId::new(1), Some(PageQuery::default().sort("catno")))
            .await
            .expect("label releases");
        mock.assert();
    }

    #[tokio::test]
    async fn test_folder_releases_path() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/users/memory/collection/folders/3/releases")
                .query_param("sort", "added")
                .query_param("page", "1");
            then.status(200).json_body(collection_body());
        });

        let client = anonymous_client(&server);
        client
            .collection()
            .folder_releases(FolderId::new(3), None)
            .await
            .expect("folder releases");
        mock.assert();
    }
}

// ============================================================================
// RESOURCE ENDPOINTS
// ============================================================================

mod endpoint_tests {
    use super::*;

    #[tokio::test]
    async fn test_collection_folders() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/users/memory/collection/folders");
            then.status(200).json_body(json!({
                "folders": [
                    {"id": 0, "name": "All", "count": 78},
                    {"id": 1, "name": "Uncategorized", "count": 20}
                ]
            }));
        });

        let client = anonymous_client(&server);
        let list = client.collection().folders().await.expect("folders");

        mock.assert();
        assert_eq!(list.folders.len(), 2);
        assert_eq!(list.folders[0].name, "All");
    }

    #[tokio::test]
    async fn test_collection_value() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/users/memory/collection/value");
            then.status(200).json_body(json!({
                "minimum": "$150.00",
                "median": "$200.00",
                "maximum": "$250.00"
            }));
        });

        let client = anonymous_client(&server);
        let value = client.collection().value().await.expect("value");

        mock.assert();
        assert_eq!(value.median, "$200.00");
    }

    #[tokio::test]
    async fn test_release_and_ratings() {
        let server = MockServer::start();
        let release_mock = server.mock(|when, then| {
            when.method(GET).path("/releases/249504");
            then.status(200).json_body(json!({
                "id": 249504,
                "title": "Never Gonna Give You Up",
                "year": 1987,
                "community": {"have": 42, "want": 7}
            }));
        });
        let user_rating_mock = server.mock(|when, then| {
            when.method(GET).path("/releases/249504/rating/memory");
            then.status(200).json_body(json!({
                "release_id": 249504, "username": "memory", "rating": 5
            }));
        });
        let community_mock = server.mock(|when, then| {
            when.method(GET).path("/releases/249504/rating");
            then.status(200).json_body(json!({
                "release_id": 249504, "rating": {"count": 10, "average": 4.3}
            }));
        });
        let stats_mock = server.mock(|when, then| {
            when.method(GET).path("/releases/249504/stats");
            then.status(200).json_body(json!({"num_have": 100, "num_want": 25}));
        });

        let client = anonymous_client(&server);
        let id = ReleaseId::new(249504);

        let release = client.releases().get(id).await.expect("release");
        assert_eq!(release.title, "Never Gonna Give You Up");

        let rating = client.releases().user_rating(id).await.expect("rating");
        assert_eq!(rating.rating, 5);

        let community = client.releases().community_rating(id).await.expect("community");
        assert_eq!(community.rating.count, 10);

        let stats = client.releases().stats(id).await.expect("stats");
        assert_eq!(stats.num_have, Some(100));

        release_mock.assert();
        user_rating_mock.assert();
        community_mock.assert();
        stats_mock.assert();
    }

    #[tokio::test]
    async fn test_master_and_versions() {
        let server = MockServer::start();
        let master_mock = server.mock(|when, then| {
            when.method(GET).path("/masters/1000");
            then.status(200).json_body(json!({
                "id": 1000, "title": "Stardiver", "main_release": 6425}));
        });
        let versions_mock = server.mock(|when, then| {
            when.method(GET).path("/masters/1000/versions");
            then.status(200).json_body(json!({
                "pagination": {"page": 1, "pages": 1, "per_page": 50, "items": 2},
                "versions": [
                    {"id": 6425, "title": "Stardiver", "format": "CD, Album"},
                    {"id": 66785, "title": "Stardiver", "format": "2xLP"}
                ]
            }));
        });

        let client = anonymous_client(&server);
        let master = client.masters().get(MasterId::new(1000)).await.expect("master");
        assert_eq!(master.main_release, Some(6425));

        let versions = client.masters().versions(MasterId::new(1000)).await.expect("versions");
        assert_eq!(versions.versions.len(), 2);

        master_mock.assert();
        versions_mock.assert();
    }

    #[tokio::test]
    async fn test_artist_and_label_details() {
        let server = MockServer::start();
        let artist_mock = server.mock(|when, then| {
            when.method(GET).path("/artists/108713");
            then.status(200).json_body(json!({"id": 108713, "name": "Nickelback"}));
        });
        let label_mock = server.mock(|when, then| {
            when.method(GET).path("/labels/1");
            then.status(200).json_body(json!({"id": 1, "name": "Planet E"}));
        });

        let client = anonymous_client(&server);

        let artist = client.artists().get(ArtistId::new(108713)).await.expect("artist");
        assert_eq!(artist.name, "Nickelback");

        let label = client.labels().get(LabelId::new(1)).await.expect("label");
        assert_eq!(label.name, "Planet E");

        artist_mock.assert();
        label_mock.assert();
    }

    #[tokio::test]
    async fn test_raw_passthrough() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/marketplace/stats/249504");
            then.status(200).json_body(json!({"num_for_sale": 3, "blocked_from_sale": false}));
        });

        let client = anonymous_client(&server);
        let body = client
            .get_raw("marketplace/stats/249504")
            .await
            .expect("raw request");

        mock.assert();
        assert_eq!(body["num_for_sale"], 3);
    }
}

// ============================================================================
// RATE-LIMIT TRACKING
// ============================================================================

mod rate_limit_tests {
    use super::*;

    #[tokio::test]
    async fn test_snapshot_starts_as_placeholder() {
        let server = MockServer::start();
        let client = anonymous_client(&server);
        assert_eq!(
            client.rate_limit(),
            RateLimit {
                limit: 25,
                remaining: 25,
                used: 0
            }
        );
    }

    #[tokio::test]
    async fn test_snapshot_overwritten_on_every_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/releases/1");
            then.status(200)
                .header("x-discogs-ratelimit", "60")
                .header("x-discogs-ratelimit-remaining", "59")
                .header("x-discogs-ratelimit-used", "1")
                .json_body(json!({"id": 1, "title": "First"}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/releases/2");
            then.status(200)
                .header("x-discogs-ratelimit", "60")
                .header("x-discogs-ratelimit-remaining", "58")
                .header("x-discogs-ratelimit-used", "2")
                .json_body(json!({"id": 2, "title": "Second"}));
        });

        let client = anonymous_client(&server);

        client.releases().get(ReleaseId::new(1)).await.expect("first");
        assert_eq!(client.rate_limit().remaining, 59);

        client.releases().get(ReleaseId::new(2)).await.expect("second");
        let snapshot = client.rate_limit();
        assert_eq!(snapshot.limit, 60);
        assert_eq!(snapshot.remaining, 58);
        assert_eq!(snapshot.used, 2);
    }

    #[tokio::test]
    async fn test_snapshot_updated_from_error_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/releases/404");
            then.status(404)
                .header("x-discogs-ratelimit", "60")
                .header("x-discogs-ratelimit-remaining", "57")
                .header("x-discogs-ratelimit-used", "3")
                .json_body(json!({"message": "Release not found."}));
        });

        let client = anonymous_client(&server);
        let result = client.releases().get(ReleaseId::new(404)).await;

        assert!(result.is_err());
        assert_eq!(client.rate_limit().remaining, 57);
    }
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

mod error_tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_maps_to_typed_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/releases/999999999");
            then.status(404)
                .json_body(json!({"message": "Release not found."}));
        });

        let client = anonymous_client(&server);
        let err = client
            .releases()
            .get(ReleaseId::new(999999999))
            .await
            .expect_err("should fail");

        match err {
            Error::NotFound(message) => assert_eq!(message, "Release not found."),
            other => panic!("expected NotFound, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_typed_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users/memory/collection/value");
            then.status(401).json_body(json!({
                "message": "You must authenticate to access this resource."
            }));
        });

        let client = anonymous_client(&server);
        let err = client.collection().value().await.expect_err("should fail");
        assert!(matches!(err, Error::Unauthorized(_)));
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn test_429_maps_to_rate_limited() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/releases/1");
            then.status(429)
                .header("retry-after", "30")
                .json_body(json!({"message": "You are making requests too quickly."}));
        });

        let client = anonymous_client(&server);
        let err = client
            .releases()
            .get(ReleaseId::new(1))
            .await
            .expect_err("should fail");

        match err {
            Error::RateLimited { retry_after_secs } => assert_eq!(retry_after_secs, 30),
            other => panic!("expected RateLimited, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/releases/1");
            then.status(200).body("{ not json");
        });

        let client = anonymous_client(&server);
        let err = client
            .releases()
            .get(ReleaseId::new(1))
            .await
            .expect_err("should fail");
        assert!(matches!(err, Error::Json(_)));
    }

    #[tokio::test]
    async fn test_server_error_carries_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/releases/1");
            then.status(500).json_body(json!({"message": "Internal error."}));
        });

        let client = anonymous_client(&server);
        let err = client
            .releases()
            .get(ReleaseId::new(1))
            .await
            .expect_err("should fail");

        assert!(err.is_server_error());
        match err {
            Error::Api { status, message, .. } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal error.");
            }
            other => panic!("expected Api, got: {other:?}"),
        }
    }
}
