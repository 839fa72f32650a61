use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::models::Project;
use crate::AppState;

/// Returns the full catalog in insertion order. No pagination, no
/// filtering; an absent catalog file reads as an empty array.
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = state.catalog.list().await.map_err(ApiError::Listing)?;
    Ok(Json(projects))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;
    use crate::storage::MockObjectStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(dir: &Path) -> (Router, Arc<CatalogStore>) {
        let catalog = Arc::new(CatalogStore::new(dir.join("projects.json")));
        let state = AppState {
            catalog: catalog.clone(),
            store: Arc::new(MockObjectStore::new()),
            upload_dir: dir.join("uploads"),
        };
        let router = Router::new()
            .route("/projects", get(list_projects))
            .with_state(state);
        (router, catalog)
    }

    async fn get_projects(router: Router) -> (StatusCode, String) {
        let request = Request::builder()
            .uri("/projects")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn missing_catalog_file_returns_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let (router, _) = app(dir.path());

        let (status, body) = get_projects(router).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn returns_appended_records_verbatim_and_idempotently() {
        let dir = tempfile::tempdir().unwrap();
        let (router, catalog) = app(dir.path());
        catalog
            .append(Project {
                id: 123,
                title: "Demo".to_string(),
                description: "A test".to_string(),
                url: "https://bucket.example/123-logo.png".to_string(),
            })
            .await
            .unwrap();

        let (status, first) = get_projects(router.clone()).await;
        assert_eq!(status, StatusCode::OK);

        let parsed: Vec<Project> = serde_json::from_str(&first).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].id, 123);
        assert_eq!(parsed[0].title, "Demo");
        assert_eq!(parsed[0].url, "https://bucket.example/123-logo.png");

        let (_, second) = get_projects(router).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn corrupt_catalog_surfaces_as_server_error() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("projects.json"), b"{{{")
            .await
            .unwrap();
        let (router, _) = app(dir.path());

        let (status, body) = get_projects(router).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Failed to load projects.");
    }
}
