use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        authors::{create_author, get_author, list_authors},
        books::{books_by_author, create_book, list_books},
        root::root,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(root))
        // Book routes
        .route("/books/", get(list_books).post(create_book))
        .route("/books/{author_id}/", get(books_by_author))
        // Author routes
        .route("/authors/", get(list_authors).post(create_author))
        .route("/authors/{author_id}", get(get_author))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn app() -> Router {
        create_app(AppState::in_memory().await)
    }

    fn json_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_root_greeting() {
        let app = app().await;

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Hello world!");
    }

    #[tokio::test]
    async fn test_list_authors_empty() {
        let app = app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/authors/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_create_and_get_author() {
        let app = app().await;

        // Create an author
        let response = app
            .clone()
            .oneshot(json_post("/authors/", r#"{"name":"Asimov"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let author = body_json(response).await;
        assert_eq!(author["id"], 1);
        assert_eq!(author["name"], "Asimov");

        // Get the author back
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/authors/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let author = body_json(response).await;
        assert_eq!(author["name"], "Asimov");
    }

    #[tokio::test]
    async fn test_duplicate_author_name_is_rejected() {
        let app = app().await;

        let response = app
            .clone()
            .oneshot(json_post("/authors/", r#"{"name":"Asimov"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Same name again: rejected without creating a second row
        let response = app
            .clone()
            .oneshot(json_post("/authors/", r#"{"name":"Asimov"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["detail"], "Such name for author already exists");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/authors/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let authors = body_json(response).await;
        assert_eq!(authors.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_nonexistent_author() {
        let app = app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/authors/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["detail"], "Author not found");
    }

    #[tokio::test]
    async fn test_create_book_and_list_by_author() {
        let app = app().await;

        let response = app
            .clone()
            .oneshot(json_post("/authors/", r#"{"name":"Asimov"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(json_post(
                "/books/",
                r#"{"title":"Foundation","author_id":1}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let book = body_json(response).await;
        assert_eq!(book["id"], 1);
        assert_eq!(book["title"], "Foundation");
        assert_eq!(book["author_id"], 1);

        // Books filtered by author
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/books/1/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let books = body_json(response).await;
        assert_eq!(books.as_array().unwrap().len(), 1);
        assert_eq!(books[0]["title"], "Foundation");
    }

    #[tokio::test]
    async fn test_books_by_author_without_books_is_404() {
        let app = app().await;

        let response = app
            .clone()
            .oneshot(json_post("/authors/", r#"{"name":"Asimov"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Author exists but has no books; indistinguishable from an
        // unknown author on this endpoint.
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/books/1/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["detail"], "Books not found");
    }

    #[tokio::test]
    async fn test_create_book_for_unknown_author_is_400() {
        let app = app().await;

        let response = app
            .oneshot(json_post("/books/", r#"{"title":"Orphan","author_id":99}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_skip_and_limit_bound_listings() {
        let app = app().await;

        for name in ["A", "B", "C", "D"] {
            let response = app
                .clone()
                .oneshot(json_post(
                    "/authors/",
                    &format!(r#"{{"name":"{name}"}}"#),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/authors/?skip=1&limit=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let authors = body_json(response).await;
        assert_eq!(authors.as_array().unwrap().len(), 2);
        assert_eq!(authors[0]["name"], "B");
        assert_eq!(authors[1]["name"], "C");
    }

    #[tokio::test]
    async fn test_list_books_empty() {
        let app = app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/books/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!([]));
    }
}
