// tests/e2e_http.rs
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::json;

mod support;
use support::*;

#[tokio::test]
async fn health_is_public() {
    let app = build_test_app();
    let (status, body) = send(&app.router, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn created_article_is_found_by_category_and_search() {
    let app = build_test_app();

    let (status, created) = send(
        &app.router,
        as_admin(
            "POST",
            "/api/news",
            Some(json!({ "category": "World", "titleEnglish": "Rain Today" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_owned();

    let (status, page) = send(&app.router, get("/api/news?category=World&page=0&size=10")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&page), vec![id.clone()]);
    assert_eq!(page["totalElements"], 1);
    assert_eq!(page["totalPages"], 1);
    assert_eq!(page["hasNext"], false);
    assert_eq!(page["hasPrevious"], false);

    let (_, page) = send(&app.router, get("/api/news?category=all&search=rain")).await;
    assert_eq!(ids(&page), vec![id.clone()]);

    let (_, page) = send(&app.router, get("/api/news?category=Sports")).await;
    assert!(ids(&page).is_empty());
    assert_eq!(page["totalElements"], 0);
    assert_eq!(page["totalPages"], 0);

    let (_, page) = send(&app.router, get("/api/news/category/World")).await;
    assert_eq!(ids(&page), vec![id.clone()]);

    let (_, page) = send(&app.router, get("/api/news/category/World?search=TODAY")).await;
    assert_eq!(ids(&page), vec![id]);

    let (_, page) = send(&app.router, get("/api/news/category/World?search=snow")).await;
    assert_eq!(page["totalElements"], 0);
}

#[tokio::test]
async fn listing_reports_paging_shape() {
    let app = build_test_app();
    for n in 0..12 {
        seed(&app.store, ArticleBuilder::new().title(format!("Story {n}")).build()).await;
    }

    let (status, page) = send(&app.router, get("/api/news?page=1&size=5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["page"], 1);
    assert_eq!(page["size"], 5);
    assert_eq!(page["totalElements"], 12);
    assert_eq!(page["totalPages"], 3);
    assert_eq!(page["hasNext"], true);
    assert_eq!(page["hasPrevious"], true);
    assert_eq!(ids(&page).len(), 5);
}

#[tokio::test]
async fn non_numeric_page_is_a_bad_request() {
    let app = build_test_app();
    let (status, body) = send(&app.router, get("/api/news?page=first")).await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "Bad Request");
}

#[tokio::test]
async fn single_article_read_is_public() {
    let app = build_test_app();
    let id = seed(
        &app.store,
        ArticleBuilder::new()
            .title("Rain Today")
            .featured(true)
            .build(),
    )
    .await;

    let (status, body) = send(&app.router, get(&format!("/api/news/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["titleEnglish"], "Rain Today");
    assert_eq!(body["isFeatured"], true);

    let (status, body) = send(&app.router, get("/api/news/missing")).await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn mutations_require_a_token() {
    let app = build_test_app();
    let id = seed(&app.store, ArticleBuilder::new().title("Rain Today").build()).await;

    let requests = [
        authorized("POST", "/api/news", None, Some(json!({ "titleEnglish": "x" }))),
        authorized("PUT", &format!("/api/news/{id}"), None, Some(json!({ "titleEnglish": "x" }))),
        authorized("DELETE", &format!("/api/news/{id}"), None, None),
        authorized("DELETE", &format!("/api/news/{id}"), Some("forged"), None),
    ];
    for request in requests {
        let (status, body) = send(&app.router, request).await;
        assert_error(status, &body, StatusCode::UNAUTHORIZED, "Unauthorized");
    }
    assert!(app.store.calls().is_empty());
}

#[tokio::test]
async fn token_without_write_right_is_forbidden() {
    let app = build_test_app();
    let (status, body) = send(
        &app.router,
        authorized(
            "POST",
            "/api/news",
            Some(READER_TOKEN),
            Some(json!({ "titleEnglish": "x" })),
        ),
    )
    .await;
    assert_error(status, &body, StatusCode::FORBIDDEN, "Forbidden");
    assert!(app.store.calls().is_empty());
}

#[tokio::test]
async fn update_accepts_string_flags_and_merges() {
    let app = build_test_app();
    let id = seed(
        &app.store,
        ArticleBuilder::new()
            .title("Rain Today")
            .category("World")
            .build(),
    )
    .await;

    let (status, body) = send(
        &app.router,
        as_admin(
            "PUT",
            &format!("/api/news/{id}"),
            Some(json!({ "isFeatured": "TRUE", "descriptionEnglish": "Heavy showers" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["isFeatured"], true);
    assert_eq!(body["titleEnglish"], "Rain Today");
    assert_eq!(body["category"], "World");
    assert_eq!(body["descriptionEnglish"], "Heavy showers");
}

#[tokio::test]
async fn delete_confirms_and_then_reports_not_found() {
    let app = build_test_app();
    let id = seed(&app.store, ArticleBuilder::new().title("Rain Today").build()).await;
    let uri = format!("/api/news/{id}");

    let (status, body) = send(&app.router, as_admin("DELETE", &uri, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully deleted");

    let (status, body) = send(&app.router, as_admin("DELETE", &uri, None)).await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "Not Found");

    let (status, _) = send(&app.router, get(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_routes_are_denied_by_default() {
    let app = build_test_app();
    for uri in ["/api/admin/news", "/api/admin/news/anything"] {
        let (status, body) = send(&app.router, get(uri)).await;
        assert_error(status, &body, StatusCode::UNAUTHORIZED, "Unauthorized");
    }

    let (status, body) = send(
        &app.router,
        authorized("GET", "/api/admin/news", Some(READER_TOKEN), None),
    )
    .await;
    assert_error(status, &body, StatusCode::FORBIDDEN, "Forbidden");
}

#[tokio::test]
async fn admin_listing_applies_exact_filters() {
    let app = build_test_app();
    let tech = seed(
        &app.store,
        ArticleBuilder::new().category("Tech").featured(true).build(),
    )
    .await;
    seed(&app.store, ArticleBuilder::new().category("Technology").build()).await;
    seed(
        &app.store,
        ArticleBuilder::new().category("Tech").featured(false).build(),
    )
    .await;

    let (status, page) = send(
        &app.router,
        as_admin("GET", "/api/admin/news?category=Tech&isFeatured=true", None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&page), vec![tech]);
    assert_eq!(page["page"], 0);
    assert_eq!(page["size"], 1);
    assert_eq!(page["totalPages"], 1);

    let (_, page) = send(
        &app.router,
        as_admin("GET", "/api/admin/news?search=tech", None),
    )
    .await;
    assert_eq!(page["totalElements"], 3);
}

#[tokio::test]
async fn admin_listing_treats_all_category_as_unrestricted() {
    let app = build_test_app();
    for category in ["World", "Sports", "Tech"] {
        seed(&app.store, ArticleBuilder::new().category(category).build()).await;
    }

    for uri in ["/api/admin/news?category=ALL", "/api/admin/news?category=all"] {
        let (status, page) = send(&app.router, as_admin("GET", uri, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["totalElements"], 3);
        assert_eq!(ids(&page).len(), 3);
    }

    let (status, page) = send(
        &app.router,
        as_admin("GET", "/api/admin/news?category=all&search=sport", None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["totalElements"], 1);
}

#[tokio::test]
async fn admin_listing_rejects_bad_filters() {
    let app = build_test_app();
    for uri in [
        "/api/admin/news?author=someone",
        "/api/admin/news?search=rain&category=World",
        "/api/admin/news?size=ten",
    ] {
        let (status, body) = send(&app.router, as_admin("GET", uri, None)).await;
        assert_error(status, &body, StatusCode::BAD_REQUEST, "Bad Request");
    }
}

#[tokio::test]
async fn admin_get_by_id() {
    let app = build_test_app();
    let id = seed(&app.store, ArticleBuilder::new().title("Rain Today").build()).await;

    let (status, body) = send(
        &app.router,
        as_admin("GET", &format!("/api/admin/news/{id}"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["titleEnglish"], "Rain Today");
}

#[tokio::test]
async fn login_issues_a_token_for_valid_credentials() {
    let app = build_test_app();

    let (status, body) = send(
        &app.router,
        authorized(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "username": "admin", "password": ADMIN_PASSWORD })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token"], "token-for-admin");
    assert_eq!(body["expiresIn"], 3600);

    for (username, password) in [("admin", "wrong"), ("root", ADMIN_PASSWORD)] {
        let (status, body) = send(
            &app.router,
            authorized(
                "POST",
                "/api/auth/login",
                None,
                Some(json!({ "username": username, "password": password })),
            ),
        )
        .await;
        assert_error(status, &body, StatusCode::UNAUTHORIZED, "Unauthorized");
        assert_eq!(body["message"], "invalid username or password");
    }
}

#[tokio::test]
async fn base64_image_upload() {
    let app = build_test_app();

    let (status, body) = send(
        &app.router,
        as_admin(
            "POST",
            "/api/images/upload-base64",
            Some(json!({ "base64Image": png_data_uri() })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Image uploaded successfully");
    assert_eq!(body["imageUrl"], app.assets.uploads()[0].as_str());

    let (status, body) = send(
        &app.router,
        as_admin(
            "POST",
            "/api/images/upload-base64",
            Some(json!({ "base64Image": "bm90IGFuIGltYWdl" })),
        ),
    )
    .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "Bad Request");
}

fn multipart_request(content_type: &str, bytes: &[u8]) -> Request<Body> {
    let boundary = "newsroom-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"a.png\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/images/upload")
        .header(header::AUTHORIZATION, format!("Bearer {ADMIN_TOKEN}"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn multipart_image_upload() {
    let app = build_test_app();

    let (status, body) = send(&app.router, multipart_request("image/png", PNG_BYTES)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["imageUrl"].as_str().unwrap().starts_with(HOSTED_PREFIX));

    let (status, body) = send(&app.router, multipart_request("text/plain", PNG_BYTES)).await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "Bad Request");
    assert_eq!(app.assets.uploads().len(), 1);
}
