use axum_test::TestServer;
use bytes::Bytes;
use gallery_server::{
    adapters::inbound::http::{create_router, AppState},
    create_in_memory_app,
};
use serde_json::Value;

const BOUNDARY: &str = "gallerytestboundary";

async fn test_server() -> TestServer {
    let services = create_in_memory_app().await.unwrap();
    let router = create_router(AppState::new(services));
    TestServer::new(router).unwrap()
}

fn multipart_body(parts: &[(&str, &[u8])]) -> Bytes {
    let mut body = Vec::new();
    for (filename, payload) in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"images\"; filename=\"{}\"\r\n\r\n",
                filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(payload);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    Bytes::from(body)
}

fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

#[tokio::test]
async fn test_empty_gallery() {
    let server = test_server().await;

    let response = server.get("/gallery").await;
    response.assert_status_ok();

    let json: Value = response.json();
    assert_eq!(json["total_count"], 0);
    assert_eq!(json["images"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_upload_then_list() {
    let server = test_server().await;

    let body = multipart_body(&[("cat.png", b"fake png bytes"), ("virus.exe", b"nope")]);
    let response = server
        .post("/upload")
        .content_type(&multipart_content_type())
        .bytes(body)
        .await;
    response.assert_status_ok();

    let json: Value = response.json();
    assert_eq!(json["uploaded"], 1);
    let errors = json["errors"].as_str().unwrap();
    assert_eq!(errors, "Unsupported format: virus.exe");

    let response = server.get("/gallery").await;
    response.assert_status_ok();

    let json: Value = response.json();
    assert_eq!(json["total_count"], 1);
    let image = &json["images"][0];
    assert!(image["name"].as_str().unwrap().starts_with("uploads/"));
    assert!(image["url"].as_str().unwrap().contains("X-Amz-Expires="));
    assert_eq!(image["size"], 14);
}

#[tokio::test]
async fn test_all_successful_upload_omits_errors() {
    let server = test_server().await;

    let body = multipart_body(&[("a.png", b"one"), ("b.gif", b"two")]);
    let response = server
        .post("/upload")
        .content_type(&multipart_content_type())
        .bytes(body)
        .await;
    response.assert_status_ok();

    let json: Value = response.json();
    assert_eq!(json["uploaded"], 2);
    assert!(json.get("errors").is_none() || json["errors"].is_null());
}

#[tokio::test]
async fn test_upload_without_files_is_rejected() {
    let server = test_server().await;

    let body = Bytes::from(format!("--{}--\r\n", BOUNDARY));
    let response = server
        .post("/upload")
        .content_type(&multipart_content_type())
        .bytes(body)
        .await;

    response.assert_status_bad_request();

    let json: Value = response.json();
    assert_eq!(json["error"], "No files uploaded");
}

#[tokio::test]
async fn test_fields_with_other_names_are_ignored() {
    let server = test_server().await;

    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        b"Content-Disposition: form-data; name=\"attachment\"; filename=\"cat.png\"\r\n\r\n",
    );
    body.extend_from_slice(b"pixels");
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    let response = server
        .post("/upload")
        .content_type(&multipart_content_type())
        .bytes(Bytes::from(body))
        .await;

    response.assert_status_bad_request();
}
