//! tests/api/home.rs

use crate::helpers::setup;

#[tokio::test]
async fn home_returns_the_landing_page() {
    let test = setup().await;

    let response = test.get("/").await;

    assert!(response.status().is_success());
    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn the_page_carries_the_navigation_targets() {
    let test = setup().await;

    let page = test.get("/").await.text().await.expect("Failed to read body");

    // The scroll helper needs these anchors to exist.
    for id in ["services", "careers", "contact"] {
        assert!(
            page.contains(&format!(r#"id="{}""#, id)),
            "The page is missing the {} section",
            id
        );
        assert!(page.contains(&format!("scrollToSection('{}')", id)));
    }
}

#[tokio::test]
async fn the_page_carries_the_application_form() {
    let test = setup().await;

    let page = test.get("/").await.text().await.expect("Failed to read body");

    for field in ["name", "email", "phone", "github", "skills", "message"] {
        assert!(
            page.contains(&format!(r#"name="{}""#, field)),
            "The application form is missing the {} field",
            field
        );
    }
    assert!(page.contains("/api/apply"));
}
