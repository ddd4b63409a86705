//! tests/api/apply.rs

use crate::helpers::{setup, setup_with, valid_application, FakeMailer};
use nailtech::routes::APPLICATION_INBOX;

#[tokio::test]
async fn apply_returns_a_200_for_a_valid_application() {
    // Arrange
    let test = setup().await;

    // Act
    let response = test.post_application(&valid_application()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse body");
    assert_eq!("Application submitted successfully", body["message"]);
}

#[tokio::test]
async fn apply_sends_one_email_to_the_studio_inbox() {
    // Arrange
    let test = setup().await;

    // Act
    let _ = test.post_application(&valid_application()).await;

    // Assert
    let email = test.received_email();
    assert_eq!(APPLICATION_INBOX, email.to);
    assert_eq!("New Internship Application from Jane Doe", email.subject);
}

#[tokio::test]
async fn the_email_contains_every_field() {
    // Arrange
    let test = setup().await;

    // Act
    let _ = test.post_application(&valid_application()).await;

    // Assert
    let email = test.received_email();
    assert!(email.html_body.contains("Jane Doe"));
    assert!(email.html_body.contains("jane@x.com"));
    assert!(email.html_body.contains("+250781733332"));
    assert!(email.html_body.contains("https://github.com/janedoe"));
    assert!(email.html_body.contains("React, Node.js"));
    assert!(email.html_body.contains("would love to learn"));
}

#[tokio::test]
async fn the_github_profile_is_a_link_in_the_email() {
    // Arrange
    let test = setup().await;

    // Act
    let _ = test.post_application(&valid_application()).await;

    // Assert
    let email = test.received_email();
    let links: Vec<_> = linkify::LinkFinder::new()
        .links(&email.html_body)
        .filter(|link| *link.kind() == linkify::LinkKind::Url)
        .collect();

    assert!(links
        .iter()
        .any(|link| link.as_str() == "https://github.com/janedoe"));
}

#[tokio::test]
async fn apply_returns_a_400_when_a_field_is_invalid() {
    // Arrange
    let test = setup().await;
    let test_cases = vec![
        ("name", "J", "a single-character name"),
        ("email", "janedomain.com", "an email without an @"),
        ("phone", "12345", "a phone number with too few digits"),
        ("github", "https://gitlab.com/x", "a profile on another host"),
        ("github", "not-a-url", "a github value that is not a URL"),
        ("skills", "Rust", "a skill list under five characters"),
        ("message", "too short", "a message under fifty characters"),
    ];

    for (field, value, description) in test_cases {
        let mut body = valid_application();
        body[field] = value.into();

        // Act
        let response = test.post_application(&body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request for {}.",
            description
        );

        let body: serde_json::Value = response.json().await.expect("Failed to parse body");
        let error = body["error"].as_str().expect("Missing error message");
        assert!(
            error.contains(field),
            "The error message for {} does not name the field: {}",
            description,
            error
        );
    }

    // A rejected application never reaches the mail transport.
    assert_eq!(0, test.mailer.sent().len());
}

#[tokio::test]
async fn apply_returns_a_400_when_a_field_is_missing() {
    // Arrange
    let test = setup().await;

    for field in ["name", "email", "phone", "github", "skills", "message"] {
        let mut body = valid_application();
        body.as_object_mut().unwrap().remove(field);

        // Act
        let response = test.post_application(&body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when {} was missing.",
            field
        );
    }

    assert_eq!(0, test.mailer.sent().len());
}

#[tokio::test]
async fn apply_returns_a_500_when_delivery_fails() {
    // Arrange
    let test = setup_with(FakeMailer::failing()).await;

    // Act
    let response = test.post_application(&valid_application()).await;

    // Assert
    assert_eq!(500, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse body");
    assert_eq!("Failed to submit application", body["error"]);
}

#[tokio::test]
async fn two_identical_submissions_send_two_emails() {
    // Arrange
    let test = setup().await;

    // Act
    let _ = test.post_application(&valid_application()).await;
    let _ = test.post_application(&valid_application()).await;

    // Assert: no deduplication of repeated submissions.
    assert_eq!(2, test.mailer.sent().len());
}

#[tokio::test]
async fn markup_in_the_message_is_escaped_in_the_email() {
    // Arrange
    let test = setup().await;
    let mut body = valid_application();
    body["message"] = format!("{}<script>alert(1)</script>", "x".repeat(50)).into();

    // Act
    let response = test.post_application(&body).await;

    // Assert
    assert_eq!(200, response.status().as_u16());

    let email = test.received_email();
    assert!(!email.html_body.contains("<script>"));
    assert!(email.html_body.contains("&lt;script&gt;"));
}
