//! End-to-end flows through the HTTP interface: registration, login and
//! logout, and the store and queue registries.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};

use einkauf_integration_tests::TestApp;

const GATE: &str = "You must be logged in to see something useful here";

// =============================================================================
// Gating
// =============================================================================

#[tokio::test]
async fn test_anonymous_root_shows_gate() {
    let mut app = TestApp::new().await;

    let page = app.get("/").await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.contains(GATE));
    assert!(!page.contains("No stores here so far"));
    assert!(!page.contains("No queues here so far"));
}

#[tokio::test]
async fn test_anonymous_root_hides_existing_content() {
    let mut app = TestApp::new().await;
    app.login("root", "toor").await;
    app.add_store("adafruit INDUSTRIES", "http://www.adafruit.com/", "250")
        .await;
    app.logout().await;

    let page = app.get("/").await;

    assert!(page.contains(GATE));
    assert!(!page.contains("adafruit"));
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_register_succeeds_once() {
    let mut app = TestApp::new().await;

    let page = app.register("user1", "default", "default").await;
    assert_eq!(page.path, "/login?success=registered");
    assert!(page.contains("You were successfully registered and can login now"));

    let page = app.register("user1", "default", "default").await;
    assert!(page.contains("The username is already taken"));
    assert_eq!(app.count("member").await, 2);
}

#[tokio::test]
async fn test_register_does_not_log_in() {
    let mut app = TestApp::new().await;

    app.register("user1", "default", "default").await;

    assert!(app.get("/").await.contains(GATE));
}

#[tokio::test]
async fn test_register_empty_username() {
    let mut app = TestApp::new().await;

    let page = app.register("", "default", "default").await;

    assert!(page.contains("You have to enter a username"));
    assert_eq!(app.count("member").await, 1);
}

#[tokio::test]
async fn test_register_empty_password() {
    let mut app = TestApp::new().await;

    let page = app.register("meh", "", "").await;

    assert!(page.contains("You have to enter a password"));
}

#[tokio::test]
async fn test_register_password_mismatch() {
    let mut app = TestApp::new().await;

    let page = app.register("meh", "x", "y").await;

    assert!(page.contains("The two passwords do not match"));
    assert_eq!(app.count("member").await, 1);
}

#[tokio::test]
async fn test_registered_member_can_log_in() {
    let mut app = TestApp::new().await;
    app.register("user1", "default", "default").await;

    let page = app.login("user1", "default").await;

    assert!(page.contains("You were logged in"));
    assert!(page.contains("No stores here so far"));
}

// =============================================================================
// Login / Logout
// =============================================================================

#[tokio::test]
async fn test_login_logout() {
    let mut app = TestApp::new().await;

    let page = app.login("root", "toor").await;
    assert_eq!(page.path, "/?success=logged_in");
    assert!(page.contains("You were logged in"));
    assert!(!page.contains(GATE));
    assert!(app.has_session_cookie());

    let page = app.logout().await;
    assert!(page.contains("You were logged out"));
    assert!(page.contains(GATE));
}

#[tokio::test]
async fn test_logout_via_post() {
    let mut app = TestApp::new().await;
    app.login("root", "toor").await;

    let page = app.post_form("/logout", &[]).await;

    assert!(page.contains("You were logged out"));
    assert!(app.get("/").await.contains(GATE));
}

#[tokio::test]
async fn test_login_unknown_user() {
    let mut app = TestApp::new().await;

    let page = app.login("rootx", "toor").await;

    assert_eq!(page.path, "/login?error=unknown_user");
    assert!(page.contains("Invalid username"));
    assert!(app.get("/").await.contains(GATE));
}

#[tokio::test]
async fn test_login_bad_password() {
    let mut app = TestApp::new().await;

    let page = app.login("root", "toorx").await;

    assert!(page.contains("Invalid password"));
    assert!(app.get("/").await.contains(GATE));
}

#[tokio::test]
async fn test_failed_login_keeps_existing_session() {
    let mut app = TestApp::new().await;
    app.login("root", "toor").await;

    let page = app.login("root", "wrong").await;
    assert!(page.contains("Invalid password"));

    let page = app.get("/").await;
    assert!(!page.contains(GATE));
    assert!(page.contains("root"));
}

#[tokio::test]
async fn test_login_rebinds_to_other_member() {
    let mut app = TestApp::new().await;
    app.register("horst", "passw0rd", "passw0rd").await;
    app.login("root", "toor").await;

    app.login("horst", "passw0rd").await;

    let page = app.get("/").await;
    assert!(page.contains("horst | <a href=\"/logout\">"));
}

#[tokio::test]
async fn test_logout_when_anonymous() {
    let mut app = TestApp::new().await;

    let page = app.logout().await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.contains("You were logged out"));
    assert!(page.contains(GATE));
}

#[tokio::test]
async fn test_session_cookie_attributes() {
    let mut app = TestApp::new().await;

    let request = Request::builder()
        .method("POST")
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("username=root&password=toor"))
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("einkauf_session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
}

// =============================================================================
// Stores
// =============================================================================

#[tokio::test]
async fn test_add_store() {
    let mut app = TestApp::new().await;
    app.login("root", "toor").await;

    let page = app.get("/").await;
    assert!(page.contains("No stores here so far"));

    let page = app
        .add_store(
            "adafruit INDUSTRIES",
            "http://www.adafruit.com/,http://adafruit.com/",
            "250",
        )
        .await;

    assert!(page.contains("New store was successfully added"));
    assert!(!page.contains("No stores here so far"));
    assert!(page.contains("<a href=\"http://www.adafruit.com/\">adafruit"));
}

#[tokio::test]
async fn test_add_store_invalid_input() {
    let mut app = TestApp::new().await;
    app.login("root", "toor").await;

    let page = app.add_store("", "http://www.adafruit.com/", "250").await;
    assert!(page.contains("You have to enter a store name"));

    let page = app.add_store("adafruit", " , ", "250").await;
    assert!(page.contains("You have to enter at least one store URL"));

    let page = app.add_store("adafruit", "http://www.adafruit.com/", "-1").await;
    assert!(page.contains("The minimum order has to be a non-negative amount"));

    assert_eq!(app.count("store").await, 0);
}

#[tokio::test]
async fn test_anonymous_add_store_persists_nothing() {
    let mut app = TestApp::new().await;

    let page = app
        .add_store("adafruit INDUSTRIES", "http://www.adafruit.com/", "250")
        .await;

    assert_eq!(page.path, "/?error=not_authenticated");
    assert!(page.contains(GATE));
    assert_eq!(app.count("store").await, 0);
}

// =============================================================================
// Queues
// =============================================================================

#[tokio::test]
async fn test_add_queue() {
    let mut app = TestApp::new().await;
    app.login("root", "toor").await;
    app.add_store(
        "adafruit INDUSTRIES",
        "http://www.adafruit.com/,http://adafruit.com/",
        "250",
    )
    .await;

    let page = app.get("/").await;
    assert!(page.contains("No queues here so far"));
    assert!(page.contains("<option value=\"1\">adafruit INDUSTRIES</option>"));

    let page = app.add_queue("raspberrypi stuff", "2012-01-30", "1").await;

    assert!(page.contains("New queue was successfully added"));
    assert!(!page.contains("No queues here so far"));
    assert!(page.contains("raspberrypi stuff"));
    assert!(page.contains("2012-01-30"));
}

#[tokio::test]
async fn test_add_queue_unknown_store() {
    let mut app = TestApp::new().await;
    app.login("root", "toor").await;

    let page = app.add_queue("raspberrypi stuff", "2012-01-30", "1").await;

    assert!(page.contains("The selected store does not exist"));
    assert!(page.contains("No queues here so far"));
    assert_eq!(app.count("queue").await, 0);
}

#[tokio::test]
async fn test_add_queue_empty_title() {
    let mut app = TestApp::new().await;
    app.login("root", "toor").await;
    app.add_store("adafruit", "http://www.adafruit.com/", "0").await;

    let page = app.add_queue("", "2012-01-30", "1").await;

    assert!(page.contains("You have to enter a title"));
    assert_eq!(app.count("queue").await, 0);
}

#[tokio::test]
async fn test_anonymous_add_queue_persists_nothing() {
    let mut app = TestApp::new().await;
    app.login("root", "toor").await;
    app.add_store("adafruit", "http://www.adafruit.com/", "0").await;
    app.logout().await;

    let page = app.add_queue("raspberrypi stuff", "2012-01-30", "1").await;

    assert!(page.contains(GATE));
    assert_eq!(app.count("queue").await, 0);
}
