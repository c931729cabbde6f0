//! Integration test harness for einkauf-o-matic.
//!
//! [`TestApp`] drives the full router (session layer included) in-process
//! against a private in-memory database seeded with the `root`/`toor`
//! member. It keeps the session cookie between requests and follows
//! redirects the way a browser would.
//!
//! ```rust,ignore
//! let mut app = TestApp::new().await;
//! let page = app.login("root", "toor").await;
//! assert!(page.contains("You were logged in"));
//! ```

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use einkauf_web::config::EinkaufConfig;
use einkauf_web::services::CredentialStore;
use einkauf_web::{AppState, app, db};

/// Redirect hops followed before giving up.
const MAX_REDIRECTS: usize = 5;

/// The page a request finally landed on.
#[derive(Debug)]
pub struct Page {
    /// Status of the last response.
    pub status: StatusCode,
    /// Path and query of the last request.
    pub path: String,
    /// Body of the last response.
    pub body: String,
}

impl Page {
    /// Whether the body contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.body.contains(needle)
    }
}

/// In-process application with a cookie-carrying client.
pub struct TestApp {
    router: Router,
    pool: SqlitePool,
    cookie: Option<String>,
}

impl TestApp {
    /// Fresh application with a migrated in-memory database and `root`/`toor`.
    pub async fn new() -> Self {
        let pool = db::create_in_memory_pool().await.unwrap();
        db::migrate(&pool).await.unwrap();
        CredentialStore::new(&pool)
            .ensure_member("root", "toor")
            .await
            .unwrap();

        let config = EinkaufConfig::from_lookup(|_| None).unwrap();
        let router = app(AppState::new(config, pool.clone()));

        Self {
            router,
            pool,
            cookie: None,
        }
    }

    /// The application's database.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Whether the client currently holds a session cookie.
    #[must_use]
    pub const fn has_session_cookie(&self) -> bool {
        self.cookie.is_some()
    }

    /// Send one request without following redirects.
    pub async fn send(&mut self, mut request: Request<Body>) -> Response<Body> {
        if let Some(cookie) = &self.cookie {
            request
                .headers_mut()
                .insert(header::COOKIE, cookie.parse().unwrap());
        }

        let response = self.router.clone().oneshot(request).await.unwrap();
        self.store_cookie(&response);
        response
    }

    /// `GET path`, following redirects.
    pub async fn get(&mut self, path: &str) -> Page {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.follow(path, request).await
    }

    /// `POST path` with a form body, following redirects.
    pub async fn post_form(&mut self, path: &str, fields: &[(&str, &str)]) -> Page {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(encode_form(fields)))
            .unwrap();
        self.follow(path, request).await
    }

    /// Submit the login form.
    pub async fn login(&mut self, username: &str, password: &str) -> Page {
        self.post_form("/login", &[("username", username), ("password", password)])
            .await
    }

    /// Submit the registration form.
    pub async fn register(&mut self, member: &str, password: &str, password2: &str) -> Page {
        self.post_form(
            "/register",
            &[
                ("member", member),
                ("password", password),
                ("password2", password2),
            ],
        )
        .await
    }

    /// Follow the logout link.
    pub async fn logout(&mut self) -> Page {
        self.get("/logout").await
    }

    /// Submit the add-store form.
    pub async fn add_store(&mut self, name: &str, urls: &str, minorder: &str) -> Page {
        self.post_form(
            "/addstore",
            &[("name", name), ("urls", urls), ("minorder", minorder)],
        )
        .await
    }

    /// Submit the add-queue form.
    pub async fn add_queue(&mut self, title: &str, deadline: &str, store: &str) -> Page {
        self.post_form(
            "/add",
            &[("title", title), ("deadline", deadline), ("store", store)],
        )
        .await
    }

    /// Number of rows in `table`.
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }

    async fn follow(&mut self, path: &str, request: Request<Body>) -> Page {
        let mut path = path.to_owned();
        let mut response = self.send(request).await;

        for _ in 0..MAX_REDIRECTS {
            if !response.status().is_redirection() {
                break;
            }
            path = response.headers()[header::LOCATION]
                .to_str()
                .unwrap()
                .to_owned();
            let request = Request::builder()
                .method(Method::GET)
                .uri(path.as_str())
                .body(Body::empty())
                .unwrap();
            response = self.send(request).await;
        }

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        Page {
            status,
            path,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    fn store_cookie(&mut self, response: &Response<Body>) {
        for value in response.headers().get_all(header::SET_COOKIE) {
            let value = value.to_str().unwrap();
            let pair = value.split(';').next().unwrap_or_default().trim();
            let removed = pair.ends_with('=')
                || value.contains("Max-Age=0")
                || value.contains("max-age=0");

            if removed {
                self.cookie = None;
            } else {
                self.cookie = Some(pair.to_owned());
            }
        }
    }
}

fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
