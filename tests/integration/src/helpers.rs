//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests with
//! actor-identity headers, and asserting on responses.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use hr_api::{create_app, create_app_state};
use hr_common::AppConfig;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Actor identity headers used by the tests
pub const TEST_ACTOR: (&str, &str) = ("it-admin", "Integration Admin");

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on an OS-assigned port
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        // Create app state
        let state = create_app_state(config).await?;

        // Build application
        let app = create_app(state);

        // Bind to an ephemeral port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Create HTTP client
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make a GET request with no identity headers (acts as System)
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request as the admin test actor
    pub async fn get_admin(&self, path: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .header("x-actor-id", TEST_ACTOR.0)
            .header("x-actor-name", TEST_ACTOR.1)
            .header("x-actor-roles", "admin")
            .send()
            .await?)
    }

    /// Make a POST request with JSON body as a named (non-admin) actor
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .header("x-actor-id", TEST_ACTOR.0)
            .header("x-actor-name", TEST_ACTOR.1)
            .json(body)
            .send()
            .await?)
    }

    /// Make a POST request as the admin test actor
    pub async fn post_admin<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .header("x-actor-id", TEST_ACTOR.0)
            .header("x-actor-name", TEST_ACTOR.1)
            .header("x-actor-roles", "admin")
            .json(body)
            .send()
            .await?)
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self
            .client
            .put(self.url(path))
            .header("x-actor-id", TEST_ACTOR.0)
            .header("x-actor-name", TEST_ACTOR.1)
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request as the admin test actor
    pub async fn delete_admin(&self, path: &str) -> Result<Response> {
        Ok(self
            .client
            .delete(self.url(path))
            .header("x-actor-id", TEST_ACTOR.0)
            .header("x-actor-name", TEST_ACTOR.1)
            .header("x-actor-roles", "admin")
            .send()
            .await?)
    }
}

/// Create a test configuration from the environment
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    // The API port is unused by tests (an ephemeral port is bound), but the
    // config loader requires it
    if std::env::var("API_PORT").is_err() {
        std::env::set_var("API_PORT", "0");
    }

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;
    Ok(config)
}

/// Helper to check if the test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    if std::env::var("REDIS_URL").is_err() {
        eprintln!("Skipping test: REDIS_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status, discarding the body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
