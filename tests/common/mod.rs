//! Test helper module for sample-service integration tests.

#![allow(dead_code)]

use sample_service::config::ServiceConfig;
use sample_service::services::metrics::init_metrics;
use sample_service::startup::Application;

/// Test application running a real server on a random port.
pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn the service on 127.0.0.1 with a random port and run it in the
    /// background for the remainder of the test.
    pub async fn spawn() -> anyhow::Result<TestApp> {
        // OnceLock-backed; safe to call from every test.
        init_metrics();

        let config = ServiceConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            log_level: "warn".to_string(),
        };

        let application = Application::build(config).await?;
        let port = application.port();

        tokio::spawn(application.run_until_stopped());

        Ok(TestApp {
            address: format!("http://127.0.0.1:{}", port),
            port,
        })
    }

    pub fn client(&self) -> reqwest::Client {
        reqwest::Client::new()
    }
}
