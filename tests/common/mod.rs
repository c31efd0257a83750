#![allow(dead_code)]

use anyhow::Result;
use nz_walks::{ApiServer, AppState, Database};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::sync::oneshot;

/// A server on an ephemeral port backed by its own in-memory database.
pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    pub database: Database,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> Result<reqwest::Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    pub async fn put_json(&self, path: &str, body: &Value) -> Result<reqwest::Response> {
        Ok(self.client.put(self.url(path)).json(body).send().await?)
    }

    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    pub async fn delete(&self, path: &str) -> Result<reqwest::Response> {
        Ok(self.client.delete(self.url(path)).send().await?)
    }

    /// Creates a region and returns its response body.
    pub async fn create_region(&self, code: &str, name: &str) -> Result<Value> {
        let body = json!({
            "code": code,
            "name": name,
            "area": 1200.5,
            "lat": -41.0,
            "long": 174.0,
            "population": 100000
        });
        let response = self.post_json("/regions", &body).await?;
        assert_eq!(response.status(), StatusCode::CREATED);
        Ok(response.json().await?)
    }

    pub async fn create_walk_difficulty(&self, name: &str) -> Result<Value> {
        let response = self
            .post_json("/walkdifficulties", &json!({ "name": name }))
            .await?;
        assert_eq!(response.status(), StatusCode::CREATED);
        Ok(response.json().await?)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

pub async fn spawn_app() -> Result<TestApp> {
    let database = Database::in_memory().await?;
    let listener = ApiServer::bind("127.0.0.1:0".parse()?).await?;
    let addr = listener.local_addr()?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = ApiServer::new(AppState::from_database(&database));
    tokio::spawn(async move {
        let signal = async {
            let _ = shutdown_rx.await;
        };
        if let Err(e) = server.serve_with_shutdown(listener, signal).await {
            eprintln!("test server failed: {}", e);
        }
    });

    Ok(TestApp {
        base_url: format!("http://{}", addr),
        client: reqwest::Client::new(),
        database,
        shutdown: Some(shutdown_tx),
    })
}
