use std::time::Duration;

use anyhow::{anyhow, Result};
use futures::Future;
use once_cell::sync::Lazy;

use pavilion_api::Server;
use pavilion_db::test::{create_database, DatabaseInfo, DatabaseUser, TestDatabase};

/// reqwest client pinned to the server's base URL, with a cookie jar so a
/// login sticks for the rest of the test.
#[derive(Clone)]
pub struct TestClient {
    pub base: String,
    pub client: reqwest::Client,
}

impl TestClient {
    fn new(base: String) -> TestClient {
        TestClient {
            base,
            client: reqwest::ClientBuilder::new()
                .timeout(Duration::from_secs(30))
                .cookie_store(true)
                .build()
                .expect("Building client"),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.get(self.url(path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.post(self.url(path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.put(self.url(path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.delete(self.url(path))
    }

    pub async fn login(&self, user: &DatabaseUser) -> Result<()> {
        let response = self
            .post("session")
            .json(&serde_json::json!({
                "email": user.email,
                "password": user.password,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("Login failed with status {}", response.status()));
        }

        Ok(())
    }
}

pub struct TestApp {
    pub database: TestDatabase,
    /// Client logged in as the seeded administrator.
    pub admin: TestClient,
    /// Client logged in as an ordinary (non-admin) user.
    pub member: TestClient,
    /// Anonymous client.
    pub client: TestClient,
    pub base_url: String,

    // Holds the logo upload directory open for the test's lifetime.
    _logo_dir: temp_dir::TempDir,
}

async fn start_app(database: TestDatabase, users: DatabaseInfo) -> Result<TestApp> {
    let logo_dir = temp_dir::TempDir::new()?;

    let config = pavilion_api::config::Config {
        host: "127.0.0.1".to_string(),
        port: 0, // Bind to random port
        env: "test".to_string(),
        database_url: database.url.clone(),
        cookie_key: "QjX+c1Nggom7lrxVTJFxMI7iQ0BRVr1oR9N64orRgdW3pp/SV+lE/1FOwo12UZj9QoBUUuv2rvcO0x+Omq+25Q==".to_string(),
        session_cookie_name: "sid".to_string(),
        logo_s3_bucket: None,
        logo_local_dir: logo_dir.path().to_string_lossy().to_string(),
        logo_url_base: "http://logos.test.example.com".to_string(),
    };
    Lazy::force(&pavilion_test::TRACING);
    let Server { server, host, port } = pavilion_api::run_server(config).await?;

    tokio::task::spawn(server);

    let base_url = format!("http://{}:{}/api", host, port);
    let client = TestClient::new(base_url.clone());

    let admin = TestClient::new(base_url.clone());
    admin.login(&users.admin_user).await?;

    let member = TestClient::new(base_url.clone());
    member.login(&users.normal_user).await?;

    Ok(TestApp {
        database,
        admin,
        member,
        client,
        base_url,
        _logo_dir: logo_dir,
    })
}

pub async fn run_app_test<F, R>(f: F)
where
    F: FnOnce(TestApp) -> R,
    R: Future<Output = Result<(), anyhow::Error>>,
{
    let (database, users) = create_database().await.expect("Creating database");
    let app = start_app(database.clone(), users)
        .await
        .expect("Starting app");
    f(app).await.unwrap();
    database.drop_db().expect("Cleaning up");
}
