//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::future::Future;

use heroku_api::clients::{Request, Response, Transport};
use heroku_api::{ApiHost, ApiToken, ClientConfig, Resource};
use serde::{Deserialize, Serialize};
use wiremock::MockServer;

/// Token used by every test session; `base64(":secret")` is `OnNlY3JldA==`.
pub const TOKEN: &str = "secret";

/// Rewrites the scheme to plain HTTP so requests reach the mock server.
#[derive(Debug, Default)]
pub struct PlainHttp(reqwest::Client);

impl Transport for PlainHttp {
    fn execute(
        &self,
        mut request: Request,
    ) -> impl Future<Output = Result<Response, reqwest::Error>> + Send {
        request
            .url_mut()
            .set_scheme("http")
            .expect("http is a valid scheme");
        self.0.execute(request)
    }
}

/// Configuration pointing at the mock server with [`TOKEN`] as credential.
pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::builder()
        .host(ApiHost::new(server.address().to_string()).unwrap())
        .token(ApiToken::new(TOKEN).unwrap())
        .build()
        .unwrap()
}

/// A resource addressed by id when known, else by name.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default)]
    pub size: u32,
}

impl Item {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

impl Resource for Item {
    fn path(&self) -> String {
        let key = if self.id.is_empty() {
            &self.name
        } else {
            &self.id
        };
        heroku_api::rest::join_path(&["items", key.as_str()])
    }
}
