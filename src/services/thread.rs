//! Client for the upstream thread service.

use crate::{
    error::GatewayError,
    models::Thread,
    services::{upstream, AppMetrics},
};
use reqwest::Client;
use url::Url;

const CREATE_SERVICE: &str = "thread-create";
const GET_SERVICE: &str = "thread-get";

/// Stateless client for thread create/get; each call is one request/response
/// exchange with no retries.
#[derive(Clone)]
pub struct ThreadClient {
    http: Client,
    base: Url,
    metrics: AppMetrics,
}

impl ThreadClient {
    pub fn new(http: Client, base_url: &str, metrics: AppMetrics) -> Result<Self, GatewayError> {
        let base = Url::parse(base_url)?;
        Ok(Self {
            http,
            base,
            metrics,
        })
    }

    /// Create a thread remotely. Success carries no payload.
    pub async fn create(&self, thread: &Thread) -> Result<(), GatewayError> {
        let url = self.base.join("/thread")?;
        let req = self.http.post(url).json(thread);

        upstream::execute(&self.http, &self.metrics, CREATE_SERVICE, req).await?;
        Ok(())
    }

    /// Fetch a thread by ID, passed as a query parameter.
    pub async fn get(&self, id: &str) -> Result<Thread, GatewayError> {
        let mut url = self.base.join("/thread")?;
        url.query_pairs_mut().append_pair("id", id);
        let req = self.http.get(url);

        let resp = upstream::execute(&self.http, &self.metrics, GET_SERVICE, req).await?;
        resp.json::<Thread>()
            .await
            .map_err(|source| GatewayError::Decode {
                service: GET_SERVICE,
                source,
            })
    }
}
