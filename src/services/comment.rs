//! Client for the upstream comment service.

use crate::{
    error::GatewayError,
    models::Comment,
    services::{upstream, AppMetrics},
};
use reqwest::Client;
use url::Url;

const CREATE_SERVICE: &str = "comment-create";
const LIKE_SERVICE: &str = "comment-like";

/// Stateless client for comment create/like; no retries, no deduplication.
#[derive(Clone)]
pub struct CommentClient {
    http: Client,
    base: Url,
    metrics: AppMetrics,
}

impl CommentClient {
    pub fn new(http: Client, base_url: &str, metrics: AppMetrics) -> Result<Self, GatewayError> {
        let base = Url::parse(base_url)?;
        Ok(Self {
            http,
            base,
            metrics,
        })
    }

    /// Create a comment remotely. Success carries no payload.
    pub async fn create(&self, comment: &Comment) -> Result<(), GatewayError> {
        let url = self.base.join("/comment")?;
        let req = self.http.post(url).json(comment);

        upstream::execute(&self.http, &self.metrics, CREATE_SERVICE, req).await?;
        Ok(())
    }

    /// Increment the like counter of a comment. The comment ID travels as a
    /// query parameter; the request has no body.
    pub async fn like(&self, comment_id: &str) -> Result<(), GatewayError> {
        let mut url = self.base.join("/comment/like")?;
        url.query_pairs_mut().append_pair("cid", comment_id);
        let req = self.http.post(url);

        upstream::execute(&self.http, &self.metrics, LIKE_SERVICE, req).await?;
        Ok(())
    }
}
