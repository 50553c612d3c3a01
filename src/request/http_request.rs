use crate::error::Error;
use crate::RequestSource;

use reqwest::{Client, Url};
use std::time::Duration;
use tracing::info;

/// HTTPでフィードを取得するリクエスト
pub struct HttpRequest {
    client: Client,
}

impl HttpRequest {
    /// `timeout`を与えた場合，それを超えたリクエストはエラーとなる．
    pub fn new(timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait::async_trait]
impl RequestSource for HttpRequest {
    async fn request(&self, endpoint: &Url) -> Result<Vec<u8>, Error> {
        info!("Attempting request to {}.", endpoint);
        let res = self.client.get(endpoint.clone()).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::HttpStatusError {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = res.bytes().await?;

        info!("Finished request to {}.", endpoint);
        Ok(body.to_vec())
    }
}
