mod http_request;

pub use http_request::HttpRequest;

use crate::error::Error;

use reqwest::Url;

/// フィードのソースをリクエストするためのトレイト．一回のみ試行する．
#[async_trait::async_trait]
pub trait RequestSource {
    async fn request(&self, endpoint: &Url) -> Result<Vec<u8>, Error>;
}
