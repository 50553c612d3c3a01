use crate::error::Error;
use crate::parser::Item;
use crate::Source;

use reqwest::Url;

/// フィードを配信するプラットフォームごとの設定用トレイト
pub trait PlatForm {
    /// 出力に記録される配信元
    const SOURCE: Source;
    /// フィードのエンドポイント
    const ENDPOINT: &'static str;

    /// アイテムを残すかどうか．デフォルトでは全て残す．
    fn keep(_item: &Item) -> bool {
        true
    }
}

/// 取得対象となるフィードのエンドポイントと配信元の組
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSource {
    pub endpoint: Url,
    pub source: Source,
}

impl FeedSource {
    /// エンドポイントは絶対URLでなければならない．
    pub fn new(endpoint: &str, source: Source) -> Result<Self, Error> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::InvalidEndpointError(format!("{}: {}", endpoint, e)))?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::InvalidEndpointError(format!(
                "{}: unsupported scheme",
                endpoint
            )));
        }

        Ok(Self { endpoint, source })
    }

    pub fn of<P: PlatForm>() -> Result<Self, Error> {
        Self::new(P::ENDPOINT, P::SOURCE)
    }
}

#[cfg(test)]
mod test {
    use super::FeedSource;
    use crate::error::Error;
    use crate::Source;

    #[test]
    fn test_feed_source_requires_absolute_url() {
        let feed_source = FeedSource::new("https://zenn.dev/tokizuoh/feed", Source::Zenn).unwrap();
        assert_eq!(feed_source.endpoint.host_str(), Some("zenn.dev"));

        assert!(matches!(
            FeedSource::new("/tokizuoh/feed", Source::Zenn),
            Err(Error::InvalidEndpointError(_))
        ));
        assert!(matches!(
            FeedSource::new("ftp://example.com/feed", Source::Zenn),
            Err(Error::InvalidEndpointError(_))
        ));
    }
}
