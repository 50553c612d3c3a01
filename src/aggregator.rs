use crate::error::Error;
use crate::{FeedSource, PostParser, Posts, RequestSource, RssParser};

use std::sync::Arc;
use tracing::{info, warn};

/// 複数のフィードを並行に取得・パースし，最新のポストを集める．
pub struct Aggregator {
    sources: Vec<FeedSource>,
    requester: Arc<dyn RequestSource + Send + Sync>,
}

impl Aggregator {
    pub fn new<R: RequestSource + Send + Sync + 'static>(
        sources: Vec<FeedSource>,
        requester: R,
    ) -> Self {
        Self {
            sources,
            requester: Arc::new(requester) as Arc<dyn RequestSource + Send + Sync>,
        }
    }

    pub fn sources(&self) -> &[FeedSource] {
        &self.sources
    }

    /// 全てのフィードから公開日時の新しい順に`count`件のポストを取得する．
    ///
    /// 失敗したフィードは無視される．ポストが一件も得られなかった場合は`Error::NoPostsError`を返す．
    pub async fn aggregate(&self, count: usize) -> Result<Posts, Error> {
        let total = self.sources.len();

        let handles = self
            .sources
            .iter()
            .cloned()
            .map(|feed_source| {
                let requester = Arc::clone(&self.requester);
                let source = feed_source.source;
                let handle = tokio::spawn(async move {
                    fetch_and_parse(requester.as_ref(), &feed_source).await
                });
                (source, handle)
            })
            .collect::<Vec<_>>();

        // 全てのタスクの完了を待ってからマージする
        let mut branches = Vec::with_capacity(total);
        let mut failed = 0;
        for (source, handle) in handles {
            match handle.await.map_err(Error::from).and_then(|res| res) {
                Ok(posts) => {
                    info!("Collected {} posts from {}.", posts.len(), source);
                    branches.push(posts);
                }
                Err(e) => {
                    failed += 1;
                    warn!("Skipping {} feed. {}", source, e);
                }
            }
        }

        let latest = merge_latest(branches, count);
        if latest.is_empty() {
            return Err(Error::NoPostsError { failed, total });
        }

        Ok(latest)
    }
}

async fn fetch_and_parse(
    requester: &(dyn RequestSource + Send + Sync),
    feed_source: &FeedSource,
) -> Result<Posts, Error> {
    let body = requester.request(&feed_source.endpoint).await?;
    RssParser::parse(&body, feed_source.source)
}

/// 各フィードのポストをまとめ，新しい順に`count`件取り出す．
///
/// 公開日時が同じ場合は配信元，URL，タイトルの順で並べるため，入力の順序には依存しない．
pub fn merge_latest(branches: Vec<Posts>, count: usize) -> Posts {
    let mut merged = branches.into_iter().flatten().collect::<Posts>();

    merged.sort_by(|a, b| {
        b.published_at
            .cmp(&a.published_at)
            .then_with(|| a.source.cmp(&b.source))
            .then_with(|| a.url.cmp(&b.url))
            .then_with(|| a.title.cmp(&b.title))
    });
    merged.truncate(count);

    merged
}
