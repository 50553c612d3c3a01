pub mod aggregator;
pub mod error;
pub mod parser;
pub mod platform;
pub mod platforms;
pub mod reporter;
pub mod request;
pub mod serializer;

pub use aggregator::Aggregator;
pub use parser::{Item, ItemFilter, PostParser, RssParser};
pub use platform::{FeedSource, PlatForm};
pub use reporter::Report;
pub use request::{HttpRequest, RequestSource};

use error::Error;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Aggregatorが保持する件数のデフォルト
pub const DEFAULT_MERGE_WINDOW: usize = 10;
/// 実際に保存する件数のデフォルト
pub const DEFAULT_PERSISTED_WINDOW: usize = 5;

/// ポストの配信元
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Hatena,
    Zenn,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Hatena => "hatena",
            Source::Zenn => "zenn",
        }
    }

    /// 配信元ごとのアイテムのフィルター
    pub fn item_filter(&self) -> ItemFilter {
        match self {
            Source::Hatena => <platforms::Hatena as PlatForm>::keep,
            Source::Zenn => <platforms::Zenn as PlatForm>::keep,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hatena" => Ok(Source::Hatena),
            "zenn" => Ok(Source::Zenn),
            _ => Err(format!("Unexpected source: {}", s)),
        }
    }
}

/// ポストを表す型．フィードのアイテムが全ての必須要素を持つときのみ作られる．
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub title: String,
    pub url: String,
    #[serde(serialize_with = "serializer::serialize_timestamp")]
    pub published_at: DateTime<Utc>,
    pub source: Source,
}

pub type Posts = Vec<Post>;

/// 全てのフィードから最新のポストを集めてリポートする．
///
/// Aggregatorで`merge_window`件まで絞り込んだ後，リポートの直前に`persisted_window`件に切り詰める．
/// ポストが一件も得られなかった場合は`Error::NoPostsError`を返し，リポートは行わない．
pub async fn aggregate_and_report<R>(
    aggregator: &Aggregator,
    merge_window: usize,
    persisted_window: usize,
    reporter: &R,
) -> Result<usize, Error>
where
    R: Report + Sync + ?Sized,
{
    let mut posts = aggregator.aggregate(merge_window).await?;
    posts.truncate(persisted_window);

    info!("Reporting {} latest posts.", posts.len());
    reporter.report(&posts).await?;

    Ok(posts.len())
}
