//! フィードの取得からjsonの保存までを，モックサーバーを用いて通して確認する．

use latest_posts::error::Error;
use latest_posts::platforms::EXCLUDED_CATEGORY;
use latest_posts::reporter::{JsonSaveReporter, OUTPUT_FILE_NAME};
use latest_posts::{aggregate_and_report, Aggregator, FeedSource, HttpRequest, Source};

use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("latest_posts_it_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

/// (タイトル, 日, カテゴリー)からフィードを作製する．日付は2024年1月．
fn rss(items: &[(&str, u32, &str)]) -> String {
    let weekdays = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    let items = items
        .iter()
        .map(|(title, day, category)| {
            // 2024-01-01は月曜日
            let weekday = weekdays[((day - 1) % 7) as usize];
            format!(
                r#"
    <item>
      <title>{title}</title>
      <link>https://example.com/{title}</link>
      <pubDate>{weekday}, {day:02} Jan 2024 09:00:00 +0900</pubDate>
      <category>{category}</category>
    </item>"#
            )
        })
        .collect::<String>();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>feed</title>{items}
  </channel>
</rss>"#
    )
}

async fn mount_feed(server: &MockServer, feed_path: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(feed_path))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

fn aggregator(server: &MockServer) -> Aggregator {
    let sources = vec![
        FeedSource::new(&format!("{}/hatena/rss", server.uri()), Source::Hatena).unwrap(),
        FeedSource::new(&format!("{}/zenn/feed", server.uri()), Source::Zenn).unwrap(),
    ];
    Aggregator::new(
        sources,
        HttpRequest::new(Some(Duration::from_secs(5))).unwrap(),
    )
}

#[tokio::test]
async fn test_latest_posts_are_saved() {
    let server = MockServer::start().await;
    mount_feed(
        &server,
        "/hatena/rss",
        ResponseTemplate::new(200).set_body_string(rss(&[
            ("h-9", 9, "Swift"),
            ("h-8", 8, EXCLUDED_CATEGORY),
            ("h-5", 5, "Rust"),
            ("h-2", 2, "Rust"),
        ])),
    )
    .await;
    mount_feed(
        &server,
        "/zenn/feed",
        ResponseTemplate::new(200).set_body_string(rss(&[
            ("z-7", 7, EXCLUDED_CATEGORY),
            ("z-6", 6, ""),
            ("z-4", 4, ""),
            ("z-3", 3, ""),
        ])),
    )
    .await;

    let dir = temp_dir("saved");
    let reporter = JsonSaveReporter::new(dir.as_path());

    let count = aggregate_and_report(&aggregator(&server), 10, 5, &reporter)
        .await
        .unwrap();
    assert_eq!(count, 5);

    let json: Value =
        serde_json::from_slice(&std::fs::read(dir.join(OUTPUT_FILE_NAME)).unwrap()).unwrap();
    let posts = json.as_array().unwrap();

    let titles = posts
        .iter()
        .map(|post| post["title"].as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["h-9", "z-7", "z-6", "h-5", "z-4"]);

    assert_eq!(posts[0]["source"], "hatena");
    assert_eq!(posts[1]["source"], "zenn");
    assert_eq!(posts[0]["publishedAt"], "2024-01-09T00:00:00+00:00");
    assert_eq!(posts[0]["url"], "https://example.com/h-9");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_one_failed_feed_is_ignored() {
    let server = MockServer::start().await;
    mount_feed(&server, "/hatena/rss", ResponseTemplate::new(500)).await;
    mount_feed(
        &server,
        "/zenn/feed",
        ResponseTemplate::new(200).set_body_string(rss(&[("z-2", 2, ""), ("z-1", 1, "")])),
    )
    .await;

    let dir = temp_dir("partial");
    let reporter = JsonSaveReporter::new(dir.as_path());

    let count = aggregate_and_report(&aggregator(&server), 10, 5, &reporter)
        .await
        .unwrap();
    assert_eq!(count, 2);
    assert!(dir.join(OUTPUT_FILE_NAME).is_file());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_nothing_is_saved_when_all_feeds_fail() {
    let server = MockServer::start().await;
    mount_feed(&server, "/hatena/rss", ResponseTemplate::new(404)).await;
    mount_feed(
        &server,
        "/zenn/feed",
        ResponseTemplate::new(200).set_body_string("<html><body>maintenance</html>"),
    )
    .await;

    let dir = temp_dir("failed");
    let reporter = JsonSaveReporter::new(dir.as_path());

    let res = aggregate_and_report(&aggregator(&server), 10, 5, &reporter).await;

    assert!(matches!(
        res,
        Err(Error::NoPostsError {
            failed: 2,
            total: 2
        })
    ));
    assert!(!dir.exists());
}
