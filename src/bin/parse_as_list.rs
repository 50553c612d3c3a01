use latest_posts::{PostParser, RssParser, Source};

use clap::Parser;

/// ローカルに保存したフィードをパースして一覧を表示する．
#[derive(Debug, Parser)]
struct Arg {
    /// feed file path.
    path: String,

    /// source of the feed (hatena or zenn).
    #[arg(short, long, default_value = "zenn")]
    source: Source,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Arg { path, source } = Arg::parse();

    let body = std::fs::read(path)?;
    let posts = RssParser::parse(&body, source)?;

    for post in posts.iter() {
        println!(
            "published_at: {}, title: {:?}, url: {:?}",
            post.published_at, post.title, post.url
        );
    }

    Ok(())
}
