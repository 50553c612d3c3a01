/// 設定ファイルについて
mod config {
    use serde::{Deserialize, Serialize};

    /// Config読み込みのエラー
    #[derive(Debug, thiserror::Error)]
    #[error("ConfigError: {0}")]
    pub struct ConfigError(pub String);

    /// Configファイルの全体．指定しなかった項目はデフォルトになる．
    #[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
    #[serde(default)]
    pub struct AppConfig {
        /// latest_posts.jsonを保存するディレクトリ
        pub output_dir: String,
        /// フィードをまとめた後に保持する件数
        pub merge_window: usize,
        /// 保存する件数
        pub persisted_window: usize,
        /// リクエストのタイムアウト(秒)．nullの場合はタイムアウトしない．
        pub timeout_secs: Option<u64>,
    }

    impl Default for AppConfig {
        fn default() -> Self {
            Self {
                output_dir: ".".to_string(),
                merge_window: latest_posts::DEFAULT_MERGE_WINDOW,
                persisted_window: latest_posts::DEFAULT_PERSISTED_WINDOW,
                timeout_secs: Some(30),
            }
        }
    }

    impl AppConfig {
        pub fn from_json(json: &str) -> Result<Self, ConfigError> {
            let mut deserializer = serde_json::Deserializer::from_str(json);
            let config: AppConfig = serde_path_to_error::deserialize(&mut deserializer)
                .map_err(|e| ConfigError(e.to_string()))?;
            config.validate()?;
            Ok(config)
        }

        pub fn validate(&self) -> Result<(), ConfigError> {
            if self.merge_window == 0 || self.persisted_window == 0 {
                return Err(ConfigError(
                    "merge_window and persisted_window must be positive.".to_string(),
                ));
            }
            Ok(())
        }
    }

}

use config::AppConfig;
use latest_posts::error::Error;
use latest_posts::reporter::{JsonSaveReporter, ReporterList, StdoutReporter};
use latest_posts::{platforms, Aggregator, HttpRequest};

use clap::Parser;
use std::path::Path;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Parser)]
struct Arg {
    /// config file path.
    #[arg(short, long)]
    config: Option<String>,

    /// print the latest posts to stdout as well.
    #[arg(short, long, default_value_t = false)]
    print: bool,
}

/// configファイルの読み取りかデフォルトの作製．
fn read_or_create_config(path: &Path) -> Result<AppConfig, Box<dyn std::error::Error>> {
    if path.is_file() {
        let json = std::fs::read_to_string(path)?;
        Ok(AppConfig::from_json(&json)?)
    } else {
        info!("Creating default config file into {:?}.", path);
        let default_config = AppConfig::default();
        std::fs::write(path, serde_json::to_string_pretty(&default_config)?)?;

        Ok(default_config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::FmtSubscriber;

    // tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let Arg { config, print } = Arg::parse();

    let app_config = match config {
        Some(path) => read_or_create_config(path.as_ref())?,
        None => AppConfig::default(),
    };
    app_config.validate()?;

    let AppConfig {
        output_dir,
        merge_window,
        persisted_window,
        timeout_secs,
    } = app_config;

    let aggregator = Aggregator::new(
        platforms::registry()?,
        HttpRequest::new(timeout_secs.map(Duration::from_secs))?,
    );

    info!("Aggregating {} feeds.", aggregator.sources().len());

    let mut report_list = ReporterList::new();
    report_list.append_reporter(JsonSaveReporter::new(Path::new(&output_dir)));
    if print {
        report_list.append_reporter(StdoutReporter);
    }

    match latest_posts::aggregate_and_report(
        &aggregator,
        merge_window,
        persisted_window,
        &report_list,
    )
    .await
    {
        Ok(count) => info!("Saved {} latest posts.", count),
        Err(Error::NoPostsError { failed, total }) if failed == total => {
            info!("All {} feeds failed. Nothing is saved.", total);
        }
        Err(Error::NoPostsError { .. }) => {
            info!("No posts are published. Nothing is saved.");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
