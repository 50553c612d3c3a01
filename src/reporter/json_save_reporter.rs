use crate::Report;
use crate::{error::Error, serializer, Posts};

use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// 出力するファイル名
pub const OUTPUT_FILE_NAME: &str = "latest_posts.json";

/// Postsの内容をjsonに保存するリポーター．
pub struct JsonSaveReporter {
    dir_path: PathBuf,
}

impl JsonSaveReporter {
    pub fn new<'a, P: Into<Cow<'a, Path>>>(dir_path: P) -> Self {
        let dir_path: Cow<'a, Path> = dir_path.into();

        Self {
            dir_path: dir_path.into_owned(),
        }
    }

    pub fn file_path(&self) -> PathBuf {
        self.dir_path.join(OUTPUT_FILE_NAME)
    }
}

#[async_trait::async_trait]
impl Report for JsonSaveReporter {
    async fn report(&self, posts: &Posts) -> Result<(), Error> {
        let bytes = serializer::serialize(posts)?;

        // ディレクトリの存在確認，作製
        if !self.dir_path.is_dir() {
            std::fs::DirBuilder::new()
                .recursive(true)
                .create(&self.dir_path)?
        }

        let file_path = self.file_path();

        info!("Creating and saving into: {:?}", file_path);
        let mut file = File::create(&file_path)?;
        file.write_all(&bytes)?;

        Ok(())
    }
}
