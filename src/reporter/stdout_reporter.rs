use crate::Report;
use crate::{error::Error, serializer, Posts};

use std::io::Write;

/// Postsのjsonを標準出力に書き出すリポーター
pub struct StdoutReporter;

#[async_trait::async_trait]
impl Report for StdoutReporter {
    async fn report(&self, posts: &Posts) -> Result<(), Error> {
        let bytes = serializer::serialize(posts)?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&bytes)?;
        stdout.flush()?;

        Ok(())
    }
}
