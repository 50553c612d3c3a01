mod hatena;
mod zenn;

pub use hatena::{Hatena, EXCLUDED_CATEGORY};
pub use zenn::Zenn;

use crate::error::Error;
use crate::FeedSource;

/// 取得対象の全てのフィード．URLが不正な場合は起動時のエラーとなる．
pub fn registry() -> Result<Vec<FeedSource>, Error> {
    Ok(vec![FeedSource::of::<Hatena>()?, FeedSource::of::<Zenn>()?])
}
