use crate::{PlatForm, Source};

/// Zennのフィード．フィルターは適用しない．
pub struct Zenn;

impl PlatForm for Zenn {
    const SOURCE: Source = Source::Zenn;
    const ENDPOINT: &'static str = "https://zenn.dev/tokizuoh/feed";
}
