use crate::parser::Item;
use crate::{PlatForm, Source};

/// Zennと重複する記事に付けられるカテゴリー
pub const EXCLUDED_CATEGORY: &str = "Zenn";

/// はてなブログのフィード
pub struct Hatena;

impl PlatForm for Hatena {
    const SOURCE: Source = Source::Hatena;
    const ENDPOINT: &'static str = "https://tokizuoh.hatenablog.com/rss?size=5";

    fn keep(item: &Item) -> bool {
        item.get("category") != Some(EXCLUDED_CATEGORY)
    }
}
