mod rss_parser;

pub use rss_parser::{RssParser, PUB_DATE_FORMAT};

use crate::error::Error;
use crate::{Posts, Source};

use std::collections::HashMap;

/// 各フィードの形式ごとにPostをパースするためのトレイト．
pub trait PostParser {
    /// パースしてPostsを取得する．配信元に応じたフィルターが適用される．
    fn parse(body: &[u8], source: Source) -> Result<Posts, Error>;
}

/// アイテムを残すかどうかを判定する配信元ごとのフィルター
pub type ItemFilter = fn(&Item) -> bool;

/// Postとして検証される前のフィードの一要素．要素名ごとにテキストを蓄積する．
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    fields: HashMap<String, String>,
}

impl Item {
    pub fn new() -> Self {
        Self::default()
    }

    /// 要素名に対応するテキストを取得
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// テキストを要素名に対応するバッファの末尾に追加する．
    pub fn append(&mut self, field: &str, text: &str) {
        match self.fields.get_mut(field) {
            Some(buffer) => buffer.push_str(text),
            None => {
                self.fields.insert(field.to_string(), text.to_string());
            }
        }
    }
}
