use crate::error::Error;
use crate::parser::{Item, ItemFilter, PostParser};
use crate::{Post, Posts, Source};

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use regex::Regex;
use tracing::{debug, info};

/// pubDateの形式 (`EEE, dd MMM yyyy HH:mm:ss Z`)
pub const PUB_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

const ITEM_ELEMENT: &str = "item";

static WHITESPACE_PAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// パース中の状態
enum State {
    OutsideItem,
    InsideItem {
        item: Item,
        current_element: Option<String>,
    },
}

impl State {
    fn append_text(&mut self, text: &str) {
        // 空白のみのテキストは無視
        if text.trim().is_empty() {
            return;
        }
        if let State::InsideItem {
            item,
            current_element: Some(element),
        } = self
        {
            item.append(element, text);
        }
    }
}

/// pubDateのパーサー．固定の形式のみ受け付ける．
fn parse_pub_date(pub_date: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_str(pub_date.trim(), PUB_DATE_FORMAT)
        .map(|datetime| datetime.with_timezone(&Utc))
        .map_err(|e| Error::ParseDatetimeError(format!("{:?}: {}", pub_date, e)))
}

/// タイトルのHTMLエンティティをデコードし，空白を正規化する．
fn normalize_title(title: &str) -> String {
    let decoded = html_escape::decode_html_entities(title);
    WHITESPACE_PAT.replace_all(&decoded, " ").trim().to_string()
}

fn required<'a>(item: &'a Item, field: &str) -> Result<&'a str, Error> {
    item.get(field)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::MissingFieldError {
            field: field.to_string(),
        })
}

/// 蓄積したアイテムからPostを作製する．
fn materialize(item: &Item, source: Source) -> Result<Post, Error> {
    let title = normalize_title(required(item, "title")?);
    if title.is_empty() {
        return Err(Error::MissingFieldError {
            field: "title".to_string(),
        });
    }
    let url = required(item, "link")?.to_string();
    let published_at = parse_pub_date(required(item, "pubDate")?)?;

    Ok(Post {
        title,
        url,
        published_at,
        source,
    })
}

/// RSS 2.0の`<item>`に対応したパーサー
pub struct RssParser;

impl RssParser {
    /// 任意のフィルターを用いてパースする．
    ///
    /// 不正なアイテムは読み飛ばすが，XMLとして不正な場合はフィード全体をエラーとする．
    pub fn parse_with_filter(
        body: &[u8],
        source: Source,
        filter: ItemFilter,
    ) -> Result<Posts, Error> {
        info!("Parsing {} feed.", source);
        let mut reader = Reader::from_reader(body);

        let mut posts: Posts = Vec::new();
        let mut buf = Vec::new();
        let mut state = State::OutsideItem;
        let mut depth: usize = 0;
        let mut has_root = false;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    depth += 1;
                    has_root = true;

                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    if name == ITEM_ELEMENT {
                        state = State::InsideItem {
                            item: Item::new(),
                            current_element: None,
                        };
                    } else if let State::InsideItem {
                        current_element, ..
                    } = &mut state
                    {
                        *current_element = Some(name);
                    }
                }
                Event::Empty(_) => {
                    has_root = true;
                }
                Event::End(e) => {
                    depth = depth.saturating_sub(1);

                    if e.name().as_ref() == ITEM_ELEMENT.as_bytes() {
                        if let State::InsideItem { item, .. } =
                            std::mem::replace(&mut state, State::OutsideItem)
                        {
                            if !filter(&item) {
                                debug!("Item excluded by {} filter.", source);
                            } else {
                                match materialize(&item, source) {
                                    Ok(post) => posts.push(post),
                                    Err(e) => debug!("Skipping item. {}", e),
                                }
                            }
                        }
                    } else if let State::InsideItem {
                        current_element, ..
                    } = &mut state
                    {
                        *current_element = None;
                    }
                }
                Event::Text(e) => {
                    let text = e.unescape()?;
                    state.append_text(&text);
                }
                Event::CData(e) => {
                    let text = String::from_utf8_lossy(&e);
                    state.append_text(&text);
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if !has_root {
            return Err(Error::MalformedFeedError(
                "no root element is found.".to_string(),
            ));
        }
        if depth != 0 {
            return Err(Error::MalformedFeedError(format!(
                "{} elements are not closed.",
                depth
            )));
        }

        info!("Finished parsing {} feed: {} posts.", source, posts.len());
        Ok(posts)
    }
}

impl PostParser for RssParser {
    fn parse(body: &[u8], source: Source) -> Result<Posts, Error> {
        Self::parse_with_filter(body, source, source.item_filter())
    }
}
