use crate::error::Error;
use crate::Post;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;
use serde_json::Value;
use std::collections::BTreeMap;

/// 日時をUTCオフセット付きのRFC 3339形式で出力する．
pub(crate) fn serialize_timestamp<S: Serializer>(
    datetime: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&datetime.to_rfc3339_opts(SecondsFormat::Secs, false))
}

/// オブジェクトのキーを辞書順に並べ替える．
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted = map
                .into_iter()
                .map(|(key, value)| (key, sort_keys(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(values) => Value::Array(values.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// Postsをjsonに変換する．同じ入力に対しては常に同じバイト列となる．
pub fn serialize(posts: &[Post]) -> Result<Vec<u8>, Error> {
    let value = sort_keys(serde_json::to_value(posts)?);

    let mut bytes = serde_json::to_vec_pretty(&value)?;
    bytes.push(b'\n');
    Ok(bytes)
}
