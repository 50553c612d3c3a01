/// アプリケーション・ライブラリとして利用したときのエラー
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// XMLとして不正なフィードのエラー
    #[error("Error::MalformedFeedError: {0}")]
    MalformedFeedError(String),
    /// アイテムに必須の要素が存在しない場合のエラー
    #[error("Error::MissingFieldError: <{field}> is not found in item.")]
    MissingFieldError { field: String },
    /// Datetimeのパースに関するエラー
    #[error("Error::ParseDatetimeError: {0}")]
    ParseDatetimeError(String),
    /// エンドポイントのURLが不正な場合のエラー
    #[error("Error::InvalidEndpointError: {0}")]
    InvalidEndpointError(String),
    /// リクエストに関するエラー
    #[error("Error::RequestError: {0}")]
    RequestError(String),
    /// 2xx以外のステータスが返ってきた場合のエラー
    #[error("Error::HttpStatusError: {endpoint} returned {status}.")]
    HttpStatusError { endpoint: String, status: u16 },
    /// 並行タスクのjoinに関するエラー
    #[error("Error::TaskError: {0}")]
    TaskError(String),
    /// 全てのフィードからポストが得られなかった場合．
    #[error("Error::NoPostsError: {failed} of {total} feeds failed and no post was found.")]
    NoPostsError { failed: usize, total: usize },
    /// ファイルのI/Oに関するエラー
    #[error("Error::FileError: {0}")]
    FileError(String),
}

impl From<quick_xml::Error> for Error {
    fn from(value: quick_xml::Error) -> Self {
        Self::MalformedFeedError(value.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self::RequestError(value.to_string())
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::TaskError(value.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::FileError(value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::FileError(value.to_string())
    }
}
