//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 必須項目（name / email / message）のいずれかが未入力
    #[error("Missing fields")]
    MissingFields,

    /// SMTP認証情報が未設定
    #[error("Missing env var: {0}")]
    MissingCredentials(&'static str),

    /// 通信エラー（GitHub API / SMTP）
    #[error("Transport error: {0}")]
    Transport(String),

    /// 想定外のレスポンス形式
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 入力側（クライアント）の誤りかどうか
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::MissingFields)
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
