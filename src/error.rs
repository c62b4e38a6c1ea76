use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use portfolio_common::ContactResponse;
use thiserror::Error;

/// クライアントに返す固定メッセージ
pub const MISSING_FIELDS: &str = "Missing fields";
pub const SEND_FAILED: &str = "Send failed";

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error(transparent)]
    Common(#[from] portfolio_common::Error),

    #[error("メール作成エラー: {0}")]
    MessageBuild(String),

    #[error("メール送信エラー: {0}")]
    Send(String),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::Common(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 応答に載せる文言（内部情報は出さない）
    pub fn public_message(&self) -> &'static str {
        if self.status() == StatusCode::BAD_REQUEST {
            MISSING_FIELDS
        } else {
            SEND_FAILED
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("不正なリクエスト: {}", self);
        }
        (status, Json(ContactResponse::rejected(self.public_message()))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
