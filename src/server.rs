//! HTTPルーティング
//!
//! - `POST /api/contact`: お問い合わせをメールで中継
//! - `GET /`: index.html
//! - その他: 静的ファイル

use std::path::Path;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::routing::post;
use axum::{Json, Router};
use portfolio_common::{ContactForm, ContactResponse, CONTACT_ENDPOINT};
use tower_http::services::{ServeDir, ServeFile};

use crate::config::RelayConfig;
use crate::error::Result;
use crate::mailer::{MailTransport, OutgoingMail};

/// ハンドラ間で共有する状態（不変）
pub struct AppState<M> {
    pub config: Arc<RelayConfig>,
    pub mailer: Arc<M>,
}

impl<M> Clone for AppState<M> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            mailer: Arc::clone(&self.mailer),
        }
    }
}

impl<M: MailTransport> AppState<M> {
    pub fn new(config: RelayConfig, mailer: M) -> Self {
        Self {
            config: Arc::new(config),
            mailer: Arc::new(mailer),
        }
    }
}

/// ルーター作成
pub fn router<M: MailTransport>(state: AppState<M>, static_root: &Path) -> Router {
    Router::new()
        .route(CONTACT_ENDPOINT, post(contact::<M>))
        .route_service("/", ServeFile::new(static_root.join("index.html")))
        .fallback_service(ServeDir::new(static_root))
        .with_state(state)
}

/// お問い合わせ受付
async fn contact<M: MailTransport>(
    State(state): State<AppState<M>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ContactResponse>> {
    let submission = parse_form(&headers, &body).validate()?;
    let credentials = state.config.credentials()?;
    let mail = OutgoingMail::compose(&state.config, &credentials, &submission);

    state
        .mailer
        .send(&state.config.smtp, &credentials, &mail)
        .await?;

    log::info!("お問い合わせを送信しました: {} <{}>", submission.name(), submission.email());
    Ok(Json(ContactResponse::accepted()))
}

/// リクエスト本文を読み取る（JSON / フォーム形式）
///
/// 読み取れない本文・その他の Content-Type は項目なしとして扱う。
fn parse_form(headers: &HeaderMap, body: &[u8]) -> ContactForm {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let parsed = if content_type.starts_with("application/json") {
        serde_json::from_slice::<ContactForm>(body).map_err(|e| e.to_string())
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        serde_urlencoded::from_bytes::<ContactForm>(body).map_err(|e| e.to_string())
    } else {
        Err(format!("未対応の Content-Type: {:?}", content_type))
    };

    parsed.unwrap_or_else(|e| {
        log::debug!("リクエスト本文を解析できません: {}", e);
        ContactForm::default()
    })
}
