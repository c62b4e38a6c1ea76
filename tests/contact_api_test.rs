//! お問い合わせAPIテスト
//!
//! ルーターにリクエストを直接流し、応答と送信内容を検証

use std::path::Path;
use std::sync::Mutex;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use portfolio_common::ContactResponse;
use portfolio_relay::config::{Credentials, RelayConfig, SmtpSettings};
use portfolio_relay::error::{RelayError, Result};
use portfolio_relay::mailer::{MailTransport, OutgoingMail};
use portfolio_relay::server::{router, AppState};
use tower::ServiceExt;

/// 送信内容を記録するだけの送信器
#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<OutgoingMail>>,
}

impl MailTransport for RecordingMailer {
    async fn send(&self, _settings: &SmtpSettings, _credentials: &Credentials, mail: &OutgoingMail) -> Result<()> {
        // 実際の送信器と同じくメッセージを組み立ててから記録
        mail.to_message()?;
        self.sent.lock().unwrap().push(mail.clone());
        Ok(())
    }
}

/// 常に失敗する送信器
struct FailingMailer;

impl MailTransport for FailingMailer {
    async fn send(&self, _settings: &SmtpSettings, _credentials: &Credentials, _mail: &OutgoingMail) -> Result<()> {
        Err(RelayError::Send("connection refused".to_string()))
    }
}

fn config(with_password: bool) -> RelayConfig {
    RelayConfig::from_lookup(|name| match name {
        "SMTP_USER" => Some("owner@example.com".to_string()),
        "SMTP_PASS" if with_password => Some("secret".to_string()),
        _ => None,
    })
    .unwrap()
}

fn json_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn call<M: MailTransport>(state: AppState<M>, request: Request<Body>) -> (StatusCode, ContactResponse) {
    let app = router(state, Path::new("dist"));
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: ContactResponse = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

/// 正常送信: 1件送信され、返信先が送信者になる
#[tokio::test]
async fn test_contact_success() {
    let state = AppState::new(config(true), RecordingMailer::default());
    let (status, body) = call(
        state.clone(),
        json_request(r#"{"name":"A","email":"a@b.com","message":"hi"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, ContactResponse::accepted());

    let sent = state.mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].reply_to, "a@b.com");
    assert_eq!(sent[0].to, "owner@example.com");
    assert_eq!(sent[0].from, "owner@example.com");
    assert_eq!(sent[0].subject, "Contact Portfolio - A");
}

/// 名前が空なら400
#[tokio::test]
async fn test_contact_empty_name() {
    let state = AppState::new(config(true), RecordingMailer::default());
    let (status, body) = call(
        state.clone(),
        json_request(r#"{"name":"","email":"a@b.com","message":"hi"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, ContactResponse::rejected("Missing fields"));
    assert!(state.mailer.sent.lock().unwrap().is_empty());
}

/// 項目欠落・不正な本文も400
#[tokio::test]
async fn test_contact_absent_fields_and_garbage() {
    for raw in [r#"{"name":"A","email":"a@b.com"}"#, "{}", "not json", ""] {
        let state = AppState::new(config(true), RecordingMailer::default());
        let (status, body) = call(state, json_request(raw)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {raw}");
        assert_eq!(body.error.as_deref(), Some("Missing fields"));
    }
}

/// パスワード未設定なら500
#[tokio::test]
async fn test_contact_missing_credentials() {
    let state = AppState::new(config(false), RecordingMailer::default());
    let (status, body) = call(
        state.clone(),
        json_request(r#"{"name":"A","email":"a@b.com","message":"hi"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, ContactResponse::rejected("Send failed"));
    assert!(state.mailer.sent.lock().unwrap().is_empty());
}

/// 送信失敗は500（再送しない）
#[tokio::test]
async fn test_contact_transport_failure() {
    let state = AppState::new(config(true), FailingMailer);
    let (status, body) = call(
        state,
        json_request(r#"{"name":"A","email":"a@b.com","message":"hi"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error.as_deref(), Some("Send failed"));
    assert!(!body.ok);
}

/// フォーム形式の本文も受け付ける
#[tokio::test]
async fn test_contact_urlencoded() {
    let state = AppState::new(config(true), RecordingMailer::default());
    let request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("name=Jean&email=j%40d.fr&message=Bonjour%0Aencore"))
        .unwrap();
    let (status, _) = call(state.clone(), request).await;

    assert_eq!(status, StatusCode::OK);
    let sent = state.mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].body, "Nom: Jean\nEmail: j@d.fr\n\nBonjour\nencore");
}

/// 複数回送れば毎回1件ずつ送信される（重複排除しない）
#[tokio::test]
async fn test_contact_no_deduplication() {
    let state = AppState::new(config(true), RecordingMailer::default());
    for _ in 0..2 {
        let (status, _) = call(
            state.clone(),
            json_request(r#"{"name":"A","email":"a@b.com","message":"hi"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    assert_eq!(state.mailer.sent.lock().unwrap().len(), 2);
}

/// 項目不足と認証情報未設定が重なった場合は400を優先
#[tokio::test]
async fn test_contact_missing_fields_checked_before_credentials() {
    let state = AppState::new(config(false), RecordingMailer::default());
    let (status, body) = call(
        state.clone(),
        json_request(r#"{"name":"","email":"a@b.com","message":"hi"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, ContactResponse::rejected("Missing fields"));
    assert!(state.mailer.sent.lock().unwrap().is_empty());
}

/// メールアドレスの形式は検証しない（返信先にそのまま設定）
#[tokio::test]
async fn test_contact_accepts_any_email_text() {
    let state = AppState::new(config(true), RecordingMailer::default());
    let (status, body) = call(
        state.clone(),
        json_request(r#"{"name":"A","email":"not-an-email","message":"hi"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, ContactResponse::accepted());
    let sent = state.mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].reply_to, "not-an-email");
}

/// JSON以外の Content-Type の本文は読まない
#[tokio::test]
async fn test_contact_plain_text_body_is_rejected() {
    let state = AppState::new(config(true), RecordingMailer::default());
    let request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(r#"{"name":"A","email":"a@b.com","message":"hi"}"#))
        .unwrap();
    let (status, body) = call(state.clone(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error.as_deref(), Some("Missing fields"));
    assert!(state.mailer.sent.lock().unwrap().is_empty());
}
