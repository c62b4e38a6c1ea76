//! お問い合わせフォームの送受信データ

use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

/// 中継サーバーのエンドポイント
pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// 送信件名の接頭辞
const SUBJECT_PREFIX: &str = "Contact Portfolio";

/// フォーム入力（未検証）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
        }
    }

    /// 必須項目を検証
    ///
    /// 3項目すべてが存在し空でないこと。形式・長さの検証は行わない。
    pub fn validate(self) -> Result<ContactSubmission> {
        match (required(self.name), required(self.email), required(self.message)) {
            (Some(name), Some(email), Some(message)) => Ok(ContactSubmission { name, email, message }),
            _ => Err(Error::MissingFields),
        }
    }
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// 検証済みのお問い合わせ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    name: String,
    email: String,
    message: String,
}

impl ContactSubmission {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// メール件名
    pub fn subject(&self) -> String {
        format!("{} - {}", SUBJECT_PREFIX, self.name)
    }

    /// メール本文（入力値をそのまま埋め込む）
    pub fn body_text(&self) -> String {
        format!("Nom: {}\nEmail: {}\n\n{}", self.name, self.email, self.message)
    }
}

/// 中継サーバーの応答
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    pub fn accepted() -> Self {
        Self { ok: true, error: None }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(reason.into()),
        }
    }
}
