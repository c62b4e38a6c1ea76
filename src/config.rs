//! SMTP送信設定
//!
//! 環境変数は起動時に一度だけ読み込み、以降は不変の `RelayConfig` として扱う。
//! 認証情報の有無はリクエストごとに `credentials()` で確認する。

use crate::error::{RelayError, Result};
use portfolio_common::Error;

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 465;

/// 接続先SMTPサーバー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    /// true: 接続時からTLS（SMTPS）、false: STARTTLS（サーバーが対応していれば）
    pub secure: bool,
}

/// SMTP認証情報
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// 中継サーバー設定
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub smtp: SmtpSettings,
    user: Option<String>,
    password: Option<String>,
    mail_to: Option<String>,
    mail_from: Option<String>,
}

impl RelayConfig {
    /// プロセスの環境変数から読み込み
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 任意の参照関数から読み込み（空文字・空白のみは未設定扱い）
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = get("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string());
        let port = match get("SMTP_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| RelayError::Config(format!("SMTP_PORT が不正です: {}", raw)))?,
            None => DEFAULT_SMTP_PORT,
        };
        let secure = get("SMTP_SECURE")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(true);

        Ok(Self {
            smtp: SmtpSettings { host, port, secure },
            user: get("SMTP_USER"),
            password: get("SMTP_PASS"),
            mail_to: get("MAIL_TO"),
            mail_from: get("MAIL_FROM"),
        })
    }

    /// 認証情報（未設定なら MissingCredentials）
    pub fn credentials(&self) -> portfolio_common::Result<Credentials> {
        let user = self.user.clone().ok_or(Error::MissingCredentials("SMTP_USER"))?;
        let password = self.password.clone().ok_or(Error::MissingCredentials("SMTP_PASS"))?;
        Ok(Credentials { user, password })
    }

    /// 宛先（未設定なら認証ユーザー）
    pub fn mail_to<'a>(&'a self, credentials: &'a Credentials) -> &'a str {
        self.mail_to.as_deref().unwrap_or(&credentials.user)
    }

    /// 差出人（未設定なら認証ユーザー）
    pub fn mail_from<'a>(&'a self, credentials: &'a Credentials) -> &'a str {
        self.mail_from.as_deref().unwrap_or(&credentials.user)
    }
}
