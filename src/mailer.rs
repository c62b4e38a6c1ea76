//! メール送信
//!
//! `MailTransport` を実装した送信器で1件ずつ送る。再送・キューイングは行わない。

use std::future::Future;

use lettre::message::header::{ContentType, HeaderName, HeaderValue};
use lettre::message::{Mailbox, MessageBuilder};
use lettre::transport::smtp::authentication::Credentials as SmtpCredentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use portfolio_common::ContactSubmission;

use crate::config::{Credentials, RelayConfig, SmtpSettings};
use crate::error::{RelayError, Result};

/// 送信するメール
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub body: String,
}

impl OutgoingMail {
    /// お問い合わせ内容からメールを作成（返信先は送信者のアドレス）
    pub fn compose(config: &RelayConfig, credentials: &Credentials, submission: &ContactSubmission) -> Self {
        Self {
            from: config.mail_from(credentials).to_string(),
            to: config.mail_to(credentials).to_string(),
            reply_to: submission.email().to_string(),
            subject: submission.subject(),
            body: submission.body_text(),
        }
    }

    /// lettre のメッセージに変換
    pub fn to_message(&self) -> Result<Message> {
        let builder = Message::builder()
            .from(parse_mailbox(&self.from)?)
            .to(parse_mailbox(&self.to)?);

        with_reply_to(builder, &self.reply_to)
            .subject(self.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(self.body.clone())
            .map_err(|e| RelayError::MessageBuild(e.to_string()))
    }
}

/// 返信先を設定（アドレスとして解釈できない値もそのまま載せる）
fn with_reply_to(builder: MessageBuilder, reply_to: &str) -> MessageBuilder {
    match reply_to.parse::<Mailbox>() {
        Ok(mailbox) => builder.reply_to(mailbox),
        Err(_) => {
            // 改行はヘッダー分割になるため空白に置換
            let raw = reply_to.replace(['\r', '\n'], " ");
            builder.raw_header(HeaderValue::new(HeaderName::new_from_ascii_str("Reply-To"), raw))
        }
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox> {
    address
        .parse::<Mailbox>()
        .map_err(|e| RelayError::MessageBuild(format!("{}: {}", address, e)))
}

/// メール送信器
pub trait MailTransport: Send + Sync + 'static {
    fn send(
        &self,
        settings: &SmtpSettings,
        credentials: &Credentials,
        mail: &OutgoingMail,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// SMTP送信器（リクエストごとに接続を作成）
#[derive(Debug, Clone, Copy, Default)]
pub struct SmtpMailer;

impl SmtpMailer {
    fn transport(settings: &SmtpSettings, credentials: &Credentials) -> Result<AsyncSmtpTransport<Tokio1Executor>> {
        let builder = if settings.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
                .map_err(|e| RelayError::Send(e.to_string()))?
        } else {
            let tls = TlsParameters::new(settings.host.clone())
                .map_err(|e| RelayError::Send(e.to_string()))?;
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
                .tls(Tls::Opportunistic(tls))
        };

        Ok(builder
            .port(settings.port)
            .credentials(SmtpCredentials::new(
                credentials.user.clone(),
                credentials.password.clone(),
            ))
            .build())
    }
}

impl MailTransport for SmtpMailer {
    async fn send(&self, settings: &SmtpSettings, credentials: &Credentials, mail: &OutgoingMail) -> Result<()> {
        let message = mail.to_message()?;
        let transport = Self::transport(settings, credentials)?;

        log::debug!("SMTP送信: {}:{} (secure={})", settings.host, settings.port, settings.secure);
        transport
            .send(message)
            .await
            .map_err(|e| RelayError::Send(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_common::ContactForm;

    fn config() -> RelayConfig {
        RelayConfig::from_lookup(|name| match name {
            "SMTP_USER" => Some("owner@example.com".to_string()),
            "SMTP_PASS" => Some("secret".to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn test_compose() {
        let config = config();
        let credentials = config.credentials().unwrap();
        let submission = ContactForm::new("A", "a@b.com", "hi").validate().unwrap();

        let mail = OutgoingMail::compose(&config, &credentials, &submission);
        assert_eq!(mail.from, "owner@example.com");
        assert_eq!(mail.to, "owner@example.com");
        assert_eq!(mail.reply_to, "a@b.com");
        assert_eq!(mail.subject, "Contact Portfolio - A");
        assert_eq!(mail.body, "Nom: A\nEmail: a@b.com\n\nhi");
    }

    #[test]
    fn test_to_message_sets_reply_to() {
        let config = config();
        let credentials = config.credentials().unwrap();
        let submission = ContactForm::new("A", "a@b.com", "hi").validate().unwrap();

        let message = OutgoingMail::compose(&config, &credentials, &submission)
            .to_message()
            .unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("Reply-To: a@b.com"));
        assert!(formatted.contains("Subject: Contact Portfolio - A"));
    }

    #[test]
    fn test_to_message_keeps_unparseable_reply_to_verbatim() {
        let config = config();
        let credentials = config.credentials().unwrap();
        let submission = ContactForm::new("A", "not-an-email", "hi").validate().unwrap();

        let message = OutgoingMail::compose(&config, &credentials, &submission)
            .to_message()
            .expect("返信先の形式に関わらず作成できること");
        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("Reply-To: not-an-email"));
    }

    #[test]
    fn test_to_message_reply_to_newlines_do_not_split_headers() {
        let config = config();
        let credentials = config.credentials().unwrap();
        let submission = ContactForm::new("A", "x\r\nBcc: evil@example.com", "hi")
            .validate()
            .unwrap();

        let message = OutgoingMail::compose(&config, &credentials, &submission)
            .to_message()
            .unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(!formatted.contains("\r\nBcc:"));
    }
}
