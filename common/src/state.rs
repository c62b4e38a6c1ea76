//! 画面状態（ブラウザ側）
//!
//! DOM操作から切り離した状態遷移のみを持つ。描画は web-wasm 側で行う。

use crate::error::Result;
use crate::i18n::{Dictionary, TextKey};
use crate::locale::Locale;
use crate::profile::Profile;
use crate::repo::{public_repos, RepoSummary};

/// 件数が0のときの表示
const NO_COUNT: &str = "—";

/// アプリケーションの状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    locale: Locale,
    repo_count: usize,
    profile: Profile,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Profile::default(), crate::profile::DEFAULT_LOCALE)
    }
}

impl UiState {
    pub fn new(profile: Profile, locale: Locale) -> Self {
        Self {
            locale,
            repo_count: 0,
            profile,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn dictionary(&self) -> Dictionary {
        Dictionary::new(self.locale)
    }

    pub fn text(&self, key: TextKey) -> &'static str {
        self.dictionary().get(key)
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// 言語切替ボタン: fr ⇔ en
    pub fn toggle_locale(&mut self) -> Locale {
        self.locale = self.locale.toggle();
        self.locale
    }

    pub fn repo_count(&self) -> usize {
        self.repo_count
    }

    /// 「N public repos」形式のラベル（0件は「—」）
    pub fn repo_count_label(&self) -> String {
        if self.repo_count == 0 {
            NO_COUNT.to_string()
        } else {
            format!("{} {}", self.repo_count, self.text(TextKey::RepoCount))
        }
    }

    /// 取得結果を反映
    ///
    /// 失敗時は件数を0に戻し、空表示にする（取得失敗と0件は区別しない）。
    pub fn apply_repositories(&mut self, fetched: Result<Vec<RepoSummary>>) -> RepoListing {
        let repos = match fetched {
            Ok(repos) => public_repos(repos),
            Err(_) => Vec::new(),
        };
        self.repo_count = repos.len();
        RepoListing { repos }
    }
}

/// 表示するリポジトリ一覧
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepoListing {
    repos: Vec<RepoSummary>,
}

impl RepoListing {
    pub fn repos(&self) -> &[RepoSummary] {
        &self.repos
    }

    pub fn into_repos(self) -> Vec<RepoSummary> {
        self.repos
    }

    /// 「プロジェクトなし」表示の要否
    pub fn show_empty(&self) -> bool {
        self.repos.is_empty()
    }
}

/// 送信結果の通知
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed,
}

impl Notice {
    pub fn message(&self, locale: Locale) -> &'static str {
        let key = match self {
            Notice::Sent => TextKey::SendSuccess,
            Notice::Failed => TextKey::SendFailed,
        };
        Dictionary::new(locale).get(key)
    }

    /// 送信成功時のみフォームをリセット
    pub fn resets_form(&self) -> bool {
        matches!(self, Notice::Sent)
    }
}

/// 送信ボタンの状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    label: String,
    disabled: bool,
    original_label: Option<String>,
}

impl SubmitButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            original_label: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// 送信開始: 無効化して「送信中」表示に切替
    pub fn begin(&mut self, locale: Locale) {
        let sending = Dictionary::new(locale).get(TextKey::FormSending).to_string();
        let original = std::mem::replace(&mut self.label, sending);
        self.original_label.get_or_insert(original);
        self.disabled = true;
    }

    /// 送信終了: 成否にかかわらず元の表示に戻し、通知を返す
    pub fn finish<T, E>(&mut self, outcome: &std::result::Result<T, E>) -> Notice {
        if let Some(original) = self.original_label.take() {
            self.label = original;
        }
        self.disabled = false;
        if outcome.is_ok() {
            Notice::Sent
        } else {
            Notice::Failed
        }
    }
}
