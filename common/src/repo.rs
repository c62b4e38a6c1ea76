//! GitHubリポジトリ一覧
//!
//! APIレスポンスの型と、公開リポジトリの抽出・表示用整形

use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

const GITHUB_API_URL: &str = "https://api.github.com";

/// 1回の取得件数の上限
pub const PER_PAGE: u32 = 100;

/// リポジトリ一覧APIのURL（更新日時順、最大100件）
pub fn repos_url(username: &str) -> String {
    format!(
        "{}/users/{}/repos?per_page={}&sort=updated",
        GITHUB_API_URL, username, PER_PAGE
    )
}

/// リポジトリ概要（APIレスポンスの必要な項目のみ）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: Option<u32>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub private: bool,
}

impl RepoSummary {
    /// フォークでも非公開でもない
    pub fn is_public_source(&self) -> bool {
        !self.fork && !self.private
    }

    /// 説明文（未設定・空文字は None）
    pub fn description_text(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }

    /// 言語タグ（未設定・空文字は None）
    pub fn language_tag(&self) -> Option<&str> {
        non_empty(self.language.as_deref())
    }

    /// スター数ラベル（0件・未設定は表示しない）
    pub fn star_label(&self) -> Option<String> {
        match self.stargazers_count {
            Some(count) if count > 0 => Some(format!("★ {}", count)),
            _ => None,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// フォーク・非公開を除外（順序は維持）
pub fn public_repos(repos: Vec<RepoSummary>) -> Vec<RepoSummary> {
    repos.into_iter().filter(RepoSummary::is_public_source).collect()
}

/// APIレスポンス本文をパース
pub fn parse_repos(body: &str) -> Result<Vec<RepoSummary>> {
    serde_json::from_str(body).map_err(|e| Error::MalformedResponse(e.to_string()))
}
