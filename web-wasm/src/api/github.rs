//! GitHub API連携（公開リポジトリ一覧）

use portfolio_common::{parse_repos, repos_url, Error, RepoSummary};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode};

use super::{fetch, js_error};

/// リポジトリ一覧を取得（1回のみ、再試行なし）
///
/// 通信エラー・非2xx・JSON不正はいずれも Err を返す。
pub async fn fetch_repositories(username: &str) -> Result<Vec<RepoSummary>, Error> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&repos_url(username), &opts).map_err(js_error)?;
    let resp = fetch(&request).await?;

    if !resp.ok() {
        return Err(Error::Transport(format!("GitHub API error: {}", resp.status())));
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text
        .as_string()
        .ok_or_else(|| Error::MalformedResponse("本文が文字列ではありません".into()))?;

    parse_repos(&body)
}
