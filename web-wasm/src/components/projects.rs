//! プロジェクト一覧コンポーネント

use leptos::prelude::*;
use portfolio_common::{RepoListing, RepoSummary, TextKey, UiState};
use super::i18n_text;

#[component]
pub fn Projects(
    state: RwSignal<UiState>,
    listing: ReadSignal<Option<RepoListing>>,
) -> impl IntoView {
    let repos = move || {
        listing
            .get()
            .map(RepoListing::into_repos)
            .unwrap_or_default()
    };
    // 取得完了後、表示対象が0件のときだけ表示
    let hide_empty = move || !listing.with(|l| l.as_ref().is_some_and(RepoListing::show_empty));

    view! {
        <section class="section" id="projects">
            <p class="category">{i18n_text(state, TextKey::ProjectsCategory)}</p>
            <h2>{i18n_text(state, TextKey::ProjectsTitle)}</h2>
            <p class="text-muted">{i18n_text(state, TextKey::ProjectsSub)}</p>

            <ul id="projectsList" class="list">
                <For
                    each=repos
                    key=|repo| repo.html_url.clone()
                    children=move |repo| view! { <RepoItem repo=repo /> }
                />
            </ul>
            <p id="projectsEmpty" class="text-muted" data-i18n="projects_empty" hidden=hide_empty>
                {state.with_untracked(|s| s.text(TextKey::ProjectsEmpty))}
            </p>
        </section>
    }
}

/// リポジトリ1件
#[component]
fn RepoItem(repo: RepoSummary) -> impl IntoView {
    let description = repo.description_text().unwrap_or_default().to_string();
    let language = repo.language_tag().map(str::to_string);
    let stars = repo.star_label();

    view! {
        <li class="list-item">
            <h3>
                <a href=repo.html_url target="_blank" rel="noreferrer">{repo.name}</a>
            </h3>
            <p>{description}</p>
            <div class="meta">
                {language.map(|language| view! { <span>{language}</span> })}
                {stars.map(|stars| view! { <span>{stars}</span> })}
            </div>
        </li>
    }
}
