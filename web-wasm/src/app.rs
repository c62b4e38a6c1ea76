//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_common::{RepoListing, UiState};
use crate::api::github::fetch_repositories;
use crate::components::{
    about::About,
    contact_section::ContactSection,
    footer::Footer,
    header::Header,
    projects::Projects,
    skills::Skills,
};
use crate::dom;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態（言語・リポジトリ件数）
    let state = RwSignal::new(UiState::default());
    // None: 取得中
    let (listing, set_listing) = signal(None::<RepoListing>);

    // 言語が変わるたびにドキュメントへ反映
    Effect::new(move |_| {
        let locale = state.with(|s| s.locale());
        dom::set_language(locale);
    });

    // 起動時に一度だけ取得
    let username = state.with_untracked(|s| s.profile().username);
    spawn_local(async move {
        let fetched = fetch_repositories(username).await;
        if let Err(e) = &fetched {
            gloo::console::warn!(format!("リポジトリ取得失敗: {}", e));
        }
        if let Some(result) = state.try_update(|s| s.apply_repositories(fetched)) {
            set_listing.set(Some(result));
        }
    });

    view! {
        <Header state=state />
        <main class="container">
            <About state=state />
            <Projects state=state listing=listing />
            <Skills state=state />
            <ContactSection state=state />
        </main>
        <Footer state=state />
    }
}
