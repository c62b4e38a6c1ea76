//! ヘッダーコンポーネント（ナビゲーション・言語切替）

use leptos::prelude::*;
use portfolio_common::{TextKey, UiState};
use super::i18n_text;

#[component]
pub fn Header(state: RwSignal<UiState>) -> impl IntoView {
    let on_toggle = move |_| {
        state.update(|s| {
            s.toggle_locale();
        });
    };

    view! {
        <header class="header">
            <div class="brand">
                <strong>{state.with_untracked(|s| s.profile().username)}</strong>
                <span class="role">{i18n_text(state, TextKey::Role)}</span>
            </div>
            <nav class="nav">
                <a href="#about">{i18n_text(state, TextKey::NavAbout)}</a>
                <a href="#projects">{i18n_text(state, TextKey::NavProjects)}</a>
                <a href="#skills">{i18n_text(state, TextKey::NavSkills)}</a>
                <a href="#contact">{i18n_text(state, TextKey::NavContact)}</a>
            </nav>
            <button id="langToggle" class="btn btn-small" type="button" on:click=on_toggle>
                {move || state.with(|s| s.text(TextKey::LangToggle))}
            </button>
        </header>
    }
}
