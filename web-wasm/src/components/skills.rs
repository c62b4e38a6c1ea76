//! スキル一覧コンポーネント

use leptos::prelude::*;
use portfolio_common::{TextKey, UiState};
use super::i18n_text;

#[component]
pub fn Skills(state: RwSignal<UiState>) -> impl IntoView {
    let skills = state.with_untracked(|s| s.profile().skills);

    view! {
        <section class="section" id="skills">
            <p class="category">{i18n_text(state, TextKey::SkillsCategory)}</p>
            <h2>{i18n_text(state, TextKey::SkillsTitle)}</h2>
            <p class="text-muted">{i18n_text(state, TextKey::SkillsSub)}</p>
            <ul id="skillsList" class="list">
                {skills
                    .iter()
                    .map(|skill| view! { <li class="list-item">{*skill}</li> })
                    .collect_view()}
            </ul>
        </section>
    }
}
