//! 自己紹介コンポーネント

use leptos::prelude::*;
use portfolio_common::{TextKey, UiState};
use super::i18n_text;

#[component]
pub fn About(state: RwSignal<UiState>) -> impl IntoView {
    view! {
        <section class="hero" id="about">
            <h1>{i18n_text(state, TextKey::HeroTitle)}</h1>
            <p>{i18n_text(state, TextKey::HeroText)}</p>
            <p>{i18n_text(state, TextKey::HeroText2)}</p>
            <p class="text-muted">{i18n_text(state, TextKey::AboutBody)}</p>

            <dl class="facts">
                <div>
                    <dt>{i18n_text(state, TextKey::AvailabilityTitle)}</dt>
                    <dd>{i18n_text(state, TextKey::AvailabilityValue)}</dd>
                </div>
                <div>
                    <dt>"GitHub"</dt>
                    <dd id="repoCount">{move || state.with(|s| s.repo_count_label())}</dd>
                </div>
                <div>
                    <dd>{i18n_text(state, TextKey::Location)}</dd>
                </div>
            </dl>
        </section>
    }
}
