use leptos::prelude::*;
use portfolio_common::{TextKey, UiState};
use super::i18n_text;
use crate::dom;

#[component]
pub fn Footer(state: RwSignal<UiState>) -> impl IntoView {
    view! {
        <footer class="footer">
            <span id="year">{dom::current_year()}</span>
            " · "
            {i18n_text(state, TextKey::FooterNote)}
        </footer>
    }
}
