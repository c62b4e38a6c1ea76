//! 画面コンポーネント

pub mod about;
pub mod contact_section;
pub mod footer;
pub mod header;
pub mod projects;
pub mod skills;

use leptos::prelude::*;
use portfolio_common::{TextKey, UiState};

/// `data-i18n` 付きのテキスト
///
/// 描画時の言語で初期化し、以降の切替は `dom::set_language` が書き換える。
pub fn i18n_text(state: RwSignal<UiState>, key: TextKey) -> impl IntoView {
    let text = state.with_untracked(|s| s.text(key));
    view! { <span data-i18n=key.attr()>{text}</span> }
}
