//! お問い合わせコンポーネント
//!
//! 送信中はボタンを無効化し、成否にかかわらず元の表示に戻す

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_common::{Notice, SubmitButton, TextKey, UiState};
use super::i18n_text;
use crate::api::contact::{read_form, submit_contact};
use crate::dom;

#[component]
pub fn ContactSection(state: RwSignal<UiState>) -> impl IntoView {
    let form_ref: NodeRef<html::Form> = NodeRef::new();
    let profile = state.with_untracked(|s| *s.profile());

    let button = RwSignal::new(SubmitButton::new(
        state.with_untracked(|s| s.text(TextKey::FormSend)),
    ));

    // 送信中でなければ言語切替に追従
    Effect::new(move |_| {
        let label = state.with(|s| s.text(TextKey::FormSend));
        button.update(|b| {
            if !b.is_disabled() {
                *b = SubmitButton::new(label);
            }
        });
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get() else {
            return;
        };
        let fields = match read_form(&form) {
            Ok(fields) => fields,
            Err(e) => {
                gloo::console::error!(format!("フォーム読み取り失敗: {}", e));
                return;
            }
        };

        let locale = state.with_untracked(|s| s.locale());
        button.update(|b| b.begin(locale));

        spawn_local(async move {
            let outcome = submit_contact(&fields).await;
            if let Err(e) = &outcome {
                gloo::console::warn!(format!("送信失敗: {}", e));
            }
            let notice = button
                .try_update(|b| b.finish(&outcome))
                .unwrap_or(Notice::Failed);
            if notice.resets_form() {
                form.reset();
            }
            dom::alert(notice.message(state.with_untracked(|s| s.locale())));
        });
    };

    view! {
        <section class="section" id="contact">
            <h2>{i18n_text(state, TextKey::ContactTitle)}</h2>
            <p class="text-muted">{i18n_text(state, TextKey::ContactSub)}</p>
            <p>
                <a id="emailLink" href=profile.mailto()>{profile.contact_email}</a>
            </p>

            <form id="contactForm" class="contact-form" node_ref=form_ref on:submit=on_submit>
                <div class="form-group">
                    <label for="name">{i18n_text(state, TextKey::FormName)}</label>
                    <input type="text" id="name" name="name" required />
                </div>
                <div class="form-group">
                    <label for="email">{i18n_text(state, TextKey::FormEmail)}</label>
                    <input type="email" id="email" name="email" required />
                </div>
                <div class="form-group">
                    <label for="message">{i18n_text(state, TextKey::FormMessage)}</label>
                    <textarea id="message" name="message" rows="5" required></textarea>
                </div>
                <button
                    class="btn btn-primary"
                    type="submit"
                    disabled=move || button.with(|b| b.is_disabled())
                >
                    {move || button.with(|b| b.label().to_string())}
                </button>
                <p class="form-hint text-muted">{i18n_text(state, TextKey::FormHint)}</p>
            </form>
        </section>
    }
}
