//! ドキュメント直接操作

use portfolio_common::{relabel, LabeledText, Locale};
use wasm_bindgen::JsCast;
use web_sys::Element;

/// 言語を切り替える
///
/// ルート要素の `lang` / `data-lang` を更新し、`data-i18n` を持つ要素の
/// テキストを辞書の値に差し替える。未知のキーを持つ要素はそのまま。
pub fn set_language(locale: Locale) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", locale.code());
        let _ = root.set_attribute("data-lang", locale.code());
    }

    let Ok(nodes) = document.query_selector_all("[data-i18n]") else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(key) = element.get_attribute("data-i18n") else {
            continue;
        };
        let mut node = LabeledText::new(key, element.text_content().unwrap_or_default());
        if relabel(std::iter::once(&mut node), locale) > 0 {
            element.set_text_content(Some(&node.text));
        }
    }
}

/// アラート表示
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// 現在の西暦年
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn element(document: &web_sys::Document, key: &str, text: &str) -> Element {
        let el = document.create_element("span").unwrap();
        el.set_attribute("data-i18n", key).unwrap();
        el.set_text_content(Some(text));
        document.body().unwrap().append_child(&el).unwrap();
        el
    }

    #[wasm_bindgen_test]
    fn test_set_language_relabels_known_keys() {
        let document = web_sys::window().unwrap().document().unwrap();
        let known = element(&document, "nav_projects", "");
        let unknown = element(&document, "no_such_key", "keep me");

        set_language(Locale::En);
        assert_eq!(known.text_content().as_deref(), Some("Projects"));
        assert_eq!(unknown.text_content().as_deref(), Some("keep me"));

        let root = document.document_element().unwrap();
        assert_eq!(root.get_attribute("lang").as_deref(), Some("en"));
        assert_eq!(root.get_attribute("data-lang").as_deref(), Some("en"));

        set_language(Locale::Fr);
        assert_eq!(known.text_content().as_deref(), Some("Projets"));
    }
}
