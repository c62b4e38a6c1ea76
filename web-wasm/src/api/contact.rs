//! お問い合わせ送信（中継サーバーへ POST）

use portfolio_common::{ContactForm, Error, CONTACT_ENDPOINT};
use wasm_bindgen::prelude::*;
use web_sys::{FormData, HtmlFormElement, Request, RequestInit};

use super::{fetch, js_error};

/// フォームの入力値を読み取る
pub fn read_form(form: &HtmlFormElement) -> Result<ContactForm, Error> {
    let data = FormData::new_with_form(form).map_err(js_error)?;
    let field = |name: &str| data.get(name).as_string();
    Ok(ContactForm {
        name: field("name"),
        email: field("email"),
        message: field("message"),
    })
}

/// JSONで送信し、非2xxは失敗とする
pub async fn submit_contact(form: &ContactForm) -> Result<(), Error> {
    let body = serde_json::to_string(form)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(CONTACT_ENDPOINT, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let resp = fetch(&request).await?;
    if !resp.ok() {
        return Err(Error::Transport(format!("Send failed: {}", resp.status())));
    }
    Ok(())
}
