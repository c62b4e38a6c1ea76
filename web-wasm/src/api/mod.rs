//! ブラウザ fetch 連携

pub mod contact;
pub mod github;

use portfolio_common::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, Response};

/// JS側のエラーを通信エラーとして扱う
pub(crate) fn js_error(value: JsValue) -> Error {
    Error::Transport(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// リクエストを送信してレスポンスを返す（ステータスは検査しない）
pub(crate) async fn fetch(request: &Request) -> Result<Response, Error> {
    let window = web_sys::window().ok_or_else(|| Error::Transport("window がありません".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(js_error)?;
    resp_value
        .dyn_into::<Response>()
        .map_err(|_| Error::MalformedResponse("Response ではありません".into()))
}
