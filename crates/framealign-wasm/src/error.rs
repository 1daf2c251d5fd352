//! Conversion of core errors into JavaScript exceptions.

use framealign_core::AlignError;
use wasm_bindgen::prelude::*;

/// Turn an [`AlignError`] into a JS `Error`.
///
/// Problems with the photo itself carry the message meant for the user.
/// Contract violations are programmer errors on the JS side, so they are
/// also written to the browser console.
pub(crate) fn align_error(err: AlignError) -> JsValue {
    if err.is_user_facing() {
        return js_sys::Error::new(err.user_message()).into();
    }
    let message = err.to_string();
    web_sys::console::warn_1(&JsValue::from_str(&message));
    js_sys::Error::new(&message).into()
}

/// Turn any other displayable error into a JS `Error`.
pub(crate) fn js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
