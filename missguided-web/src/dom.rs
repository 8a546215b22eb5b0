//! Browser timer glue for the search delays.

use js_sys::Promise;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::WebError;

/// Best-effort text for a rejected promise or thrown value.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{value:?}"),
    }
}

/// Resolve after `duration_ms` milliseconds using `setTimeout`.
///
/// # Errors
/// [`WebError::Timer`] when there is no `window` or the timer cannot be armed.
#[allow(clippy::future_not_send)]
pub async fn sleep_ms(duration_ms: u32) -> Result<(), WebError> {
    let window =
        web_sys::window().ok_or_else(|| WebError::Timer("no window to schedule on".into()))?;
    let timeout = i32::try_from(duration_ms).unwrap_or(i32::MAX);

    let mut armed = Ok(());
    let promise = Promise::new(&mut |resolve, _reject| {
        armed = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout)
            .map(drop);
    });
    armed.map_err(|err| WebError::Timer(js_error_message(&err)))?;

    JsFuture::from(promise)
        .await
        .map_err(|err| WebError::Timer(js_error_message(&err)))?;
    Ok(())
}
