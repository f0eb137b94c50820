use car_market::dataset::DEFAULT_DATASET_FILE;
use car_market::{decode_dataset, CarRecord, DatasetError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::nav::BASE_PATH;

/// Listings URL: the build-time override, else the bundled file under the
/// deployment base path.
pub fn data_url() -> String {
    option_env!("CAR_MARKET_DATA_URL").map_or_else(|| dataset_url(BASE_PATH), str::to_string)
}

/// Absolute path of the bundled listings file, independent of the page the
/// app was opened on.
pub fn dataset_url(base: &str) -> String {
    let base = base.trim_matches('/');
    if base.is_empty() {
        format!("/{DEFAULT_DATASET_FILE}")
    } else {
        format!("/{base}/{DEFAULT_DATASET_FILE}")
    }
}

fn unavailable(context: &str, error: &JsValue) -> DatasetError {
    let detail = error
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .unwrap_or_else(|| format!("{error:?}"));
    DatasetError::Unavailable(format!("{context}: {detail}"))
}

/// One GET of the listings file. No retry, no timeout.
pub async fn fetch_dataset(url: &str) -> Result<Vec<CarRecord>, DatasetError> {
    let Some(window) = web_sys::window() else {
        return Err(DatasetError::Unavailable("no window".to_string()));
    };

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|error| unavailable("invalid request", &error))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|error| unavailable("fetch failed", &error))?;

    let response = response_value
        .dyn_into::<Response>()
        .map_err(|error| unavailable("not a response", &error))?;

    if !response.ok() {
        return Err(DatasetError::Unavailable(format!(
            "{url} returned HTTP {}",
            response.status()
        )));
    }

    let body_promise = response
        .text()
        .map_err(|error| unavailable("unreadable body", &error))?;
    let body = JsFuture::from(body_promise)
        .await
        .map_err(|error| unavailable("unreadable body", &error))?;
    let Some(text) = body.as_string() else {
        return Err(DatasetError::Unavailable(format!("{url} body is not text")));
    };

    decode_dataset(&text)
}
