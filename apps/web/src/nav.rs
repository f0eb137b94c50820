use car_market::Route;
use wasm_bindgen::JsValue;

/// Deployment prefix such as `/Car_Market_Analytics`; empty when served
/// from the site root.
pub const BASE_PATH: &str = match option_env!("CAR_MARKET_BASE_PATH") {
    Some(base) => base,
    None => "",
};

/// Page for the current `location.pathname`. Unknown paths show Home.
pub fn current_route() -> Route {
    let Some(path) = web_sys::window().and_then(|window| window.location().pathname().ok())
    else {
        return Route::Home;
    };

    Route::resolve(&path, BASE_PATH).unwrap_or_else(|| {
        web_sys::console::warn_1(&format!("Unknown page {path}, showing home").into());
        Route::Home
    })
}

/// Records `route` in the browser history without reloading.
pub fn push_route(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };

    let href = route.href(BASE_PATH);
    if let Err(error) = history.push_state_with_url(&JsValue::NULL, "", Some(&href)) {
        web_sys::console::error_1(&error);
    }
}
