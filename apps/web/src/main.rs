mod app;
mod fetch;
mod local_storage;
mod nav;
mod render;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen_futures::spawn_local;

use crate::app::WebApp;
use crate::local_storage::LocalStorage;

type SharedApp = Rc<RefCell<WebApp<LocalStorage>>>;

fn main() -> io::Result<()> {
    let app: SharedApp = Rc::new(RefCell::new(WebApp::new(
        LocalStorage::open(),
        nav::current_route(),
    )));

    spawn_local(load_cars(app.clone()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let app = app.clone();
        move |event| {
            let changed = app.borrow_mut().handle_key(event.code, event.shift);
            if let Some(route) = changed {
                nav::push_route(route);
            }
        }
    });

    terminal.draw_web(move |f| {
        let app = app.borrow();
        render::render_page(&*app, f);
    });

    Ok(())
}

async fn load_cars(app: SharedApp) {
    let result = fetch::fetch_dataset(&fetch::data_url()).await;
    if let Err(error) = &result {
        web_sys::console::error_1(&format!("Error loading car data: {error}").into());
    }
    app.borrow_mut().apply_dataset(result);
}
