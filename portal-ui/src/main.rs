use dioxus_logger::tracing::{self, Level};

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    if let Err(e) = portal_ui::start() {
        tracing::error!("Portal UI failed to start: {}", portal_ui::dom::js_error(&e));
    }
}
