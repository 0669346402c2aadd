use dioxus::prelude::*;
use wallet_frontend::App;

fn main() {
    dioxus_logger::init(tracing::Level::INFO).expect("failed to init logger");
    console_error_panic_hook::set_once();

    launch(App);
}
