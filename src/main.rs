use dioxus::logger::tracing::Level;

use shortcut_stories::App;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialize logger");
    dioxus::launch(App);
}
