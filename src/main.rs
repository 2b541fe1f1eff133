use log::LevelFilter;

mod components;
mod config;
mod model;
mod state;
mod theme;
mod util;

use components::app::{App, AppProps};
use config::AppConfig;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    // Info until the page config says otherwise, so config warnings still show.
    util::init_logging(LevelFilter::Info);
    let config = AppConfig::load();
    util::set_level(util::parse_level(&config.log_level));

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
