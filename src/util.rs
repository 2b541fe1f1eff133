// Console logging and clock helpers shared by the browser-facing modules.
use log::{Level, LevelFilter};

pub fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}

/// Parses names like "debug" or "WARN"; anything unknown means `Info`.
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Routes `log` to the browser console. The backend accepts everything; `level` is
/// enforced through the global max level so it can be changed later with `set_level`.
pub fn init_logging(level: LevelFilter) {
    wasm_logger::init(wasm_logger::Config::new(Level::Trace));
    set_level(level);
}

pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}
