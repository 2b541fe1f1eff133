use super::desktop_icons::{DESKTOP_ITEMS, DesktopIcons, page_count};
use super::swipe_indicator::SwipeIndicator;
use super::taskbar::Taskbar;
use super::window_frame::WindowFrame;
use crate::config::AppConfig;
use crate::model::SwipeDirection;
use crate::state::use_swipe_gesture;
use crate::theme::{DesktopConfig, TaskbarPosition, icons_per_page};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: AppConfig,
}

fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (800.0, 600.0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(600.0);
    (width, height)
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let os = {
        let cfg = props.config.clone();
        *use_state(move || cfg.resolve_os())
    };
    let desktop = DesktopConfig::for_os(os);
    let has_taskbar = desktop.taskbar_position != TaskbarPosition::Hidden;

    let surface_ref = use_node_ref();
    let swipe = use_swipe_gesture(surface_ref.clone(), props.config.gesture);
    let taskbar_visible = use_state(|| has_taskbar);
    let page = use_state(|| 0usize);
    let open_item = use_state(|| None::<usize>);
    let viewport = use_state(viewport_size);

    use_effect_with(os, move |os| {
        log::info!("desktop theme: {}", os.label());
        || ()
    });

    // Keep viewport size current
    {
        let viewport = viewport.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let resize_cb = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                viewport.set(viewport_size());
            }) as Box<dyn FnMut(_)>);
            if let Some(w) = &window {
                let _ = w.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
            }
            move || {
                if let Some(w) = &window {
                    let _ = w.remove_event_listener_with_callback(
                        "resize",
                        resize_cb.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let (width, height) = *viewport;
    let taskbar_px = if *taskbar_visible { desktop.taskbar_height_px as f64 } else { 0.0 };
    let per_page = icons_per_page(width, height - taskbar_px);
    let pages = page_count(DESKTOP_ITEMS.len(), per_page);
    let current_page = (*page).min(pages - 1);

    // Up/down show/hide the taskbar, left/right flip icon pages.
    {
        let taskbar_visible = taskbar_visible.clone();
        let page = page.clone();
        use_effect_with(swipe.feed, move |feed| {
            if feed.last.detected {
                match feed.last.direction {
                    SwipeDirection::Up => taskbar_visible.set(has_taskbar),
                    SwipeDirection::Down => taskbar_visible.set(false),
                    SwipeDirection::Left => page.set((current_page + 1).min(pages - 1)),
                    SwipeDirection::Right => page.set(current_page.saturating_sub(1)),
                    SwipeDirection::None => {}
                }
            }
            || ()
        });
    }

    let on_open = {
        let open_item = open_item.clone();
        Callback::from(move |idx: usize| open_item.set(Some(idx)))
    };
    let on_close = {
        let open_item = open_item.clone();
        Callback::from(move |_| open_item.set(None))
    };

    let window = match (*open_item).and_then(|i| DESKTOP_ITEMS.get(i)) {
        Some(item) => html! {
            <WindowFrame title={item.name} controls={desktop.window_controls} on_close={on_close}>
                <p style="margin:0;">{ item.blurb }</p>
            </WindowFrame>
        },
        None => html! {},
    };

    let surface_style = format!(
        "position:relative; width:100vw; height:100vh; overflow:hidden; background:{}; font-family:system-ui, sans-serif;",
        desktop.wallpaper
    );
    html! {
        <div id="desktop" ref={surface_ref} style={surface_style}>
            <DesktopIcons
                os={os}
                desktop={desktop.clone()}
                width={width}
                height={height - taskbar_px}
                page={current_page}
                on_open={on_open}
            />
            { window }
            <SwipeIndicator feed={swipe.feed} attached={swipe.attached} on_toggle={swipe.toggle.clone()} />
            <Taskbar desktop={desktop.clone()} os={os} visible={*taskbar_visible} page={current_page} pages={pages} />
        </div>
    }
}
