use crate::state::dom::SwipeFeed;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SwipeIndicatorProps {
    pub feed: SwipeFeed,
    pub attached: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(SwipeIndicator)]
pub fn swipe_indicator(props: &SwipeIndicatorProps) -> Html {
    let toggle_cb = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let last = props.feed.last;
    let text = if props.feed.resolved == 0 {
        "Swipe to explore".to_string()
    } else if last.detected {
        format!("Swipe: {}", last.direction.label())
    } else {
        "No swipe".to_string()
    };
    let toggle_label = if props.attached { "Disable swipe" } else { "Enable swipe" };
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.85); color:#e6edf3; border:1px solid #30363d; border-radius:8px; padding:6px 10px; display:flex; gap:8px; align-items:center; font-size:12px;">
        <span>{ text }</span>
        <button onclick={toggle_cb} style="padding:2px 8px; font-size:11px;">{ toggle_label }</button>
    </div>}
}
