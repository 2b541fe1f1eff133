use crate::theme::{DesktopConfig, OsKind, TaskbarPosition};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TaskbarProps {
    pub desktop: DesktopConfig,
    pub os: OsKind,
    pub visible: bool,
    pub page: usize,
    pub pages: usize,
}

#[function_component(Taskbar)]
pub fn taskbar(props: &TaskbarProps) -> Html {
    if !props.visible || props.desktop.taskbar_position == TaskbarPosition::Hidden {
        return html! {};
    }
    let d = &props.desktop;
    // Light taskbars (macOS dock) need dark text.
    let fg = if props.os == OsKind::MacOs { "#1f2328" } else { "#f0f6fc" };
    let style = format!(
        "position:absolute; left:0; right:0; bottom:0; height:{}px; background:{}; color:{}; display:flex; align-items:center; justify-content:space-between; padding:0 14px; box-sizing:border-box; font-size:13px;",
        d.taskbar_height_px, d.taskbar_color, fg
    );
    html! {<div id="taskbar" style={style}>
        <span style="font-weight:600;">{ props.os.label() }</span>
        { if props.pages > 1 {
            html!{ <span style="opacity:0.8;">{ format!("{} / {}", props.page + 1, props.pages) }</span> }
        } else { html!{} } }
    </div>}
}
