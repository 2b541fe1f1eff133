use crate::theme::WindowControls;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct WindowFrameProps {
    pub title: AttrValue,
    pub controls: WindowControls,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(WindowFrame)]
pub fn window_frame(props: &WindowFrameProps) -> Html {
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let buttons = html! {<div style="display:flex; gap:6px;">
        <button onclick={close_cb} title="Close" style="width:14px; height:14px; border-radius:50%; border:none; background:#ff5f57; padding:0;"></button>
        <span style="width:14px; height:14px; border-radius:50%; background:#febc2e;"></span>
        <span style="width:14px; height:14px; border-radius:50%; background:#28c840;"></span>
    </div>};
    let title = html! {<span style="font-weight:600; flex:1; text-align:center;">{ props.title.clone() }</span>};
    let bar = match props.controls {
        WindowControls::Left => html! {<>{ buttons }{ title }</>},
        WindowControls::Right => html! {<>{ title }{ buttons }</>},
        // Mobile: full-screen sheet with the close control above the title.
        WindowControls::Top => html! {<div style="display:flex; flex-direction:column; align-items:center; gap:6px; width:100%;">{ buttons }{ title }</div>},
    };
    html! {<div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); width:min(520px, 92%); background:#0d1117; color:#e6edf3; border:1px solid #30363d; border-radius:10px; box-shadow:0 6px 18px rgba(0,0,0,0.6); overflow:hidden;">
        <div style="display:flex; align-items:center; gap:8px; padding:8px 12px; background:#161b22; border-bottom:1px solid #30363d;">{ bar }</div>
        <div style="padding:14px 18px; font-size:14px; line-height:1.5;">{ props.children.clone() }</div>
    </div>}
}
