use crate::theme::{DesktopConfig, FileKind, OsKind, file_icon, grid_position, icons_per_page};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DesktopItem {
    pub name: &'static str,
    pub kind: FileKind,
    pub blurb: &'static str,
}

pub const DESKTOP_ITEMS: &[DesktopItem] = &[
    DesktopItem { name: "About Me", kind: FileKind::Text, blurb: "Developer who likes small tools, fast feedback loops and typed code." },
    DesktopItem { name: "Projects", kind: FileKind::Folder, blurb: "A collection of side projects, from games to developer tooling." },
    DesktopItem { name: "Portfolio", kind: FileKind::Project, blurb: "This site: a desktop that dresses up as the OS you are browsing from." },
    DesktopItem { name: "Maze Defence", kind: FileKind::Project, blurb: "Browser tower defence where you mine the maze yourself." },
    DesktopItem { name: "Resume", kind: FileKind::Text, blurb: "Experience, education and the usual bullet points." },
    DesktopItem { name: "Experiments", kind: FileKind::Folder, blurb: "Half-finished ideas, kept around for reference." },
    DesktopItem { name: "Contact", kind: FileKind::Text, blurb: "Reach out by email or on GitHub." },
];

/// Number of pages needed to show every item, at least one.
pub fn page_count(items: usize, per_page: usize) -> usize {
    items.div_ceil(per_page.max(1)).max(1)
}

#[derive(Properties, PartialEq, Clone)]
pub struct DesktopIconsProps {
    pub os: OsKind,
    pub desktop: DesktopConfig,
    pub width: f64,
    pub height: f64,
    pub page: usize,
    pub on_open: Callback<usize>,
}

#[function_component(DesktopIcons)]
pub fn desktop_icons(props: &DesktopIconsProps) -> Html {
    let per_page = icons_per_page(props.width, props.height);
    let first = props.page * per_page;
    let icons = DESKTOP_ITEMS
        .iter()
        .enumerate()
        .skip(first)
        .take(per_page)
        .map(|(idx, item)| {
            let pos = grid_position(idx - first, props.width, props.height);
            let open = {
                let cb = props.on_open.clone();
                Callback::from(move |_| cb.emit(idx))
            };
            let label = format!("{}{}", item.name, props.desktop.extension_for(item.kind));
            let style = format!(
                "position:absolute; left:{}px; top:{}px; width:80px; display:flex; flex-direction:column; align-items:center; gap:4px; color:#fff; text-shadow:0 1px 2px rgba(0,0,0,0.7); cursor:pointer; user-select:none;",
                pos.x, pos.y
            );
            html! {<div key={idx} style={style} onclick={open}>
                <span style="font-size:40px; line-height:48px;">{ file_icon(item.kind, props.os) }</span>
                <span style="font-size:12px; text-align:center; word-break:break-word;">{ label }</span>
            </div>}
        })
        .collect::<Html>();
    html! {<div class={format!("icons-{:?}", props.desktop.icon_style).to_lowercase()}>{ icons }</div>}
}
