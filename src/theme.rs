// OS detection and per-OS desktop cosmetics; unmapped OSes fall back to the Windows look.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsKind {
    #[default]
    Windows,
    MacOs,
    Ios,
    Android,
    Linux,
}

impl OsKind {
    pub fn label(self) -> &'static str {
        match self {
            OsKind::Windows => "Windows",
            OsKind::MacOs => "macOS",
            OsKind::Ios => "iOS",
            OsKind::Android => "Android",
            OsKind::Linux => "Linux",
        }
    }
}

/// Mobile platforms are checked first since their user agents also mention desktop kernels.
pub fn detect_os(user_agent: &str, platform: &str) -> OsKind {
    if ["iPad", "iPhone", "iPod"].iter().any(|d| user_agent.contains(d)) {
        return OsKind::Ios;
    }
    if user_agent.contains("Android") {
        return OsKind::Android;
    }
    let either = |needle: &str| user_agent.contains(needle) || platform.contains(needle);
    if either("Mac") {
        OsKind::MacOs
    } else if either("Win") {
        OsKind::Windows
    } else if either("Linux") {
        OsKind::Linux
    } else {
        OsKind::Windows
    }
}

pub fn detect_os_from_navigator() -> OsKind {
    let Some(nav) = web_sys::window().map(|w| w.navigator()) else {
        return OsKind::default();
    };
    let ua = nav.user_agent().unwrap_or_default();
    let platform = nav.platform().unwrap_or_default();
    detect_os(&ua, &platform)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskbarPosition {
    Bottom,
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowControls {
    Left,
    Right,
    Top,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DesktopConfig {
    /// CSS background for the desktop surface.
    pub wallpaper: &'static str,
    pub taskbar_height_px: u32,
    pub taskbar_position: TaskbarPosition,
    pub taskbar_color: &'static str,
    pub icon_style: OsKind,
    pub window_controls: WindowControls,
    pub project_extension: &'static str,
    pub text_extension: &'static str,
}

impl DesktopConfig {
    pub fn for_os(os: OsKind) -> Self {
        match os {
            OsKind::MacOs => Self {
                wallpaper: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
                taskbar_height_px: 60,
                taskbar_position: TaskbarPosition::Bottom,
                taskbar_color: "rgba(255, 255, 255, 0.8)",
                icon_style: OsKind::MacOs,
                window_controls: WindowControls::Left,
                project_extension: ".app",
                text_extension: ".txt",
            },
            OsKind::Ios => Self {
                wallpaper: "linear-gradient(135deg, #ff9a9e 0%, #fecfef 50%, #fecfef 100%)",
                taskbar_height_px: 0,
                taskbar_position: TaskbarPosition::Hidden,
                taskbar_color: "transparent",
                icon_style: OsKind::Ios,
                window_controls: WindowControls::Top,
                project_extension: "",
                text_extension: "",
            },
            OsKind::Linux => Self {
                wallpaper: "linear-gradient(135deg, #2c3e50 0%, #4a6741 100%)",
                taskbar_height_px: 40,
                taskbar_position: TaskbarPosition::Bottom,
                taskbar_color: "rgba(44, 62, 80, 0.9)",
                icon_style: OsKind::Linux,
                window_controls: WindowControls::Right,
                project_extension: "",
                text_extension: ".txt",
            },
            // Android has no look of its own.
            OsKind::Windows | OsKind::Android => Self {
                wallpaper: "linear-gradient(135deg, #1e3c72 0%, #2a5298 100%)",
                taskbar_height_px: 48,
                taskbar_position: TaskbarPosition::Bottom,
                taskbar_color: "rgba(0, 0, 0, 0.8)",
                icon_style: OsKind::Windows,
                window_controls: WindowControls::Right,
                project_extension: ".exe",
                text_extension: ".txt",
            },
        }
    }

    pub fn extension_for(&self, kind: FileKind) -> &'static str {
        match kind {
            FileKind::Project => self.project_extension,
            FileKind::Text => self.text_extension,
            FileKind::Folder => "",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileKind {
    Project,
    Text,
    Folder,
}

pub fn file_icon(kind: FileKind, os: OsKind) -> &'static str {
    match (os, kind) {
        (OsKind::MacOs | OsKind::Ios, FileKind::Project) => "📱",
        (OsKind::MacOs | OsKind::Ios, FileKind::Text) => "📝",
        (OsKind::MacOs | OsKind::Ios, FileKind::Folder) => "📂",
        (OsKind::Linux, FileKind::Project) => "⚙️",
        (_, FileKind::Project) => "🖥️",
        (_, FileKind::Text) => "📄",
        (_, FileKind::Folder) => "📁",
    }
}

pub const ICON_SIZE: f64 = 80.0;
pub const ICON_SPACING: f64 = 20.0;
pub const GRID_MARGIN: f64 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: f64,
    pub y: f64,
}

/// Icons per row for a container, never less than one.
pub fn icons_per_row(container_width: f64) -> usize {
    let fit = ((container_width - 2.0 * GRID_MARGIN) / (ICON_SIZE + ICON_SPACING)).floor();
    if fit.is_finite() && fit >= 1.0 { fit as usize } else { 1 }
}

/// Top-left corner of the `index`-th icon, filled row by row.
/// Rows are unbounded, so the container height only matters to the caller's paging.
pub fn grid_position(index: usize, container_width: f64, _container_height: f64) -> GridPosition {
    let per_row = icons_per_row(container_width);
    let row = index / per_row;
    let col = index % per_row;
    let step = ICON_SIZE + ICON_SPACING;
    GridPosition {
        x: GRID_MARGIN + col as f64 * step,
        y: GRID_MARGIN + row as f64 * step,
    }
}

/// How many icons fit on one screen of the given size, at least one.
pub fn icons_per_page(container_width: f64, container_height: f64) -> usize {
    let rows = ((container_height - 2.0 * GRID_MARGIN) / (ICON_SIZE + ICON_SPACING)).floor();
    let rows = if rows.is_finite() && rows >= 1.0 { rows as usize } else { 1 };
    icons_per_row(container_width) * rows
}
