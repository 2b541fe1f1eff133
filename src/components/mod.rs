pub mod app;
pub mod desktop_icons;
pub mod swipe_indicator;
pub mod taskbar;
pub mod window_frame;
