pub mod binding;
pub mod dom;
pub mod swipe;

pub use dom::use_swipe_gesture;
