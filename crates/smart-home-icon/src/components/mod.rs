//! Yew components wrapping the DOM-free icon model.

pub mod icons;

pub use icons::{SmartHomeIcon, SmartHomeIconProps};
