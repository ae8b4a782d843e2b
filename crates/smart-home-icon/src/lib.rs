#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Smart home icon for Yew front-ends.
//!
//! The [`icon`] module holds the DOM-free model: [`render`] merges caller
//! attributes over the glyph's root defaults and returns an [`IconDocument`]
//! carrying the nine fixed paths. The Yew component lives in `components` and
//! is only built for `wasm32`.

pub mod icon;

#[cfg(target_arch = "wasm32")]
pub mod components;

pub use icon::{
    AttributeSet, AttributeValue, IconDocument, IconError, IconOptions, PathElement, render,
    render_with,
};

#[cfg(target_arch = "wasm32")]
pub use components::{SmartHomeIcon, SmartHomeIconProps};
