//! Icon components and the helpers that turn an [`IconDocument`] into `Html`.

use indexmap::IndexMap;
use yew::prelude::*;
use yew::virtual_dom::Attributes;

use crate::icon::{AttributeSet, IconDocument};

mod smart_home;

pub use smart_home::{SmartHomeIcon, SmartHomeIconProps};

/// Converts merged root attributes into a Yew attribute map, order preserved.
fn root_attributes(set: &AttributeSet) -> Attributes {
    Attributes::IndexMap(
        set.iter()
            .map(|(name, value)| {
                (
                    AttrValue::from(name.to_string()),
                    AttrValue::from(value.to_string()),
                )
            })
            .collect::<IndexMap<_, _>>(),
    )
}

fn icon_title(document: &IconDocument) -> Html {
    document
        .title()
        .map(|text| html! { <title>{text.to_string()}</title> })
        .unwrap_or_default()
}

/// Replaces the attributes of an `<svg>` node with the document's root set.
///
/// Listeners attached through `html!` are left in place.
fn apply_root(mut node: Html, document: &IconDocument) -> Html {
    if let Html::VTag(tag) = &mut node {
        tag.attributes = root_attributes(document.root());
    }
    node
}
