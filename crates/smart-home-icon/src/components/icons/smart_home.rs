use yew::prelude::*;

use super::{apply_root, icon_title};
use crate::icon::{AttributeSet, IconOptions, render_with};

/// Props for [`SmartHomeIcon`].
#[derive(Properties, PartialEq)]
pub struct SmartHomeIconProps {
    /// Arbitrary root attributes; these win over every default and shorthand.
    #[prop_or_default]
    pub attrs: AttributeSet,
    /// Extra CSS classes, appended to any `class` in `attrs`.
    #[prop_or_default]
    pub class: Classes,
    /// Width and height in pixels.
    #[prop_or_default]
    pub size: Option<f64>,
    /// Stroke colour.
    #[prop_or_default]
    pub color: Option<AttrValue>,
    /// Stroke width in view-box units.
    #[prop_or_default]
    pub stroke_width: Option<f64>,
    /// Keep the stroke width constant in pixels when resizing.
    #[prop_or_default]
    pub absolute_stroke_width: bool,
    /// Optional accessible title.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    /// Pointer-enter handler.
    #[prop_or_default]
    pub onmouseenter: Option<Callback<MouseEvent>>,
    /// Pointer-leave handler.
    #[prop_or_default]
    pub onmouseleave: Option<Callback<MouseEvent>>,
}

impl SmartHomeIconProps {
    fn options(&self) -> IconOptions {
        IconOptions {
            size: self.size,
            color: self.color.as_ref().map(ToString::to_string),
            stroke_width: self.stroke_width,
            absolute_stroke_width: self.absolute_stroke_width,
            title: self.title.as_ref().map(ToString::to_string),
        }
    }

    fn attributes(&self) -> AttributeSet {
        let mut attrs = self.attrs.clone();
        if !self.class.is_empty() {
            let mut classes = attrs
                .get("class")
                .map(|existing| Classes::from(existing.to_string()))
                .unwrap_or_default();
            classes.push(self.class.clone());
            attrs.insert("class", classes.to_string());
        }
        attrs
    }
}

/// Smart home glyph with caller attributes forwarded onto the `<svg>` root.
#[function_component(SmartHomeIcon)]
pub fn smart_home_icon(props: &SmartHomeIconProps) -> Html {
    let document = render_with(&props.options(), &props.attributes());
    let node = html! {
        <svg
            onclick={props.onclick.clone()}
            onmouseenter={props.onmouseenter.clone()}
            onmouseleave={props.onmouseleave.clone()}
        >
            {icon_title(&document)}
            {for document.paths().iter().map(|path| html! { <path d={path.d()} /> })}
        </svg>
    };
    apply_root(node, &document)
}
