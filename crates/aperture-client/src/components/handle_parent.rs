//! Coordinate scope shared by a widget and its handles.

use aperture_core::Point;
use web_sys::Element;
use yew::prelude::*;

/// The local image-pixel coordinate system of an overlay widget.
///
/// Handles report positions in `[0, width] × [0, height]` regardless of
/// how large the svg is rendered on screen; constraints never see screen
/// pixels.
#[derive(Clone, PartialEq)]
pub struct HandleScope {
    pub width: f32,
    pub height: f32,
    svg_ref: NodeRef,
}

impl HandleScope {
    pub fn new(width: f32, height: f32, svg_ref: NodeRef) -> Self {
        Self {
            width,
            height,
            svg_ref,
        }
    }

    /// Translate viewport client coordinates into image pixels,
    /// compensating for the widget's screen offset and display scale.
    pub fn client_to_image(&self, client_x: i32, client_y: i32) -> Point {
        let Some(element) = self.svg_ref.cast::<Element>() else {
            // Scope not mounted yet; no sensible translation exists.
            return Point::new(client_x as f32, client_y as f32);
        };
        let rect = element.get_bounding_client_rect();
        let scale_x = if rect.width() > 0.0 {
            f64::from(self.width) / rect.width()
        } else {
            1.0
        };
        let scale_y = if rect.height() > 0.0 {
            f64::from(self.height) / rect.height()
        } else {
            1.0
        };
        Point::new(
            ((f64::from(client_x) - rect.left()) * scale_x) as f32,
            ((f64::from(client_y) - rect.top()) * scale_y) as f32,
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct HandleParentProps {
    /// Image width in pixels, the x extent of the scope.
    pub width: f32,
    /// Image height in pixels, the y extent of the scope.
    pub height: f32,
    /// The svg element the scope measures its screen placement against.
    pub svg_ref: NodeRef,
    #[prop_or_default]
    pub children: Html,
}

/// Establishes the image-space coordinate scope for its child handles.
#[function_component(HandleParent)]
pub fn handle_parent(props: &HandleParentProps) -> Html {
    let scope = HandleScope::new(props.width, props.height, props.svg_ref.clone());
    html! {
        <ContextProvider<HandleScope> context={scope}>
            <g class="handle-parent">
                { props.children.clone() }
            </g>
        </ContextProvider<HandleScope>>
    }
}
