//! Disk overlay: a filled circular aperture with center and radius handles.

use aperture_core::constraint;
use aperture_core::geometry::{self, Point, dist};
use yew::prelude::*;

use super::handle::DraggableHandle;
use super::handle_parent::HandleParent;
use super::styles::{FRAME_STYLE, MASK_STYLE};

#[derive(Properties, PartialEq)]
pub struct DiskProps {
    pub image_width: f32,
    pub image_height: f32,
    pub cx: f32,
    pub cy: f32,
    pub r: f32,
    /// Preview image URL (may be an object URL backed by a blob).
    #[prop_or_default]
    pub image: Option<AttrValue>,
    #[prop_or_default]
    pub on_center_change: Callback<Point>,
    #[prop_or_default]
    pub on_r_change: Callback<f32>,
}

/// Pure renderer of its props: handle positions and overlay geometry are
/// derived from `(cx, cy, r)` on every render. The center handle is
/// clamped to the image rectangle; the radius handle rides the horizontal
/// center line at `x = cx - r` and reports its distance to the center.
#[function_component(Disk)]
pub fn disk(props: &DiskProps) -> Html {
    let svg_ref = use_node_ref();
    let center = Point::new(props.cx, props.cy);
    let radius_handle = Point::new(props.cx - props.r, props.cy);
    let mask = geometry::circle_path(center, props.r);

    let on_r_move = {
        let on_r_change = props.on_r_change.clone();
        Callback::from(move |p: Point| on_r_change.emit(dist(center, p)))
    };

    html! {
        <svg
            ref={svg_ref.clone()}
            style={FRAME_STYLE}
            width={props.image_width.to_string()}
            height={props.image_height.to_string()}
            viewBox={format!("0 0 {} {}", props.image_width, props.image_height)}
        >
            if let Some(image) = &props.image {
                <image
                    href={image.clone()}
                    width={props.image_width.to_string()}
                    height={props.image_height.to_string()}
                />
            }
            <path d={mask} fill-rule="evenodd" style={MASK_STYLE} />
            <HandleParent width={props.image_width} height={props.image_height} svg_ref={svg_ref}>
                <DraggableHandle
                    x={props.cx}
                    y={props.cy}
                    constraint={constraint::in_rect(props.image_width, props.image_height)}
                    on_drag_move={props.on_center_change.clone()}
                />
                <DraggableHandle
                    x={radius_handle.x}
                    y={radius_handle.y}
                    constraint={constraint::keep_on_y(props.cy)}
                    on_drag_move={on_r_move}
                />
            </HandleParent>
        </svg>
    }
}
