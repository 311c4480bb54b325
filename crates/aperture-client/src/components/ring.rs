//! Ring overlay: an annular aperture with center, inner and outer handles.

use aperture_core::constraint;
use aperture_core::geometry::{self, Point, dist};
use yew::prelude::*;

use super::handle::DraggableHandle;
use super::handle_parent::HandleParent;
use super::styles::{FRAME_STYLE, MASK_STYLE};

#[derive(Properties, PartialEq)]
pub struct RingProps {
    pub image_width: f32,
    pub image_height: f32,
    pub cx: f32,
    pub cy: f32,
    pub ri: f32,
    pub ro: f32,
    /// Preview image URL (may be an object URL backed by a blob).
    #[prop_or_default]
    pub image: Option<AttrValue>,
    #[prop_or_default]
    pub on_center_change: Callback<Point>,
    #[prop_or_default]
    pub on_ri_change: Callback<f32>,
    #[prop_or_default]
    pub on_ro_change: Callback<f32>,
}

/// Pure renderer of its props. Both radius handles ride the horizontal
/// center line left of the center (`x = cx - r`); each one's constraint
/// is rebuilt every render against the sibling's current position, which
/// is what keeps `ri <= ro` through any drag sequence.
#[function_component(Ring)]
pub fn ring(props: &RingProps) -> Html {
    let svg_ref = use_node_ref();
    let center = Point::new(props.cx, props.cy);
    let inner_handle = Point::new(props.cx - props.ri, props.cy);
    let outer_handle = Point::new(props.cx - props.ro, props.cy);
    let mask = geometry::annulus_path(center, props.ri, props.ro);

    let on_ri_move = {
        let on_ri_change = props.on_ri_change.clone();
        Callback::from(move |p: Point| on_ri_change.emit(dist(center, p)))
    };
    let on_ro_move = {
        let on_ro_change = props.on_ro_change.clone();
        Callback::from(move |p: Point| on_ro_change.emit(dist(center, p)))
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
                    x={outer_handle.x}
                    y={outer_handle.y}
                    constraint={constraint::ring_outer(inner_handle.x, props.cy)}
                    on_drag_move={on_ro_move}
                />
                <DraggableHandle
                    x={inner_handle.x}
                    y={inner_handle.y}
                    constraint={constraint::ring_inner(outer_handle.x, props.cy)}
                    on_drag_move={on_ri_move}
                />
            </HandleParent>
        </svg>
    }
}
