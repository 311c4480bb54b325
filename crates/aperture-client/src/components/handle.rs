//! A single draggable control point.

use aperture_core::{Constraint, Point};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::handle_parent::HandleScope;
use super::styles::{HANDLE_RADIUS, HANDLE_STYLE};

#[derive(Properties, PartialEq)]
pub struct DraggableHandleProps {
    /// Resting x position in image pixels.
    pub x: f32,
    /// Resting y position in image pixels.
    pub y: f32,
    /// Projection applied to every raw candidate point.
    pub constraint: Constraint,
    /// Fired once per pointer move with the post-constraint point.
    #[prop_or_default]
    pub on_drag_move: Callback<Point>,
}

/// One editable geometric degree of freedom, drawn as a circle marker.
///
/// Mousedown starts a gesture; while it is active, document-level
/// listeners track the pointer so the drag survives leaving the svg
/// bounds. Every move translates the pointer into the enclosing
/// [`HandleScope`], projects it through the constraint and reports the
/// result; the raw pointer position is never exposed. The marker follows
/// the constrained point, which lags the pointer while a constraint is
/// clamping.
#[function_component(DraggableHandle)]
pub fn draggable_handle(props: &DraggableHandleProps) -> Html {
    let scope = use_context::<HandleScope>()
        .expect("DraggableHandle must be rendered inside a HandleParent");
    let dragging = use_state(|| false);
    // Constrained position of the gesture in flight; props are the only
    // source of position otherwise.
    let drag_pos = use_state(|| None::<Point>);

    // Constraints are rebuilt by the parent from current positions on
    // every render pass; route the freshest one (and callback) to the
    // in-flight gesture instead of freezing them at drag start.
    let live = use_mut_ref(|| (props.constraint.clone(), props.on_drag_move.clone()));
    *live.borrow_mut() = (props.constraint.clone(), props.on_drag_move.clone());

    {
        let is_active = *dragging;
        let dragging = dragging.clone();
        let drag_pos = drag_pos.clone();
        let live = live.clone();
        use_effect_with(is_active, move |active| {
            let listeners = active.then(move || {
                let document = gloo::utils::document();
                let mousemove = {
                    let drag_pos = drag_pos.clone();
                    EventListener::new(&document, "mousemove", move |event| {
                        let Some(event) = event.dyn_ref::<web_sys::MouseEvent>() else {
                            return;
                        };
                        let raw = scope.client_to_image(event.client_x(), event.client_y());
                        let (constraint, on_drag_move) = live.borrow().clone();
                        let constrained = constraint.apply(raw);
                        drag_pos.set(Some(constrained));
                        on_drag_move.emit(constrained);
                    })
                };
                let mouseup = EventListener::new(&document, "mouseup", move |_| {
                    dragging.set(false);
                    drag_pos.set(None);
                });
                (mousemove, mouseup)
            });
            // Dropping the listeners unregisters them.
            move || drop(listeners)
        });
    }

    let onmousedown = {
        let dragging = dragging.clone();
        let (x, y) = (props.x, props.y);
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            event.stop_propagation();
            tracing::trace!(x, y, "drag start");
            dragging.set(true);
        })
    };

    let pos = (*drag_pos).unwrap_or(Point::new(props.x, props.y));
    html! {
        <circle
            cx={pos.x.to_string()}
            cy={pos.y.to_string()}
            r={HANDLE_RADIUS.to_string()}
            style={HANDLE_STYLE}
            {onmousedown}
        />
    }
}
