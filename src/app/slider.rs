use leptos::{
    ev::{self, MouseEvent, TouchEvent},
    html,
    prelude::*,
};

use crate::slider::{
    SelectionControl, SelectionGuard, SliderRange, SliderState, Track, DRAG_END_EVENTS,
};

/// Toggles `user-select` on the document body.
struct BodySelection;

impl BodySelection {
    fn set(value: &str) {
        if let Some(body) = document().body() {
            _ = body.style().set_property("user-select", value);
        }
    }
}

impl SelectionControl for BodySelection {
    fn suspend(&self) {
        Self::set("none");
    }

    fn restore(&self) {
        Self::set("");
    }
}

/// Everything a drag holds on to: the global listeners and the suspended
/// text selection. Dropping it releases both.
struct DragSession {
    listeners: Vec<WindowListenerHandle>,
    _selection: SelectionGuard<BodySelection>,
}

impl DragSession {
    fn start(on_move: impl Fn(f64) + Copy + 'static, on_end: impl Fn() + Copy + 'static) -> Self {
        let _selection = SelectionGuard::acquire(BodySelection);
        let mut listeners = vec![
            window_event_listener(ev::mousemove, move |ev: MouseEvent| {
                ev.prevent_default();
                on_move(ev.client_x() as f64);
            }),
            window_event_listener(ev::touchmove, move |ev: TouchEvent| {
                if let Some(x) = first_touch_x(&ev) {
                    on_move(x);
                }
            }),
        ];
        listeners.extend(
            DRAG_END_EVENTS
                .into_iter()
                .map(|name| window_event_listener_untyped(name, move |_| on_end())),
        );
        Self {
            listeners,
            _selection,
        }
    }
}

impl Drop for DragSession {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            listener.remove();
        }
    }
}

fn first_touch_x(ev: &TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|touch| touch.client_x() as f64)
}

#[component]
pub fn ElasticSlider(
    #[prop(into)] min: Signal<f64>,
    #[prop(into)] max: Signal<f64>,
    #[prop(into)] value: Signal<f64>,
    #[prop(into)] on_change: Callback<f64>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let track_ref = NodeRef::<html::Div>::new();
    let state = RwSignal::new(SliderState::new(
        SliderRange::new(min.get_untracked(), max.get_untracked()),
        value.get_untracked(),
    ));
    let session = StoredValue::new_local(None::<DragSession>);

    Effect::new(move |_| {
        let range = SliderRange::new(min.get(), max.get());
        let value = value.get();
        state.update(|s| s.sync(range, value));
    });

    let track = move || {
        track_ref.get_untracked().map(|el| {
            let rect = el.get_bounding_client_rect();
            Track::new(rect.left(), rect.width())
        })
    };

    let emit = move |value: Option<f64>| {
        if let Some(value) = value {
            on_change.run(value);
        }
    };

    let end_drag = move || {
        state.update(SliderState::pointer_up);
        // dropped outside the arena lock
        let ended = session.try_update_value(Option::take).flatten();
        drop(ended);
    };

    let drag_to = move |x: f64| {
        let Some(track) = track() else {
            return;
        };
        emit(state.try_update(|s| s.pointer_move(x, track)).flatten());
    };

    let begin_drag = move |x: f64| {
        let Some(track) = track() else {
            return;
        };
        let value = state.try_update(|s| s.pointer_down(x, track)).flatten();
        let previous = session
            .try_update_value(|s| s.replace(DragSession::start(drag_to, end_drag)))
            .flatten();
        drop(previous);
        emit(value);
    };

    on_cleanup(move || {
        let ended = session.try_update_value(Option::take).flatten();
        drop(ended);
    });

    let percent = move || state.with(|s| s.fraction() * 100.0);
    let dragging = move || state.with(SliderState::is_dragging);

    view! {
        <div
            node_ref=track_ref
            class=format!("relative bg-gray-700/50 rounded-full cursor-pointer {class}")
            on:mousedown=move |ev: MouseEvent| {
                ev.prevent_default();
                begin_drag(ev.client_x() as f64);
            }
            on:click=move |ev: MouseEvent| {
                let Some(track) = track() else {
                    return;
                };
                let x = ev.client_x() as f64;
                emit(state.try_update(|s| s.click(x, track)).flatten());
            }
            on:touchstart=move |ev: TouchEvent| {
                ev.prevent_default();
                if let Some(x) = first_touch_x(&ev) {
                    begin_drag(x);
                }
            }
        >
            <div
                class="absolute top-0 left-0 h-full bg-gradient-to-r from-purple-500 via-pink-500 to-purple-600 rounded-full transition-all duration-200 ease-out shadow-lg"
                style=move || format!("width: {}%", percent())
            />
            <div
                class="absolute top-1/2 w-6 h-6 bg-white rounded-full shadow-xl transition-all duration-200 ease-out border-2 border-purple-400 cursor-grab active:cursor-grabbing"
                style=move || {
                    let (scale, shadow) = if dragging() {
                        ("1.4", "0 0 25px rgba(139, 92, 246, 0.8)")
                    } else {
                        ("1", "0 4px 15px rgba(0, 0, 0, 0.4)")
                    };
                    format!(
                        "left: calc({}% - 12px); transform: translateY(-50%) scale({scale}); box-shadow: {shadow}",
                        percent(),
                    )
                }
            />
        </div>
    }
}
