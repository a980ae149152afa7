use leptos::{ev::MouseEvent, html, prelude::*};

use crate::spotlight::{Spot, GLOW_RADIUS};

/// 3D-preserving wrapper. The tilt itself is switched off; the wrapper keeps
/// card markup uniform.
#[component]
pub fn TiltedCard(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <div
            class=format!("transition-transform duration-300 ease-out {class}")
            style="transform-style: preserve-3d"
        >
            {children()}
        </div>
    }
}

/// Card with a soft glow that follows the pointer.
#[component]
pub fn SpotlightCard(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let (spot, set_spot) = signal(Spot::default());

    let glow_style = move || {
        let spot = spot.get();
        format!(
            "left: {}px; top: {}px; width: {size}px; height: {size}px; \
             background: radial-gradient(circle, rgba(139, 92, 246, 0.3) 0%, transparent 70%); \
             opacity: {}",
            spot.x - GLOW_RADIUS,
            spot.y - GLOW_RADIUS,
            if spot.is_visible() { 1 } else { 0 },
            size = GLOW_RADIUS * 2.0,
        )
    };

    view! {
        <div
            node_ref=card_ref
            class=format!("relative overflow-hidden {class}")
            on:mousemove=move |ev: MouseEvent| {
                let Some(card) = card_ref.get_untracked() else {
                    return;
                };
                let rect = card.get_bounding_client_rect();
                let x = ev.client_x() as f64;
                let y = ev.client_y() as f64;
                set_spot.set(Spot::relative(x, y, rect.left(), rect.top()));
            }
            on:mouseleave=move |_| set_spot.set(Spot::default())
        >
            <div
                class="absolute pointer-events-none transition-opacity duration-300"
                style=glow_style
            />
            {children()}
        </div>
    }
}
