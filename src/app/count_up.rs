use std::time::Duration;

use leptos::prelude::*;
use leptos_use::{use_raf_fn, utils::Pausable, UseRafFnCallbackArgs};

use crate::count_up::{value_at, DEFAULT_DURATION};

#[component]
pub fn CountUp(
    #[prop(into)] end: Signal<u64>,
    #[prop(default = DEFAULT_DURATION)] duration: Duration,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let (shown, set_shown) = signal(0u64);
    let (finished, set_finished) = signal(false);
    let elapsed = StoredValue::new(Duration::ZERO);

    let Pausable { pause, resume, .. } = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        if finished.get_untracked() {
            return;
        }
        let frame = Duration::from_secs_f64(args.delta.max(0.0) / 1000.0);
        let Some(total) = elapsed.try_update_value(|e| {
            *e += frame;
            *e
        }) else {
            return;
        };
        set_shown.set(value_at(end.get_untracked(), total, duration));
        if total >= duration {
            set_finished.set(true);
        }
    });

    // new target: count again from zero
    Effect::watch(
        move || end.get(),
        move |_, _, _| {
            elapsed.set_value(Duration::ZERO);
            set_shown.set(0);
            set_finished.set(false);
        },
        false,
    );

    Effect::new(move |_| {
        if finished.get() {
            pause();
        } else {
            resume();
        }
    });

    view! { <span class=class>{shown}</span> }
}
