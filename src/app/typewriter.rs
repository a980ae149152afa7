use leptos::prelude::*;

use crate::typewriter::{Speeds, Typewriter};

type Pending = StoredValue<Option<TimeoutHandle>>;

fn clear_pending(pending: Pending) {
    if let Some(handle) = pending.try_update_value(Option::take).flatten() {
        handle.clear();
    }
}

/// Arms the one timer for the machine's current phase, replacing any earlier one.
fn schedule(machine: StoredValue<Typewriter>, pending: Pending, set_shown: WriteSignal<String>) {
    clear_pending(pending);
    let Some(delay) = machine.try_with_value(Typewriter::delay) else {
        return;
    };
    let fired = move || {
        _ = pending.try_update_value(Option::take);
        let Some(shown) = machine.try_update_value(|m| {
            m.advance();
            m.displayed().to_string()
        }) else {
            return;
        };
        if set_shown.try_set(shown).is_some() {
            // owner is gone
            return;
        }
        schedule(machine, pending, set_shown);
    };
    match set_timeout_with_handle(fired, delay) {
        Ok(handle) => pending.set_value(Some(handle)),
        Err(err) => log::warn!("typewriter timer could not be set: {err:?}"),
    }
}

#[component]
pub fn TypewriterText(
    #[prop(into)] text: Signal<String>,
    #[prop(default = 100)] type_speed: u64,
    #[prop(default = 50)] delete_speed: u64,
    #[prop(default = 2000)] pause_time: u64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let speeds = Speeds::from_millis(type_speed, delete_speed, pause_time);
    let machine = StoredValue::new(Typewriter::new(text.get_untracked(), speeds));
    let pending: Pending = StoredValue::new(None);
    let (shown, set_shown) = signal(String::new());

    // (re)start from empty whenever the text changes
    Effect::new(move |_| {
        let text = text.get();
        clear_pending(pending);
        machine.update_value(|m| m.set_text(text));
        set_shown.set(String::new());
        schedule(machine, pending, set_shown);
    });

    on_cleanup(move || clear_pending(pending));

    view! {
        <span class=class>
            {shown}
            <span class="animate-pulse">"|"</span>
        </span>
    }
}
