use leptos::{html, prelude::*};
use leptos_meta::Title;

use super::{
    player::{BackgroundVideo, PlayerCard, PlayerState},
    profile::ProfileCard,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let (entered, set_entered) = signal(false);

    view! {
        <Title text="Home" />
        <Show
            when=move || entered.get()
            fallback=move || view! { <EnterPage on_enter=move || set_entered.set(true) /> }
        >
            <MainPage />
        </Show>
    }
}

/// Splash screen. Entering is a user gesture, which lets the background
/// video start with sound.
#[component]
fn EnterPage(on_enter: impl Fn() + 'static) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-black flex items-center justify-center relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-purple-900/20 to-pink-900/20"></div>
            <div class="relative z-10 text-center">
                <button
                    class="text-white text-2xl font-light hover:text-gray-300 transition-colors cursor-pointer"
                    on:click=move |_| on_enter()
                >
                    "click to enter..."
                </button>
            </div>
        </div>
    }
}

#[component]
fn MainPage() -> impl IntoView {
    let video_ref = NodeRef::<html::Video>::new();
    let player = PlayerState::new();

    view! {
        <div class="min-h-screen bg-black relative overflow-hidden">
            <BackgroundVideo video_ref player />
            <div class="relative z-10 min-h-screen flex items-center justify-center p-8">
                <div class="w-full max-w-md space-y-6">
                    <ProfileCard />
                    <PlayerCard video_ref player />
                </div>
            </div>
        </div>
    }
}
