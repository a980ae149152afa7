use leptos::{ev::MouseEvent, prelude::*, server_fn::codec::GetUrl, task::spawn_local};
use leptos_use::use_interval_fn;

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::{use_local_storage, use_session_storage};

use super::{
    cards::{SpotlightCard, TiltedCard},
    count_up::CountUp,
    typewriter::TypewriterText,
};
use crate::{
    config::{
        discord_profile_url, DISCORD_HANDLE, GITHUB_HANDLE, GITHUB_URL, LOCATION,
        STEAM_HANDLE, STEAM_PROFILE_URL,
    },
    presence::{format_last_seen, Presence, PresenceStatus, POLL_INTERVAL},
};
#[cfg(feature = "hydrate")]
use crate::visits::{record_visit, SESSION_KEY, VIEW_COUNT_KEY};

const TAGLINE: &str = "./leet.py";

#[server(input = GetUrl)]
pub async fn get_presence() -> Result<Presence, ServerFnError> {
    Ok(crate::presence::current_presence().await)
}

fn open_in_new_tab(url: &str) {
    if let Err(err) = window().open_with_url_and_target_and_features(
        url,
        "_blank",
        "noopener,noreferrer",
    ) {
        log::warn!("could not open {url}: {err:?}");
    }
}

#[component]
fn SocialLink(
    handle: &'static str,
    on_open: impl Fn() + 'static,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3">
            <div class="w-8 h-8 bg-gray-600 rounded-full flex items-center justify-center">
                {children()}
            </div>
            <div class="flex items-center space-x-2">
                <button
                    class="text-white text-sm hover:text-blue-400 transition-colors cursor-pointer"
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        on_open();
                    }
                >
                    {handle}
                </button>
                <svg class="w-4 h-4 text-blue-400" fill="currentColor" viewBox="0 0 20 20">
                    <path
                        fill-rule="evenodd"
                        d="M6.267 3.455a3.066 3.066 0 001.745-.723 3.066 3.066 0 013.976 0 3.066 3.066 0 001.745.723 3.066 3.066 0 012.812 2.812c.051.643.304 1.254.723 1.745a3.066 3.066 0 010 3.976 3.066 3.066 0 00-.723 1.745 3.066 3.066 0 01-2.812 2.812 3.066 3.066 0 00-1.745.723 3.066 3.066 0 01-3.976 0 3.066 3.066 0 00-1.745-.723 3.066 3.066 0 01-2.812-2.812 3.066 3.066 0 00-.723-1.745 3.066 3.066 0 010-3.976 3.066 3.066 0 00.723-1.745 3.066 3.066 0 012.812-2.812zm7.44 5.252a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z"
                        clip-rule="evenodd"
                    />
                </svg>
            </div>
        </div>
    }
}

#[component]
fn PresenceBadge(presence: ReadSignal<Presence>) -> impl IntoView {
    move || {
        let Presence {
            status,
            last_logoff,
        } = presence.get();
        if status == PresenceStatus::Offline {
            let seen = format_last_seen(last_logoff, chrono::Utc::now());
            view! { <p class="text-gray-400 text-xs">"last seen " {seen}</p> }.into_any()
        } else {
            let pulse = if status == PresenceStatus::Online { "animate-pulse" } else { "" };
            view! {
                <div class="flex items-center space-x-1">
                    <div class=format!("w-2 h-2 {} rounded-full {pulse}", status.dot_class())></div>
                    <span class=format!("{} text-xs", status.text_class())>{status.label()}</span>
                </div>
            }
            .into_any()
        }
    }
}

/// Polls the presence server function on mount and every [`POLL_INTERVAL`].
fn use_presence() -> ReadSignal<Presence> {
    let (presence, set_presence) = signal(Presence::default());
    let refresh = move || {
        spawn_local(async move {
            let latest = match get_presence().await {
                Ok(presence) => presence,
                Err(err) => {
                    log::warn!("presence lookup failed: {err}");
                    Presence::default()
                }
            };
            _ = set_presence.try_set(latest);
        });
    };
    Effect::watch(|| (), move |_, _, _| refresh(), true);
    use_interval_fn(refresh, POLL_INTERVAL.as_millis() as u64);
    presence
}

/// Session-aware view count read from browser storage.
fn use_view_count() -> ReadSignal<u64> {
    let (views, set_views) = signal(0u64);

    #[cfg(feature = "hydrate")]
    {
        let (count, set_count, _) = use_local_storage::<u64, FromToStringCodec>(VIEW_COUNT_KEY);
        let (seen, set_seen, _) = use_session_storage::<bool, FromToStringCodec>(SESSION_KEY);
        Effect::watch(
            || (),
            move |_, _, _| {
                let visit = record_visit(count.get_untracked(), seen.get_untracked());
                if visit.first_in_session {
                    set_count.set(visit.count);
                    set_seen.set(true);
                }
                set_views.set(visit.count);
            },
            true,
        );
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_views;

    views
}

#[component]
pub fn ProfileCard() -> impl IntoView {
    let presence = use_presence();
    let views = use_view_count();

    let open_discord = || match discord_profile_url() {
        Some(url) => open_in_new_tab(&url),
        None => log::warn!("Discord ID not configured"),
    };

    view! {
        <TiltedCard>
            <SpotlightCard>
                <div class="bg-gray-900/80 backdrop-blur-md rounded-2xl p-6 border border-gray-700/50 space-y-4">
                    <div class="flex items-center space-x-4">
                        <div class="w-12 h-12 bg-gray-600 rounded-full flex items-center justify-center">
                            <svg class="w-8 h-8 text-white" fill="currentColor" viewBox="0 0 20 20">
                                <path
                                    fill-rule="evenodd"
                                    d="M10 9a3 3 0 100-6 3 3 0 000 6zm-7 9a7 7 0 1114 0H3z"
                                    clip-rule="evenodd"
                                />
                            </svg>
                        </div>
                        <div>
                            <h1 class="text-2xl font-bold text-white shiny-text">"Design"</h1>
                            <p class="text-gray-400 text-sm">
                                <TypewriterText
                                    text=TAGLINE.to_string()
                                    type_speed=150
                                    delete_speed=75
                                    pause_time=2500
                                    class="text-gray-400"
                                />
                            </p>
                        </div>
                    </div>

                    <SocialLink handle=GITHUB_HANDLE on_open=|| open_in_new_tab(GITHUB_URL)>
                        <i class="devicon-github-plain text-white"></i>
                    </SocialLink>
                    <SocialLink handle=DISCORD_HANDLE on_open=open_discord>
                        <i class="devicon-discordjs-plain text-white"></i>
                    </SocialLink>
                    <div class="flex items-center justify-between">
                        <SocialLink handle=STEAM_HANDLE on_open=|| open_in_new_tab(STEAM_PROFILE_URL)>
                            <i class="devicon-steam-plain text-white"></i>
                        </SocialLink>
                        <PresenceBadge presence />
                    </div>

                    <div class="flex justify-between items-center text-sm pt-4 pb-2 text-gray-400">
                        <div class="flex items-center space-x-2" title="Views">
                            <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M15 12a3 3 0 11-6 0 3 3 0 016 0z"
                                />
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M2.458 12C3.732 7.943 7.523 5 12 5c4.478 0 8.268 2.943 9.542 7-1.274 4.057-5.064 7-9.542 7-4.477 0-8.268-2.943-9.542-7z"
                                />
                            </svg>
                            <CountUp end=views />
                        </div>
                        <div class="flex items-center space-x-2">
                            <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z"
                                />
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M15 11a3 3 0 11-6 0 3 3 0 016 0z"
                                />
                            </svg>
                            <span>{LOCATION}</span>
                        </div>
                    </div>
                </div>
            </SpotlightCard>
        </TiltedCard>
    }
}
