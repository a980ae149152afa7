use leptos::{ev::MouseEvent, html, prelude::*, task::spawn_local};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;

use super::{
    cards::{SpotlightCard, TiltedCard},
    slider::ElasticSlider,
};
use crate::media::{
    format_time, skip, volume_percent, PlaybackRequest, DEFAULT_DURATION, DEFAULT_VOLUME,
    SKIP_SECONDS,
};

const VIDEO_SRC: &str = "/background-video.mp4";
const TRACK_ARTIST: &str = "Petrica, Florin si Ionut Cercel";
const TRACK_TITLE: &str = "Noi dam inainte, voi dati inapoi";

/// Asks the video to play. `playing` follows the settled promise, so a
/// refused autoplay leaves the card paused.
fn play(video: HtmlVideoElement, set_playing: WriteSignal<bool>) {
    spawn_local(async move {
        let started = match video.play() {
            Ok(promise) => JsFuture::from(promise).await.map(drop),
            Err(err) => Err(err),
        };
        if let Err(err) = &started {
            log::warn!("playback refused: {err:?}");
        }
        _ = set_playing.try_set(started.is_ok());
    });
}

/// Blurred looping video behind the page. Its audio is what the media card controls.
#[component]
pub fn BackgroundVideo(video_ref: NodeRef<html::Video>, player: PlayerState) -> impl IntoView {
    let PlayerState {
        set_current_time,
        set_duration,
        set_playing,
        volume,
        ..
    } = player;

    Effect::new(move |_| {
        let volume = volume.get();
        if let Some(video) = video_ref.get() {
            video.set_volume(volume);
        }
    });

    Effect::watch(
        || (),
        move |_, _, _| {
            if let Some(video) = video_ref.get_untracked() {
                play(video, set_playing);
            }
        },
        true,
    );

    view! {
        <div class="absolute inset-0 pointer-events-none">
            <div class="w-full h-full bg-gradient-to-br from-purple-900/30 to-pink-900/30"></div>
            <video
                node_ref=video_ref
                class="absolute inset-0 w-full h-full object-cover filter blur-sm pointer-events-none transform scale-110"
                autoplay=true
                loop=true
                playsinline=true
                on:timeupdate=move |_| {
                    if let Some(video) = video_ref.get_untracked() {
                        set_current_time.set(video.current_time().floor());
                    }
                }
                on:ended=move |_| set_playing.set(false)
                on:loadedmetadata=move |_| {
                    if let Some(video) = video_ref.get_untracked() {
                        let duration = video.duration();
                        if duration.is_finite() {
                            set_duration.set(duration.floor());
                        }
                    }
                }
            >
                <source src=VIDEO_SRC type="video/mp4" />
            </video>
        </div>
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PlayerState {
    pub playing: ReadSignal<bool>,
    pub set_playing: WriteSignal<bool>,
    pub current_time: ReadSignal<f64>,
    pub set_current_time: WriteSignal<f64>,
    pub duration: ReadSignal<f64>,
    pub set_duration: WriteSignal<f64>,
    pub volume: ReadSignal<f64>,
    pub set_volume: WriteSignal<f64>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState {
    pub fn new() -> Self {
        let (playing, set_playing) = signal(true);
        let (current_time, set_current_time) = signal(0.0);
        let (duration, set_duration) = signal(DEFAULT_DURATION);
        let (volume, set_volume) = signal(DEFAULT_VOLUME);
        Self {
            playing,
            set_playing,
            current_time,
            set_current_time,
            duration,
            set_duration,
            volume,
            set_volume,
        }
    }
}

#[component]
pub fn PlayerCard(video_ref: NodeRef<html::Video>, player: PlayerState) -> impl IntoView {
    let PlayerState {
        playing,
        set_playing,
        current_time,
        set_current_time,
        duration,
        volume,
        set_volume,
        ..
    } = player;

    let toggle_play = move |_: MouseEvent| {
        let Some(video) = video_ref.get_untracked() else {
            return;
        };
        match PlaybackRequest::toggle(playing.get_untracked()) {
            PlaybackRequest::Pause => {
                _ = video.pause();
                set_playing.set(false);
            }
            PlaybackRequest::Play => play(video, set_playing),
        }
    };

    let skip_by = move |delta: f64| {
        if let Some(video) = video_ref.get_untracked() {
            video.set_current_time(skip(video.current_time(), delta, video.duration()));
        }
    };

    let seek = move |time: f64| {
        set_current_time.set(time);
        if let Some(video) = video_ref.get_untracked() {
            video.set_current_time(time);
        }
    };

    view! {
        <TiltedCard>
            <SpotlightCard>
                <div class="bg-gradient-to-br from-black/60 to-gray-900/60 backdrop-blur-xl rounded-3xl p-8 border border-white/20 shadow-2xl">
                    <div class="flex items-center space-x-6 mb-6">
                        <div class="relative">
                            <div class="w-20 h-20 bg-gradient-to-br from-purple-500 to-pink-500 rounded-2xl flex items-center justify-center shadow-lg">
                                <svg class="w-10 h-10 text-white" fill="currentColor" viewBox="0 0 20 20">
                                    <path d="M18 3a1 1 0 00-1.196-.98l-10 2A1 1 0 006 5v9.114A4.369 4.369 0 005 14c-1.657 0-3 .895-3 2s1.343 2 3 2 3-.895 3-2V7.82l8-1.6v5.894A4.369 4.369 0 0015 12c-1.657 0-3 .895-3 2s1.343 2 3 2 3-.895 3-2V3z" />
                                </svg>
                            </div>
                            <div class="absolute -top-1 -right-1 w-6 h-6 bg-green-500 rounded-full flex items-center justify-center">
                                <div class="w-2 h-2 bg-white rounded-full animate-pulse"></div>
                            </div>
                        </div>
                        <div class="flex-1">
                            <h3 class="text-white text-lg font-bold mb-1">{TRACK_ARTIST}</h3>
                            <p class="text-gray-300 text-sm">{TRACK_TITLE}</p>
                            <div class="flex items-center space-x-2 mt-2">
                                <div class="w-2 h-2 bg-purple-400 rounded-full animate-pulse"></div>
                                <span class="text-purple-300 text-xs font-medium">"Now Playing"</span>
                            </div>
                        </div>
                    </div>

                    <div class="mb-6">
                        <div class="flex justify-between text-sm text-gray-400 mb-2">
                            <span>{move || format_time(current_time.get())}</span>
                            <span>{move || format_time(duration.get())}</span>
                        </div>
                        <ElasticSlider
                            min=0.0
                            max=duration
                            value=current_time
                            on_change=seek
                            class="w-full h-2"
                        />
                    </div>

                    <div class="flex items-center justify-between">
                        <div class="flex items-center space-x-4">
                            <button
                                class="p-2 text-gray-400 hover:text-white transition-colors hover:bg-white/10 rounded-full"
                                aria-label="Back 10 seconds"
                                on:click=move |_| skip_by(-SKIP_SECONDS)
                            >
                                <svg class="w-5 h-5" fill="currentColor" viewBox="0 0 20 20">
                                    <path d="M8.445 14.832A1 1 0 0010 14v-2.798l5.445 3.63A1 1 0 0017 14V6a1 1 0 00-1.555-.832L10 8.798V6a1 1 0 00-1.555-.832l-6 4a1 1 0 000 1.664l6 4z" />
                                </svg>
                            </button>
                            <button
                                class="p-3 bg-gradient-to-r from-purple-500 to-pink-500 text-white rounded-full hover:from-purple-600 hover:to-pink-600 transition-all duration-300 transform hover:scale-110 shadow-lg"
                                aria-label=move || if playing.get() { "Pause" } else { "Play" }
                                on:click=toggle_play
                            >
                                <Show
                                    when=move || playing.get()
                                    fallback=|| {
                                        view! {
                                            <svg class="w-6 h-6" fill="currentColor" viewBox="0 0 20 20">
                                                <path
                                                    fill-rule="evenodd"
                                                    d="M10 18a8 8 0 100-16 8 8 0 000 16zM9.555 7.168A1 1 0 008 8v4a1 1 0 001.555.832l3-2a1 1 0 000-1.664l-3-2z"
                                                    clip-rule="evenodd"
                                                />
                                            </svg>
                                        }
                                    }
                                >
                                    <svg class="w-6 h-6" fill="currentColor" viewBox="0 0 20 20">
                                        <path
                                            fill-rule="evenodd"
                                            d="M18 10a8 8 0 11-16 0 8 8 0 0116 0zM7 8a1 1 0 012 0v4a1 1 0 11-2 0V8zm5-1a1 1 0 00-1 1v4a1 1 0 102 0V8a1 1 0 00-1-1z"
                                            clip-rule="evenodd"
                                        />
                                    </svg>
                                </Show>
                            </button>
                            <button
                                class="p-2 text-gray-400 hover:text-white transition-colors hover:bg-white/10 rounded-full"
                                aria-label="Forward 10 seconds"
                                on:click=move |_| skip_by(SKIP_SECONDS)
                            >
                                <svg class="w-5 h-5" fill="currentColor" viewBox="0 0 20 20">
                                    <path d="M4.555 5.168A1 1 0 003 6v8a1 1 0 001.555.832L10 11.202V14a1 1 0 001.555.832l6-4a1 1 0 000-1.664l-6-4A1 1 0 0010 6v2.798l-5.445-3.63z" />
                                </svg>
                            </button>
                        </div>

                        <div class="flex items-center space-x-3">
                            <svg class="w-5 h-5 text-gray-400" fill="currentColor" viewBox="0 0 20 20">
                                <path
                                    fill-rule="evenodd"
                                    d="M9.383 3.076A1 1 0 0110 4v12a1 1 0 01-1.617.793L4.617 13H2a1 1 0 01-1-1V8a1 1 0 011-1h2.617l3.766-3.793a1 1 0 011.09-.217z"
                                    clip-rule="evenodd"
                                />
                            </svg>
                            <div class="w-20">
                                <ElasticSlider
                                    min=0.0
                                    max=1.0
                                    value=volume
                                    on_change=move |v| set_volume.set(v)
                                    class="w-full h-1"
                                />
                            </div>
                            <span class="text-gray-400 text-xs w-8">
                                {move || format!("{}%", volume_percent(volume.get()))}
                            </span>
                        </div>
                    </div>
                </div>
            </SpotlightCard>
        </TiltedCard>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_starts_playing_at_defaults() {
        let player = PlayerState::default();
        assert!(player.playing.get_untracked());
        assert_eq!(player.current_time.get_untracked(), 0.0);
        assert_eq!(player.duration.get_untracked(), DEFAULT_DURATION);
        assert_eq!(player.volume.get_untracked(), DEFAULT_VOLUME);
    }
}
