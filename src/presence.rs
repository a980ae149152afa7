//! Steam presence: status mapping, "last seen" text and (server only) the fetch.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use dashmap::DashMap;
#[cfg(feature = "ssr")]
use std::{sync::LazyLock, time::Instant};

#[cfg(feature = "ssr")]
use crate::config::PresenceConfig;

pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

#[cfg(feature = "ssr")]
static PRESENCE_CACHE: LazyLock<DashMap<String, (Instant, Presence)>> =
    LazyLock::new(DashMap::new);

#[cfg(feature = "ssr")]
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresenceStatus {
    Online,
    #[default]
    Offline,
    Away,
    Busy,
    Snooze,
    LookingToTrade,
    LookingToPlay,
}

impl PresenceStatus {
    /// Maps Steam's `personastate`; unknown codes count as offline.
    pub fn from_persona_state(code: i64) -> Self {
        match code {
            1 => Self::Online,
            2 => Self::Busy,
            3 => Self::Away,
            4 => Self::Snooze,
            5 => Self::LookingToTrade,
            6 => Self::LookingToPlay,
            _ => Self::Offline,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
            Self::Away => "Away",
            Self::Busy => "Busy",
            Self::Snooze => "Snooze",
            Self::LookingToTrade => "Looking to Trade",
            Self::LookingToPlay => "Looking to Play",
        }
    }

    pub fn dot_class(self) -> &'static str {
        match self {
            Self::Online => "bg-green-500",
            Self::Offline => "bg-gray-500",
            Self::Away => "bg-yellow-500",
            Self::Busy => "bg-red-500",
            Self::Snooze => "bg-purple-500",
            Self::LookingToTrade => "bg-blue-500",
            Self::LookingToPlay => "bg-indigo-500",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            Self::Online => "text-green-400",
            Self::Offline => "text-gray-400",
            Self::Away => "text-yellow-400",
            Self::Busy => "text-red-400",
            Self::Snooze => "text-purple-400",
            Self::LookingToTrade => "text-blue-400",
            Self::LookingToPlay => "text-indigo-400",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presence {
    pub status: PresenceStatus,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub last_logoff: Option<DateTime<Utc>>,
}

#[derive(Error, Debug)]
pub enum PresenceError {
    #[error("{0} is not set")]
    MissingConfig(&'static str),
    #[cfg(feature = "ssr")]
    #[error("Steam API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Steam API responded with status {0}")]
    Status(u16),
    #[error("Steam API returned no player")]
    NoPlayer,
}

/// Body of `ISteamUser/GetPlayerSummaries/v0002`, trimmed to what we read.
#[derive(Debug, Deserialize)]
pub struct PlayerSummaries {
    response: PlayerList,
}

#[derive(Debug, Deserialize)]
struct PlayerList {
    #[serde(default)]
    players: Vec<Player>,
}

#[derive(Debug, Deserialize)]
struct Player {
    #[serde(default)]
    personastate: i64,
    #[serde(default)]
    lastlogoff: Option<i64>,
}

impl TryFrom<PlayerSummaries> for Presence {
    type Error = PresenceError;

    fn try_from(summaries: PlayerSummaries) -> Result<Self, Self::Error> {
        let player = summaries
            .response
            .players
            .into_iter()
            .next()
            .ok_or(PresenceError::NoPlayer)?;
        Ok(Self {
            status: PresenceStatus::from_persona_state(player.personastate),
            last_logoff: player
                .lastlogoff
                .filter(|ts| *ts > 0)
                .and_then(|ts| DateTime::from_timestamp(ts, 0)),
        })
    }
}

pub fn format_last_seen(last_logoff: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(last) = last_logoff else {
        return "unknown".to_string();
    };
    let diff = (now - last).num_seconds();
    match diff {
        ..60 => "just now".to_string(),
        60..3_600 => format!("{} minutes ago", diff / 60),
        3_600..86_400 => format!("{} hours ago", diff / 3_600),
        86_400..2_592_000 => format!("{} days ago", diff / 86_400),
        _ => last.format("%Y-%m-%d").to_string(),
    }
}

#[cfg(feature = "ssr")]
pub async fn fetch_presence(config: &PresenceConfig) -> Result<Presence, PresenceError> {
    let response = HTTP_CLIENT
        .get(config.summaries_url())
        .query(&[
            ("key", config.api_key.as_str()),
            ("steamids", config.steam_id.as_str()),
        ])
        .timeout(Duration::from_secs(10))
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(PresenceError::Status(status.as_u16()));
    }
    let summaries = response.json::<PlayerSummaries>().await?;
    Presence::try_from(summaries)
}

/// Current presence for the configured account, never failing.
///
/// Successful lookups are cached for one poll interval so every open tab
/// shares a single upstream request. Anything that goes wrong is logged and
/// reported as the default offline presence.
#[cfg(feature = "ssr")]
pub async fn current_presence() -> Presence {
    let config = match PresenceConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::debug!(%err, "presence lookup disabled");
            return Presence::default();
        }
    };

    let cache = &*PRESENCE_CACHE;
    let cached = cache
        .get(&config.steam_id)
        .filter(|entry| entry.0.elapsed() < POLL_INTERVAL)
        .map(|entry| entry.1.clone());
    if let Some(presence) = cached {
        return presence;
    }

    match fetch_presence(&config).await {
        Ok(presence) => {
            tracing::debug!(status = ?presence.status, "refreshed Steam presence");
            cache.insert(config.steam_id, (Instant::now(), presence.clone()));
            presence
        }
        Err(err) => {
            tracing::warn!(%err, "falling back to offline presence");
            Presence::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 20, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_persona_state_mapping() {
        let mapped = (0..=7)
            .map(PresenceStatus::from_persona_state)
            .collect::<Vec<_>>();
        assert_eq!(
            mapped,
            vec![
                PresenceStatus::Offline,
                PresenceStatus::Online,
                PresenceStatus::Busy,
                PresenceStatus::Away,
                PresenceStatus::Snooze,
                PresenceStatus::LookingToTrade,
                PresenceStatus::LookingToPlay,
                PresenceStatus::Offline,
            ]
        );
        assert_eq!(PresenceStatus::from_persona_state(-1), PresenceStatus::Offline);
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&PresenceStatus::LookingToTrade).unwrap();
        assert_eq!(json, "\"looking-to-trade\"");
        assert_eq!(PresenceStatus::default(), PresenceStatus::Offline);
        assert_eq!(PresenceStatus::LookingToPlay.label(), "Looking to Play");
    }

    #[test]
    fn test_parses_player_summaries() {
        let body = r#"{"response":{"players":[{"steamid":"76561198000000000","personastate":3,"lastlogoff":1755647924,"personaname":"design"}]}}"#;
        let summaries = serde_json::from_str::<PlayerSummaries>(body).unwrap();
        let presence = Presence::try_from(summaries).unwrap();
        assert_eq!(presence.status, PresenceStatus::Away);
        assert_eq!(
            presence.last_logoff,
            DateTime::from_timestamp(1_755_647_924, 0)
        );
    }

    #[test]
    fn test_empty_player_list_is_an_error() {
        let summaries = serde_json::from_str::<PlayerSummaries>(r#"{"response":{"players":[]}}"#)
            .unwrap();
        assert!(matches!(
            Presence::try_from(summaries),
            Err(PresenceError::NoPlayer)
        ));
        let summaries = serde_json::from_str::<PlayerSummaries>(r#"{"response":{}}"#).unwrap();
        assert!(Presence::try_from(summaries).is_err());
    }

    #[test]
    fn test_zero_logoff_is_unknown() {
        let body = r#"{"response":{"players":[{"personastate":0,"lastlogoff":0}]}}"#;
        let presence =
            Presence::try_from(serde_json::from_str::<PlayerSummaries>(body).unwrap()).unwrap();
        assert_eq!(presence, Presence::default());
        assert_eq!(format_last_seen(presence.last_logoff, now()), "unknown");
    }

    #[test]
    fn test_presence_round_trips_as_unix_seconds() {
        let presence = Presence {
            status: PresenceStatus::Online,
            last_logoff: DateTime::from_timestamp(1_700_000_000, 0),
        };
        let json = serde_json::to_value(&presence).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "online", "last_logoff": 1_700_000_000})
        );
    }

    #[test]
    fn test_last_seen_thresholds() {
        let ago = |secs: i64| format_last_seen(Some(now() - chrono::Duration::seconds(secs)), now());
        assert_eq!(ago(0), "just now");
        assert_eq!(ago(59), "just now");
        assert_eq!(ago(60), "1 minutes ago");
        assert_eq!(ago(3_599), "59 minutes ago");
        assert_eq!(ago(3_600), "1 hours ago");
        assert_eq!(ago(86_399), "23 hours ago");
        assert_eq!(ago(86_400), "1 days ago");
        assert_eq!(ago(2_591_999), "29 days ago");
        assert_eq!(ago(2_592_000), "2025-07-21");
        // clock skew
        assert_eq!(ago(-30), "just now");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_shared_client_initialises_once() {
        let first: *const reqwest::Client = &*HTTP_CLIENT;
        assert!(std::ptr::eq(first, &*HTTP_CLIENT));
    }
}
