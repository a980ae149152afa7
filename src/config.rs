use crate::presence::PresenceError;

pub const GITHUB_HANDLE: &str = "razvanc6";
pub const GITHUB_URL: &str = "https://github.com/razvanc6";
pub const STEAM_HANDLE: &str = "designv4";
pub const STEAM_PROFILE_URL: &str = "https://steamcommunity.com/id/designv4";
pub const DISCORD_HANDLE: &str = "_design";
pub const LOCATION: &str = "Romania";

/// Baked in at compile time so the hydrated bundle can build the profile link.
pub const DISCORD_USER_ID: Option<&str> = option_env!("DISCORD_USER_ID");

pub const DEFAULT_STEAM_API_BASE: &str = "https://api.steampowered.com";

pub fn discord_profile_url() -> Option<String> {
    DISCORD_USER_ID
        .filter(|id| !id.is_empty())
        .map(|id| format!("https://discord.com/users/{id}"))
}

/// Server-side credentials for the Steam Web API.
#[derive(Clone)]
pub struct PresenceConfig {
    pub api_key: String,
    pub steam_id: String,
    pub api_base: String,
}

// keep the key out of logs
impl std::fmt::Debug for PresenceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresenceConfig")
            .field("steam_id", &self.steam_id)
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl PresenceConfig {
    pub fn from_env() -> Result<Self, PresenceError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PresenceError> {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(PresenceError::MissingConfig(key))
        };
        Ok(Self {
            api_key: required("STEAM_API_KEY")?,
            steam_id: required("STEAM_USER_ID")?,
            api_base: lookup("STEAM_API_BASE")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_STEAM_API_BASE.to_string()),
        })
    }

    pub fn summaries_url(&self) -> String {
        format!(
            "{}/ISteamUser/GetPlayerSummaries/v0002/",
            self.api_base.trim_end_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_reads_required_vars() {
        let config = PresenceConfig::from_lookup(lookup(&[
            ("STEAM_API_KEY", "secret"),
            ("STEAM_USER_ID", "76561198000000000"),
        ]))
        .expect("config should load");
        assert_eq!(config.steam_id, "76561198000000000");
        assert_eq!(
            config.summaries_url(),
            "https://api.steampowered.com/ISteamUser/GetPlayerSummaries/v0002/"
        );
        assert!(!format!("{config:?}").contains("secret"));
    }

    #[test]
    fn test_missing_or_blank_vars() {
        let err = PresenceConfig::from_lookup(lookup(&[("STEAM_USER_ID", "1")])).unwrap_err();
        assert!(matches!(err, PresenceError::MissingConfig("STEAM_API_KEY")));

        let err = PresenceConfig::from_lookup(lookup(&[
            ("STEAM_API_KEY", "k"),
            ("STEAM_USER_ID", "  "),
        ]))
        .unwrap_err();
        assert!(matches!(err, PresenceError::MissingConfig("STEAM_USER_ID")));
    }

    #[test]
    fn test_custom_api_base() {
        let config = PresenceConfig::from_lookup(lookup(&[
            ("STEAM_API_KEY", "k"),
            ("STEAM_USER_ID", "1"),
            ("STEAM_API_BASE", "http://localhost:8080/"),
        ]))
        .expect("config should load");
        assert_eq!(
            config.summaries_url(),
            "http://localhost:8080/ISteamUser/GetPlayerSummaries/v0002/"
        );
    }
}
