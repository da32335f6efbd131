// ── Options record ──
//
// The canonical defaults live in one constant table. The typed `Options`
// struct mirrors that table so callers can read settings without dynamic
// lookups; its `Default` impl must stay in sync with `DEFAULT_OPTIONS`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Typed default for a single option key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionDefault {
    Bool(bool),
    Int(i64),
    Str(&'static str),
}

impl OptionDefault {
    pub fn to_value(self) -> Value {
        match self {
            Self::Bool(b) => Value::Bool(b),
            Self::Int(n) => Value::from(n),
            Self::Str(s) => Value::from(s),
        }
    }
}

/// Canonical option keys and their defaults.
pub const DEFAULT_OPTIONS: &[(&str, OptionDefault)] = &[
    // Delays
    ("defaultSystemDelay", OptionDefault::Int(0)),
    ("dimmerDelay", OptionDefault::Int(5000)),
    ("duplicateDetectionTimeFrame", OptionDefault::Int(500)),
    // General
    ("baseUrl", OptionDefault::Str("")),
    ("branding", OptionDefault::Str("")),
    ("email", OptionDefault::Str("")),
    ("keypadBeeps", OptionDefault::Str("uniden")),
    ("maxClients", OptionDefault::Int(200)),
    ("playbackGoesLive", OptionDefault::Bool(false)),
    ("pruneDays", OptionDefault::Int(7)),
    ("showListenersCount", OptionDefault::Bool(false)),
    ("sortTalkgroups", OptionDefault::Bool(false)),
    ("time12hFormat", OptionDefault::Bool(false)),
    // Registration
    ("userRegistrationEnabled", OptionDefault::Bool(false)),
    ("publicRegistrationEnabled", OptionDefault::Bool(false)),
    ("publicRegistrationMode", OptionDefault::Str("both")),
    // Billing
    ("stripePaywallEnabled", OptionDefault::Bool(false)),
    ("stripePublishableKey", OptionDefault::Str("")),
    ("stripeSecretKey", OptionDefault::Str("")),
    ("stripeGracePeriodDays", OptionDefault::Int(0)),
    // Email delivery
    ("emailServiceEnabled", OptionDefault::Bool(false)),
    ("emailProvider", OptionDefault::Str("sendgrid")),
    ("emailSmtpHost", OptionDefault::Str("")),
    ("emailSmtpPort", OptionDefault::Int(587)),
    // Integrations
    ("radioReferenceEnabled", OptionDefault::Bool(false)),
    ("radioReferenceUsername", OptionDefault::Str("")),
];

/// Option keys from earlier generations that never survive normalization.
pub const OBSOLETE_OPTIONS: &[&str] = &["afsSystems", "disableAudioConversion", "tagsToggle"];

/// The defaults table as a JSON object, in table order.
pub fn default_options_map() -> Map<String, Value> {
    DEFAULT_OPTIONS
        .iter()
        .map(|&(key, default)| (key.to_owned(), default.to_value()))
        .collect()
}

/// Typed view of the options record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    pub default_system_delay: u64,
    pub dimmer_delay: u64,
    pub duplicate_detection_time_frame: u64,

    pub base_url: String,
    pub branding: String,
    pub email: String,
    pub keypad_beeps: String,
    pub max_clients: u32,
    pub playback_goes_live: bool,
    pub prune_days: u32,
    pub show_listeners_count: bool,
    pub sort_talkgroups: bool,
    pub time12h_format: bool,

    pub user_registration_enabled: bool,
    pub public_registration_enabled: bool,
    pub public_registration_mode: String,

    pub stripe_paywall_enabled: bool,
    pub stripe_publishable_key: String,
    pub stripe_secret_key: String,
    pub stripe_grace_period_days: u32,

    pub email_service_enabled: bool,
    pub email_provider: String,
    pub email_smtp_host: String,
    pub email_smtp_port: u16,

    pub radio_reference_enabled: bool,
    pub radio_reference_username: String,

    /// Non-canonical keys carried through from the input.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_system_delay: 0,
            dimmer_delay: 5000,
            duplicate_detection_time_frame: 500,
            base_url: String::new(),
            branding: String::new(),
            email: String::new(),
            keypad_beeps: "uniden".into(),
            max_clients: 200,
            playback_goes_live: false,
            prune_days: 7,
            show_listeners_count: false,
            sort_talkgroups: false,
            time12h_format: false,
            user_registration_enabled: false,
            public_registration_enabled: false,
            public_registration_mode: "both".into(),
            stripe_paywall_enabled: false,
            stripe_publishable_key: String::new(),
            stripe_secret_key: String::new(),
            stripe_grace_period_days: 0,
            email_service_enabled: false,
            email_provider: "sendgrid".into(),
            email_smtp_host: String::new(),
            email_smtp_port: 587,
            radio_reference_enabled: false,
            radio_reference_username: String::new(),
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn typed_default_matches_table() {
        let typed = serde_json::to_value(Options::default()).unwrap();
        assert_eq!(typed, Value::Object(default_options_map()));
    }

    #[test]
    fn table_keys_are_unique_and_not_obsolete() {
        let map = default_options_map();
        assert_eq!(map.len(), DEFAULT_OPTIONS.len());
        for key in OBSOLETE_OPTIONS {
            assert!(!map.contains_key(*key), "{key} is both canonical and obsolete");
        }
    }

    #[test]
    fn extra_keys_round_trip() {
        let mut map = default_options_map();
        map.insert("customBanner".into(), Value::from("hello"));
        let options: Options = serde_json::from_value(Value::Object(map.clone())).unwrap();
        assert_eq!(options.extra.get("customBanner"), Some(&Value::from("hello")));
        assert_eq!(serde_json::to_value(&options).unwrap(), Value::Object(map));
    }
}
