/// User preferences: display name, onboarding state, color scheme
///
/// These are small scalar values persisted under their own gateway keys,
/// separate from the habit collections. Like the store, preferences treat
/// persistence as best-effort: reads fall back to defaults and write
/// failures are logged and swallowed.

use tracing::warn;

use crate::storage::{keys, StorageGateway};

/// Explicit user choice of app color scheme
///
/// When no choice has been stored the app follows the system scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    /// Parse a stored value; anything unrecognized means "no choice"
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ColorScheme::Light),
            "dark" => Some(ColorScheme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

/// Loaded preference state with write-through persistence
pub struct Preferences<G> {
    gateway: G,
    user_name: Option<String>,
    onboarding_complete: bool,
    color_scheme: Option<ColorScheme>,
}

impl<G: StorageGateway> Preferences<G> {
    /// Hydrate preferences from the gateway; failures yield defaults
    pub async fn load(gateway: G) -> Self {
        let user_name = Self::read(&gateway, keys::USER_NAME).await;
        let onboarding_complete =
            Self::read(&gateway, keys::ONBOARDING_COMPLETE).await.as_deref() == Some("true");
        let color_scheme = Self::read(&gateway, keys::COLOR_SCHEME)
            .await
            .as_deref()
            .and_then(ColorScheme::parse);

        Self {
            gateway,
            user_name,
            onboarding_complete,
            color_scheme,
        }
    }

    async fn read(gateway: &G, key: &str) -> Option<String> {
        match gateway.get(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read preference '{}': {}", key, e);
                None
            }
        }
    }

    async fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.gateway.set(key, value).await {
            warn!("Failed to persist preference '{}': {}", key, e);
        }
    }

    async fn clear(&self, key: &str) {
        if let Err(e) = self.gateway.remove(key).await {
            warn!("Failed to remove preference '{}': {}", key, e);
        }
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// Onboarding counts as finished only with both the flag and a name,
    /// matching the gate the original app applied at launch.
    pub fn is_onboarded(&self) -> bool {
        self.onboarding_complete && self.user_name.is_some()
    }

    /// Record the onboarding flow as finished for the named user
    pub async fn complete_onboarding(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }

        self.user_name = Some(name.to_string());
        self.onboarding_complete = true;
        self.write(keys::USER_NAME, name).await;
        self.write(keys::ONBOARDING_COMPLETE, "true").await;
    }

    /// Forget the onboarding state (the app's dev-reset path)
    pub async fn reset_onboarding(&mut self) {
        self.user_name = None;
        self.onboarding_complete = false;
        self.clear(keys::ONBOARDING_COMPLETE).await;
        self.clear(keys::USER_NAME).await;
    }

    /// The explicit scheme choice, or None when following the system
    pub fn color_scheme(&self) -> Option<ColorScheme> {
        self.color_scheme
    }

    pub async fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.color_scheme = Some(scheme);
        self.write(keys::COLOR_SCHEME, scheme.as_str()).await;
    }

    /// Flip dark/light; with no stored choice the toggle lands on dark,
    /// as if leaving the light default
    pub async fn toggle_color_scheme(&mut self) -> ColorScheme {
        let next = self.color_scheme.unwrap_or(ColorScheme::Light).toggled();
        self.set_color_scheme(next).await;
        next
    }

    /// Revert to following the system scheme
    pub async fn follow_system_scheme(&mut self) {
        self.color_scheme = None;
        self.clear(keys::COLOR_SCHEME).await;
    }
}
