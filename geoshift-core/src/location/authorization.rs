//! Location authorization flow, modelled as data.
//!
//! The platform reports an [`AuthorizationStatus`]; [`authorization_action`]
//! says what the app should do next. When access is denied the app shows a
//! [`SettingsPrompt`] and reports the user's [`PromptOutcome`] back. No UI
//! is presented from here.
//!
//! ```text
//! NotDetermined ──▶ RequestAuthorization
//! Restricted  ┐
//! Denied      ┴──▶ PromptForSettings ──▶ ProceedToSettings | Dismissed
//! Authorized* ──▶ StartUpdates
//! ```

use serde::{Deserialize, Serialize};

/// Authorization state reported by the platform location service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AuthorizationStatus {
    /// The user has not been asked yet.
    #[default]
    NotDetermined,
    /// Access is blocked by device policy (parental controls, MDM).
    Restricted,
    /// The user refused access.
    Denied,
    /// Access granted while the app is in use.
    AuthorizedWhenInUse,
    /// Access granted at all times.
    AuthorizedAlways,
}

impl AuthorizationStatus {
    /// Returns true if location updates may be delivered.
    #[must_use]
    pub const fn is_authorized(self) -> bool {
        matches!(self, Self::AuthorizedWhenInUse | Self::AuthorizedAlways)
    }

    /// Returns true if the user must change system settings to grant access.
    #[must_use]
    pub const fn is_denied(self) -> bool {
        matches!(self, Self::Restricted | Self::Denied)
    }
}

/// What the app should do in response to an authorization status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationAction {
    /// Ask the user for when-in-use authorization.
    RequestAuthorization,
    /// Show the settings prompt.
    PromptForSettings,
    /// Start location updates.
    StartUpdates,
}

/// Maps a platform authorization status to the next action.
///
/// # Examples
///
/// ```
/// use geoshift_core::location::{authorization_action, AuthorizationAction, AuthorizationStatus};
///
/// assert_eq!(
///     authorization_action(AuthorizationStatus::Denied),
///     AuthorizationAction::PromptForSettings,
/// );
/// ```
#[must_use]
pub const fn authorization_action(status: AuthorizationStatus) -> AuthorizationAction {
    match status {
        AuthorizationStatus::NotDetermined => AuthorizationAction::RequestAuthorization,
        AuthorizationStatus::Restricted | AuthorizationStatus::Denied => {
            AuthorizationAction::PromptForSettings
        }
        AuthorizationStatus::AuthorizedWhenInUse | AuthorizationStatus::AuthorizedAlways => {
            AuthorizationAction::StartUpdates
        }
    }
}

/// The user's answer to the settings prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The user confirmed; open the system settings.
    ProceedToSettings,
    /// The user dismissed the prompt.
    Dismissed,
}

impl PromptOutcome {
    /// Returns true if the app should open the system settings.
    #[must_use]
    pub const fn opens_settings(self) -> bool {
        matches!(self, Self::ProceedToSettings)
    }
}

/// Text of the prompt asking the user to enable location services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsPrompt {
    /// Prompt title.
    pub title: String,
    /// Prompt body with instructions.
    pub message: String,
    /// Label of the confirm button.
    pub confirm_label: String,
    /// Label of the cancel button; `None` shows a single-button prompt.
    pub cancel_label: Option<String>,
}

impl Default for SettingsPrompt {
    fn default() -> Self {
        Self::for_app("this app")
    }
}

impl SettingsPrompt {
    /// Builds the default prompt naming `app_name` in the instructions.
    ///
    /// # Examples
    ///
    /// ```
    /// use geoshift_core::location::SettingsPrompt;
    ///
    /// let prompt = SettingsPrompt::for_app("Atlas");
    /// assert!(prompt.message.contains("\"Atlas\""));
    /// ```
    #[must_use]
    pub fn for_app(app_name: &str) -> Self {
        Self {
            title: "Location services are off. Turn them on?".to_string(),
            message: format!(
                "Open Settings > Privacy > Location Services, turn the switch on, \
                 and allow \"{app_name}\" to use your location."
            ),
            confirm_label: "OK".to_string(),
            cancel_label: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_determined_requests_authorization() {
        assert_eq!(
            authorization_action(AuthorizationStatus::NotDetermined),
            AuthorizationAction::RequestAuthorization
        );
    }

    #[test]
    fn restricted_and_denied_prompt_for_settings() {
        for status in [AuthorizationStatus::Restricted, AuthorizationStatus::Denied] {
            assert_eq!(
                authorization_action(status),
                AuthorizationAction::PromptForSettings
            );
            assert!(status.is_denied());
            assert!(!status.is_authorized());
        }
    }

    #[test]
    fn authorized_starts_updates() {
        for status in [
            AuthorizationStatus::AuthorizedWhenInUse,
            AuthorizationStatus::AuthorizedAlways,
        ] {
            assert_eq!(authorization_action(status), AuthorizationAction::StartUpdates);
            assert!(status.is_authorized());
        }
    }

    #[test]
    fn status_default_is_not_determined() {
        assert_eq!(
            AuthorizationStatus::default(),
            AuthorizationStatus::NotDetermined
        );
    }

    #[test]
    fn prompt_outcome_opens_settings_only_on_proceed() {
        assert!(PromptOutcome::ProceedToSettings.opens_settings());
        assert!(!PromptOutcome::Dismissed.opens_settings());
    }

    #[test]
    fn default_prompt_has_single_button() {
        let prompt = SettingsPrompt::default();
        assert_eq!(prompt.confirm_label, "OK");
        assert!(prompt.cancel_label.is_none());
        assert!(prompt.message.contains("Location Services"));
    }
}
