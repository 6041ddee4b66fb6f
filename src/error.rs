// SPDX-License-Identifier: MPL-2.0
use crate::domain::ItemId;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Lightbox(LightboxError),
    Config(String),
}

/// Precondition failures reported by the lightbox controller.
///
/// All of these are local and recoverable: the operation leaves state
/// unchanged and the embedding UI may surface the failure (for example by
/// disabling the action that triggered it).
#[derive(Debug, Clone)]
pub enum LightboxError {
    /// `open` was called while the visible set is empty.
    NoVisibleItems,

    /// `open` was called with an item that is not currently visible.
    ItemNotVisible(ItemId),

    /// Navigation or zoom was requested without an open session.
    SessionClosed,
}

impl LightboxError {
    /// Returns a stable message key for this failure.
    ///
    /// The crate carries no localization runtime; embedders map these keys to
    /// user-facing text.
    pub fn message_key(&self) -> &'static str {
        match self {
            LightboxError::NoVisibleItems => "error-lightbox-no-visible-items",
            LightboxError::ItemNotVisible(_) => "error-lightbox-item-not-visible",
            LightboxError::SessionClosed => "error-lightbox-session-closed",
        }
    }
}

impl fmt::Display for LightboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightboxError::NoVisibleItems => {
                write!(f, "No visible items to open the lightbox on")
            }
            LightboxError::ItemNotVisible(id) => {
                write!(f, "Item {} is not currently visible", id)
            }
            LightboxError::SessionClosed => write!(f, "No open lightbox session"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lightbox(e) => write!(f, "Lightbox Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<LightboxError> for Error {
    fn from(err: LightboxError) -> Self {
        Error::Lightbox(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_config_error() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn display_formats_lightbox_error() {
        let err = Error::Lightbox(LightboxError::NoVisibleItems);
        assert_eq!(
            format!("{}", err),
            "Lightbox Error: No visible items to open the lightbox on"
        );
    }

    #[test]
    fn from_io_error_produces_config_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Config(message) => assert!(message.contains("boom")),
            _ => panic!("expected Config variant"),
        }
    }

    #[test]
    fn from_lightbox_error_wraps_variant() {
        let err: Error = LightboxError::SessionClosed.into();
        assert!(matches!(err, Error::Lightbox(LightboxError::SessionClosed)));
    }

    #[test]
    fn lightbox_error_message_keys_are_stable() {
        assert_eq!(
            LightboxError::NoVisibleItems.message_key(),
            "error-lightbox-no-visible-items"
        );
        assert_eq!(
            LightboxError::ItemNotVisible(ItemId::new(7)).message_key(),
            "error-lightbox-item-not-visible"
        );
        assert_eq!(
            LightboxError::SessionClosed.message_key(),
            "error-lightbox-session-closed"
        );
    }

    #[test]
    fn item_not_visible_display_includes_id() {
        let err = LightboxError::ItemNotVisible(ItemId::new(42));
        assert!(format!("{}", err).contains("42"));
    }
}
