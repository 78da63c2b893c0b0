//! Checkout — a lab device joined with the user currently holding it.

use serde::{Deserialize, Serialize};

/// Full name shown when a device is not held by any known user.
pub const UNASSIGNED_FULL_NAME: &str = "- -";

/// Value of `CheckedOutBy` for a device that sits in the lab.
pub const AVAILABLE_SENTINEL: &str = "0";

/// Raw `CheckedOutBy` column: a user id, or `"0"` when the device is available.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckedOutBy(String);

impl CheckedOutBy {
    /// Marker for a device that is not checked out.
    #[must_use]
    pub fn available() -> Self {
        Self(AVAILABLE_SENTINEL.to_string())
    }

    /// Wrap a raw column value.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// `true` when the device is in the lab.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.0 == AVAILABLE_SENTINEL
    }
}

impl Default for CheckedOutBy {
    fn default() -> Self {
        Self::available()
    }
}

/// Display name for the holder of a device.
///
/// Without a joined user the placeholder [`UNASSIGNED_FULL_NAME`] is returned.
/// A joined user with a missing first or last name keeps the `"-"` on that
/// side.
#[must_use]
pub fn full_name(
    user_id: Option<&str>,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> String {
    if user_id.is_none() {
        return UNASSIGNED_FULL_NAME.to_string();
    }
    format!("{} {}", first_name.unwrap_or("-"), last_name.unwrap_or("-"))
}

/// One line of the checkout board, as returned by the join query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRow {
    pub device_name: String,
    pub manufacturer: String,
    pub model: String,
    pub device_type: String,
    pub os: String,
    pub location: String,
    pub checked_out_by: CheckedOutBy,
    /// Id of the joined user, `None` when no user matched.
    pub user_id: Option<String>,
    pub full_name: String,
}

impl CheckoutRow {
    /// Create a builder for constructing a [`CheckoutRow`].
    #[must_use]
    pub fn builder() -> CheckoutRowBuilder {
        CheckoutRowBuilder::default()
    }

    /// `true` when the device is held by someone.
    #[must_use]
    pub fn is_checked_out(&self) -> bool {
        !self.checked_out_by.is_available()
    }
}

/// Step-by-step builder for [`CheckoutRow`].
///
/// Unset text fields default to the empty string, the holder defaults to the
/// available sentinel and the full name to [`UNASSIGNED_FULL_NAME`].
#[derive(Debug, Default)]
pub struct CheckoutRowBuilder {
    device_name: String,
    manufacturer: String,
    model: String,
    device_type: String,
    os: String,
    location: String,
    checked_out_by: CheckedOutBy,
    user_id: Option<String>,
    full_name: Option<String>,
}

impl CheckoutRowBuilder {
    #[must_use]
    pub fn device_name(mut self, value: impl Into<String>) -> Self {
        self.device_name = value.into();
        self
    }

    #[must_use]
    pub fn manufacturer(mut self, value: impl Into<String>) -> Self {
        self.manufacturer = value.into();
        self
    }

    #[must_use]
    pub fn model(mut self, value: impl Into<String>) -> Self {
        self.model = value.into();
        self
    }

    #[must_use]
    pub fn device_type(mut self, value: impl Into<String>) -> Self {
        self.device_type = value.into();
        self
    }

    #[must_use]
    pub fn os(mut self, value: impl Into<String>) -> Self {
        self.os = value.into();
        self
    }

    #[must_use]
    pub fn location(mut self, value: impl Into<String>) -> Self {
        self.location = value.into();
        self
    }

    #[must_use]
    pub fn checked_out_by(mut self, value: impl Into<String>) -> Self {
        self.checked_out_by = CheckedOutBy::new(value);
        self
    }

    #[must_use]
    pub fn user_id(mut self, value: impl Into<String>) -> Self {
        self.user_id = Some(value.into());
        self
    }

    #[must_use]
    pub fn full_name(mut self, value: impl Into<String>) -> Self {
        self.full_name = Some(value.into());
        self
    }

    /// Consume the builder and return a [`CheckoutRow`].
    #[must_use]
    pub fn build(self) -> CheckoutRow {
        CheckoutRow {
            device_name: self.device_name,
            manufacturer: self.manufacturer,
            model: self.model,
            device_type: self.device_type,
            os: self.os,
            location: self.location,
            checked_out_by: self.checked_out_by,
            user_id: self.user_id,
            full_name: self
                .full_name
                .unwrap_or_else(|| UNASSIGNED_FULL_NAME.to_string()),
        }
    }
}
