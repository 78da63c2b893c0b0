//! Board styling — maps a [`CheckoutRow`] to colour-coded cells.
//!
//! The rules are exact, case-sensitive string comparisons:
//!
//! | Column       | Match                  | Background          |
//! |--------------|------------------------|---------------------|
//! | Type         | `"Phone"`              | white, else gray    |
//! | Manufacturer | `"Apple"`              | Apple blue, else light blue |
//! | Device name  | holder is `"0"`        | green, else red     |
//! | Location     | `"Omaha"`              | Omaha blue, else transparent |

use std::fmt;

use serde::Serialize;

use crate::checkout::CheckoutRow;

/// Background colour of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Background {
    /// Phones.
    White,
    /// Every other device type.
    LightGray,
    /// Apple devices.
    AppleBlue,
    /// Every other manufacturer.
    LightBlue,
    /// Device is in the lab.
    Available,
    /// Device is held by someone.
    CheckedOut,
    /// Devices homed in the Omaha office.
    OmahaBlue,
    /// Every other location.
    Transparent,
}

impl Background {
    /// CSS colour value for the `background-color` property.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::White => "#ffffff",
            Self::LightGray => "#f2f2f2",
            Self::AppleBlue | Self::OmahaBlue => "#007cb5",
            Self::LightBlue => "#4db9eb",
            Self::Available => "#a9c94d",
            Self::CheckedOut => "#ff523d",
            Self::Transparent => "transparent",
        }
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css())
    }
}

/// A text cell with its background colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledCell {
    pub text: String,
    pub background: Background,
}

/// One fully styled board line, in display column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledRow {
    pub device_type: StyledCell,
    pub manufacturer: StyledCell,
    pub device_name: StyledCell,
    pub model: String,
    pub os: String,
    pub location: StyledCell,
    pub full_name: String,
}

#[must_use]
pub fn type_background(device_type: &str) -> Background {
    if device_type == "Phone" {
        Background::White
    } else {
        Background::LightGray
    }
}

#[must_use]
pub fn manufacturer_background(manufacturer: &str) -> Background {
    if manufacturer == "Apple" {
        Background::AppleBlue
    } else {
        Background::LightBlue
    }
}

#[must_use]
pub fn location_background(location: &str) -> Background {
    if location == "Omaha" {
        Background::OmahaBlue
    } else {
        Background::Transparent
    }
}

/// Apply the board colour rules to one row.
#[must_use]
pub fn style_row(row: &CheckoutRow) -> StyledRow {
    let availability = if row.is_checked_out() {
        Background::CheckedOut
    } else {
        Background::Available
    };

    StyledRow {
        device_type: StyledCell {
            text: row.device_type.clone(),
            background: type_background(&row.device_type),
        },
        manufacturer: StyledCell {
            text: row.manufacturer.clone(),
            background: manufacturer_background(&row.manufacturer),
        },
        device_name: StyledCell {
            text: row.device_name.clone(),
            background: availability,
        },
        model: row.model.clone(),
        os: row.os.clone(),
        location: StyledCell {
            text: row.location.clone(),
            background: location_background(&row.location),
        },
        full_name: row.full_name.clone(),
    }
}
