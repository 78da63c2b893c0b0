//! `SQLite` implementation of [`CheckoutRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use devicenanny_app::ports::CheckoutRepository;
use devicenanny_domain::checkout::{CheckedOutBy, CheckoutRow, full_name};
use devicenanny_domain::error::NannyError;

use crate::error::StorageError;

/// Wrapper for converting joined database rows into domain [`CheckoutRow`].
struct Wrapper(CheckoutRow);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let device_name: String = row.try_get("DeviceName")?;
        let manufacturer: Option<String> = row.try_get("Manufacturer")?;
        let model: Option<String> = row.try_get("Model")?;
        let device_type: Option<String> = row.try_get("Type")?;
        let os: Option<String> = row.try_get("OS")?;
        let location: Option<String> = row.try_get("Location")?;
        let checked_out_by: String = row.try_get("CheckedOutBy")?;
        let user_id: Option<String> = row.try_get("UserID")?;
        let first_name: Option<String> = row.try_get("FirstName")?;
        let last_name: Option<String> = row.try_get("LastName")?;

        let full_name = full_name(
            user_id.as_deref(),
            first_name.as_deref(),
            last_name.as_deref(),
        );

        Ok(Self(CheckoutRow {
            device_name,
            manufacturer: manufacturer.unwrap_or_default(),
            model: model.unwrap_or_default(),
            device_type: device_type.unwrap_or_default(),
            os: os.unwrap_or_default(),
            location: location.unwrap_or_default(),
            checked_out_by: CheckedOutBy::new(checked_out_by),
            user_id,
            full_name,
        }))
    }
}

/// Ids are read as text whatever the column affinity of the store. Holders
/// sort numerically, so `"0"` (available) leads and `"5"` comes before `"12"`.
const SELECT_CHECKOUTS: &str = "\
SELECT Devices.DeviceName AS DeviceName, Devices.Manufacturer AS Manufacturer, \
       Devices.Model AS Model, Devices.Type AS Type, Devices.OS AS OS, \
       CAST(Devices.CheckedOutBy AS TEXT) AS CheckedOutBy, \
       CAST(Users.UserID AS TEXT) AS UserID, \
       Devices.Location AS Location, Users.FirstName AS FirstName, Users.LastName AS LastName \
FROM Devices \
LEFT JOIN Users ON Devices.CheckedOutBy = Users.UserID \
ORDER BY CAST(Devices.CheckedOutBy AS INTEGER), Devices.CheckedOutBy, \
         Devices.Type, Devices.OS DESC, Devices.Manufacturer, Devices.Model";

/// `SQLite`-backed checkout repository.
pub struct SqliteCheckoutRepository {
    pool: SqlitePool,
}

impl SqliteCheckoutRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CheckoutRepository for SqliteCheckoutRepository {
    fn list_checkouts(&self) -> impl Future<Output = Result<Vec<CheckoutRow>, NannyError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_CHECKOUTS)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
