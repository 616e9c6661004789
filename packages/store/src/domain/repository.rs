//! Repository traits
//!
//! ドメイン層が必要とするデータアクセスの抽象。
//! 具体的な実装は infrastructure 層が提供します（依存性の逆転）。

use super::{
    entity::{BookingRecord, FlightTable},
    error::RepositoryError,
};

/// Append-only storage of booking records.
#[cfg_attr(test, mockall::automock)]
pub trait BookingRepository {
    /// Persist one record after the existing ones.
    fn append(&self, record: &BookingRecord) -> Result<(), RepositoryError>;

    /// Read every stored record in storage order.
    fn load_all(&self) -> Result<Vec<BookingRecord>, RepositoryError>;
}

/// Read-only access to the flight/airport reference table.
#[cfg_attr(test, mockall::automock)]
pub trait FlightInfoRepository {
    fn load(&self) -> Result<FlightTable, RepositoryError>;
}
