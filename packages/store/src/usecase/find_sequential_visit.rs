//! UseCase: 2 空港を連続して訪れる予約の検索
//!
//! 旅程の隣接する全てのペアを走査します。
//! 同じペアを複数回含む旅程でも、予約は 1 回だけ返されます。

use std::sync::Arc;

use crate::domain::{AirportCode, BookingRecord, BookingRepository};

use super::error::BookingError;

/// 連続訪問検索のユースケース
pub struct FindSequentialVisitUseCase {
    repository: Arc<dyn BookingRepository>,
}

impl FindSequentialVisitUseCase {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    /// `from` の直後に `to` を訪れる予約を保存順に返す
    pub fn execute(
        &self,
        from: &AirportCode,
        to: &AirportCode,
    ) -> Result<Vec<BookingRecord>, BookingError> {
        let records = self.repository.load_all()?;
        Ok(records
            .into_iter()
            .filter(|record| record.visits_sequentially(from, to))
            .collect())
    }
}
