//! UseCase: 指定時刻以降に出発する予約の検索
//!
//! 比較は `>=`（指定時刻ちょうどの出発も含む）。
//! 結果は保存順のままで、出発時刻順には並べ替えません。

use std::sync::Arc;

use crate::domain::{BookingRecord, BookingRepository, Departure};

use super::error::BookingError;

/// 出発時刻による検索のユースケース
pub struct FindDepartingAtOrAfterUseCase {
    repository: Arc<dyn BookingRepository>,
}

impl FindDepartingAtOrAfterUseCase {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    /// `threshold` 以降に出発する予約を返す
    ///
    /// 該当なしの場合は空の Vec（エラーではない）
    pub fn execute(&self, threshold: &Departure) -> Result<Vec<BookingRecord>, BookingError> {
        let records = self.repository.load_all()?;
        Ok(records
            .into_iter()
            .filter(|record| record.departs_at_or_after(threshold))
            .collect())
    }
}
