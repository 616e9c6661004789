//! UseCase: 予約一覧取得

use std::sync::Arc;

use crate::domain::{BookingRecord, BookingRepository};

use super::error::BookingError;

/// 予約一覧取得のユースケース
pub struct ListBookingsUseCase {
    repository: Arc<dyn BookingRepository>,
}

impl ListBookingsUseCase {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    /// 保存されている全ての予約を保存順に返す
    pub fn execute(&self) -> Result<Vec<BookingRecord>, BookingError> {
        Ok(self.repository.load_all()?)
    }
}
