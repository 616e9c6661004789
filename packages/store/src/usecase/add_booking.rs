//! UseCase: 予約追加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - AddBookingUseCase::prepare() / execute() メソッド
//! - 入力値の検証（空の名前・空港コード、出発時刻のフォーマット）と追記
//!
//! ### どのような状況を想定しているか
//! - 正常系：小文字の空港コードが大文字で保存される
//! - 異常系：空入力は Validation、日付フォーマット不一致は Parse、書き込み失敗は Io
//! - 検証に失敗した予約は Repository に渡らない

use std::sync::Arc;

use crate::domain::{
    AirportCode, BookingRecord, BookingRepository, Departure, Itinerary, PassengerName,
};

use super::error::BookingError;

/// 予約追加のユースケース
pub struct AddBookingUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn BookingRepository>,
}

impl AddBookingUseCase {
    /// 新しい AddBookingUseCase を作成
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    /// 入力値から予約を組み立てる（保存はしない）
    ///
    /// CLI は確認プロンプトの前にこれを呼び、内容を表示します。
    ///
    /// # Arguments
    ///
    /// * `name` - 乗客名
    /// * `departure` - 出発時刻（`MMM-DD HH:MM YYYY`）
    /// * `origin` / `destination` - 空港コード（大文字・小文字は問わない）
    pub fn prepare(
        name: &str,
        departure: &str,
        origin: &str,
        destination: &str,
    ) -> Result<BookingRecord, BookingError> {
        let passenger_name = PassengerName::new(name.to_string())?;
        let departure = Departure::new(departure.to_string())?;
        let origin = AirportCode::new(origin.to_string())?;
        let destination = AirportCode::new(destination.to_string())?;
        Ok(BookingRecord::new(
            passenger_name,
            departure,
            Itinerary::route(origin, destination),
        ))
    }

    /// 予約追加を実行
    ///
    /// # Returns
    ///
    /// * `Ok(BookingRecord)` - 保存した予約
    /// * `Err(BookingError)` - 保存失敗
    pub fn execute(&self, record: BookingRecord) -> Result<BookingRecord, BookingError> {
        self.repository.append(&record)?;
        Ok(record)
    }
}
