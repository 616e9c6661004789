//! UseCase: フライト・空港情報の表示用データ取得

use std::sync::Arc;

use crate::domain::{FlightInfoRepository, FlightTable};

use super::error::BookingError;

/// 参照テーブル取得のユースケース（絞り込みや結合は行わない）
pub struct ShowFlightInfoUseCase {
    repository: Arc<dyn FlightInfoRepository>,
}

impl ShowFlightInfoUseCase {
    pub fn new(repository: Arc<dyn FlightInfoRepository>) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> Result<FlightTable, BookingError> {
        Ok(self.repository.load()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RepositoryError, repository::MockFlightInfoRepository};

    #[test]
    fn test_show_flight_info_passes_table_through() {
        // テスト項目: 参照テーブルがそのまま返される
        // given (前提条件):
        let table = FlightTable::new(
            vec!["code".to_string(), "airport".to_string()],
            vec![vec!["AMS".to_string(), "Schiphol".to_string()]],
        );
        let expected = table.clone();
        let mut repository = MockFlightInfoRepository::new();
        repository
            .expect_load()
            .times(1)
            .returning(move || Ok(table.clone()));
        let usecase = ShowFlightInfoUseCase::new(Arc::new(repository));

        // then (期待する結果):
        assert_eq!(usecase.execute(), Ok(expected));
    }

    #[test]
    fn test_show_flight_info_missing_file() {
        // テスト項目: 参照テーブルが読めない場合は Io エラー
        // given (前提条件):
        let mut repository = MockFlightInfoRepository::new();
        repository.expect_load().returning(|| {
            Err(RepositoryError::Io {
                path: "flight_infos.csv".to_string(),
                message: "No such file or directory".to_string(),
            })
        });
        let usecase = ShowFlightInfoUseCase::new(Arc::new(repository));

        // then (期待する結果):
        assert!(matches!(usecase.execute(), Err(BookingError::Io(_))));
    }
}
