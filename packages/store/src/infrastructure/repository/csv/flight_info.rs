//! CSV FlightInfo Repository 実装
//!
//! フライト・空港の参照テーブルを読み込むだけの実装。
//! 列構成は固定せず、ヘッダー行の列名をそのまま使用します。

use std::path::{Path, PathBuf};

use crate::domain::{FlightInfoRepository, FlightTable, RepositoryError};

use super::csv_error;

/// CSV ファイルを読み込む FlightInfo Repository 実装
pub struct CsvFlightInfoRepository {
    path: PathBuf,
}

impl CsvFlightInfoRepository {
    /// 新しい CsvFlightInfoRepository を作成
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FlightInfoRepository for CsvFlightInfoRepository {
    fn load(&self) -> Result<FlightTable, RepositoryError> {
        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(::csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| csv_error(&self.path, 0, e))?;

        let headers = reader
            .headers()
            .map_err(|e| csv_error(&self.path, 0, e))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| csv_error(&self.path, index as u64 + 1, e))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        tracing::debug!(
            "Loaded {} flight info rows from {}",
            rows.len(),
            self.path.display()
        );
        Ok(FlightTable::new(headers, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_reads_headers_and_rows() {
        // テスト項目: ヘッダー行の列名と各行をファイル順に読み込める
        // given (前提条件):
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("flight_infos.csv");
        fs::write(
            &path,
            "flight,origin,destination\nKL1001,AMS,LHR\nKL1234,LHR,CDG\n",
        )
        .unwrap();
        let repo = CsvFlightInfoRepository::new(&path);

        // when (操作):
        let table = repo.load().unwrap();

        // then (期待する結果):
        assert_eq!(table.headers, vec!["flight", "origin", "destination"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1], vec!["KL1234", "LHR", "CDG"]);
    }

    #[test]
    fn test_load_missing_file_fails() {
        // テスト項目: ファイルが存在しない場合は Io エラー
        // given (前提条件):
        let tmp = TempDir::new().unwrap();
        let repo = CsvFlightInfoRepository::new(tmp.path().join("nope.csv"));

        // then (期待する結果):
        assert!(matches!(repo.load(), Err(RepositoryError::Io { .. })));
    }

    #[test]
    fn test_load_unequal_row_length_fails() {
        // テスト項目: 列数が揃っていない行は Parse エラー
        // given (前提条件):
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("flight_infos.csv");
        fs::write(&path, "flight,origin\nKL1001,AMS,LHR\n").unwrap();
        let repo = CsvFlightInfoRepository::new(&path);

        // then (期待する結果):
        assert!(matches!(
            repo.load(),
            Err(RepositoryError::Parse { row: 1, .. })
        ));
    }
}
