//! CSV Booking Repository 実装
//!
//! ドメイン層が定義する BookingRepository trait の具体的な実装。
//! ヘッダー付きの CSV ファイル（`name,departure,itinerary`）を唯一の保存先として使用します。
//!
//! - 読み込みは毎回ファイル全体を読み直します（キャッシュなし）
//! - 書き込みは 1 行の追記のみです（更新・削除なし）
//! - ロックは行いません。外部プロセスとの同時書き込みは保証対象外です

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{
    config::ParsePolicy,
    domain::{BOOKING_HEADERS, BookingRecord, BookingRepository, RepositoryError},
    infrastructure::dto::BookingRow,
};

use super::{csv_error, io_error, parse_error};

/// CSV ファイルを保存先とする Booking Repository 実装
pub struct CsvBookingRepository {
    /// 予約テーブルの CSV ファイル
    path: PathBuf,
    /// 不正な行の扱い
    parse_policy: ParsePolicy,
}

impl CsvBookingRepository {
    /// 新しい CsvBookingRepository を作成
    pub fn new(path: impl Into<PathBuf>, parse_policy: ParsePolicy) -> Self {
        Self {
            path: path.into(),
            parse_policy,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 追記前のファイル状態を確認
    ///
    /// 存在しない・空・空白文字のみのファイルは新規扱い（ヘッダー行から書き直す）
    fn inspect_before_append(&self) -> io::Result<AppendMode> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(AppendMode::Fresh),
            Err(e) => return Err(e),
        };
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(AppendMode::Fresh);
        }
        Ok(AppendMode::Existing {
            needs_newline: content.last() != Some(&b'\n'),
        })
    }
}

/// 追記先ファイルの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppendMode {
    /// ヘッダー行から書き込む
    Fresh,
    /// 既存の表に 1 行追加する
    Existing { needs_newline: bool },
}

impl BookingRepository for CsvBookingRepository {
    fn append(&self, record: &BookingRecord) -> Result<(), RepositoryError> {
        let mode = self
            .inspect_before_append()
            .map_err(|e| io_error(&self.path, e))?;

        // create(true) でもディレクトリは作成しない（存在しなければ Io エラー）
        let mut options = OpenOptions::new();
        options.create(true);
        match mode {
            AppendMode::Fresh => options.write(true).truncate(true),
            AppendMode::Existing { .. } => options.append(true),
        };
        let mut file = options
            .open(&self.path)
            .map_err(|e| io_error(&self.path, e))?;
        if mode == (AppendMode::Existing { needs_newline: true }) {
            file.write_all(b"\n").map_err(|e| io_error(&self.path, e))?;
        }

        let mut writer = ::csv::WriterBuilder::new()
            .has_headers(mode == AppendMode::Fresh)
            .from_writer(file);
        writer
            .serialize(BookingRow::from(record))
            .map_err(|e| csv_error(&self.path, 0, e))?;
        writer.flush().map_err(|e| io_error(&self.path, e))?;

        tracing::debug!(
            "Appended booking for '{}' to {}",
            record.passenger_name(),
            self.path.display()
        );
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<BookingRecord>, RepositoryError> {
        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(::csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| csv_error(&self.path, 0, e))?;

        // 空ファイルは予約 0 件の表として扱う
        let headers = reader
            .headers()
            .map_err(|e| csv_error(&self.path, 0, e))?;
        if headers.is_empty() {
            return Ok(Vec::new());
        }
        if !headers.iter().eq(BOOKING_HEADERS) {
            return Err(parse_error(
                &self.path,
                0,
                format!(
                    "expected header '{}', found '{}'",
                    BOOKING_HEADERS.join(","),
                    headers.iter().collect::<Vec<_>>().join(",")
                ),
            ));
        }

        let mut records = Vec::new();
        for (index, result) in reader.deserialize::<BookingRow>().enumerate() {
            let row = index as u64 + 1;
            let parsed = match result {
                Ok(booking_row) => {
                    BookingRecord::try_from(booking_row).map_err(|e| parse_error(&self.path, row, e))
                }
                Err(e) => Err(csv_error(&self.path, row, e)),
            };

            match parsed {
                Ok(record) => records.push(record),
                Err(err @ RepositoryError::Parse { .. })
                    if self.parse_policy == ParsePolicy::Lenient =>
                {
                    tracing::warn!("Skipping malformed booking: {}", err);
                }
                Err(err) => return Err(err),
            }
        }

        tracing::debug!(
            "Loaded {} bookings from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}
