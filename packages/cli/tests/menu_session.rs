//! Interactive menu integration tests.
//!
//! Sessions are driven by a scripted prompt against CSV files in a
//! temporary directory; console output is captured in memory.

use std::{fs, path::PathBuf};

use flightbook_cli::{
    app::App,
    args::{Command, ExportConfig},
    menu::run_menu,
    prompt::ScriptedPrompt,
    run_command,
};
use flightbook_store::{BookingStore, StoreConfig};
use tempfile::TempDir;

const HEADER: &str = "name,departure,itinerary\n";

struct Session {
    _dir: TempDir,
    bookings_path: PathBuf,
    output_dir: PathBuf,
    store: BookingStore,
}

impl Session {
    fn new(bookings: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let bookings_path = dir.path().join("bookings.csv");
        let flight_info_path = dir.path().join("flight_infos.csv");
        let output_dir = dir.path().join("output");
        fs::write(&bookings_path, bookings).unwrap();
        fs::write(
            &flight_info_path,
            "flight,origin,destination\nKL1001,AMS,LHR\nKL1002,LHR,CDG\n",
        )
        .unwrap();
        fs::create_dir(&output_dir).unwrap();

        let store = BookingStore::open(&StoreConfig::new(&bookings_path, &flight_info_path));
        Self {
            _dir: dir,
            bookings_path,
            output_dir,
            store,
        }
    }

    fn app(&self, lines: &[&str]) -> App<ScriptedPrompt, Vec<u8>> {
        App::new(
            self.store.clone(),
            ExportConfig::new(&self.output_dir),
            ScriptedPrompt::new(lines.iter().copied()),
            Vec::new(),
        )
    }

    fn run(&self, lines: &[&str]) -> String {
        let mut app = self.app(lines);
        run_menu(&mut app).expect("Menu session failed");
        let (_, out) = app.into_parts();
        String::from_utf8(out).unwrap()
    }

    fn bookings(&self) -> String {
        fs::read_to_string(&self.bookings_path).unwrap()
    }
}

#[test]
fn test_add_confirmed_then_list() {
    // テスト項目: 確認後に予約が追加され、一覧表示と HTML 出力に反映される
    // given (前提条件):
    let session = Session::new(HEADER);

    // when (操作):
    let out = session.run(&["2", "alice", "may-26 6:45 2020", "ams", "lhr", "y", "1", "5"]);

    // then (期待する結果):
    assert!(out.contains("Itinerary: AMS->LHR"));
    assert!(out.contains("Booking added"));
    assert!(out.contains("│ alice │ may-26 6:45 2020 │ AMS->LHR  │"));
    assert!(out.ends_with("Goodbye\n"));
    assert_eq!(
        session.bookings(),
        format!("{HEADER}alice,may-26 6:45 2020,AMS->LHR\n")
    );
    let html = fs::read_to_string(session.output_dir.join("bookings.html")).unwrap();
    assert!(html.contains("<td>AMS-&gt;LHR</td>"));
}

#[test]
fn test_declined_confirmation_stores_nothing() {
    // テスト項目: 確認で n を選ぶと何も保存されずメニューに戻る
    // given (前提条件):
    let session = Session::new(HEADER);

    // when (操作):
    let out = session.run(&["2", "bob", "may-26 6:45 2020", "AMS", "LHR", "n", "5"]);

    // then (期待する結果):
    assert!(out.contains("Cancelled booking"));
    assert!(!out.contains("Error"));
    assert_eq!(session.bookings(), HEADER);
}

#[test]
fn test_invalid_entry_then_end_of_input() {
    // テスト項目: 不正なメニュー入力は再入力を促し、入力終了でセッションを終える
    // given (前提条件):
    let session = Session::new(HEADER);

    // when (操作):
    let out = session.run(&["9"]);

    // then (期待する結果):
    assert!(out.contains("Invalid entry! Please try again"));
    assert!(out.ends_with("Goodbye\n"));
}

#[test]
fn test_error_is_reported_and_loop_continues() {
    // テスト項目: 操作のエラーは表示され、メニューは継続する
    // given (前提条件):
    let session = Session::new(HEADER);

    // when (操作):
    let out = session.run(&[
        "3",
        "next tuesday",
        "2",
        "",
        "may-26 6:45 2020",
        "AMS",
        "LHR",
        "5",
    ]);

    // then (期待する結果):
    assert!(out.contains("Error: Parse error"));
    assert!(out.contains("Error: Validation error: Passenger name cannot be empty"));
    assert!(out.ends_with("Goodbye\n"));
}

#[test]
fn test_departing_at_or_after_inclusive() {
    // テスト項目: 指定時刻ちょうどの予約も表示される
    // given (前提条件):
    let session = Session::new(&format!(
        "{HEADER}alice,may-26 6:45 2020,AMS->LHR\nbob,may-25 6:45 2020,LHR->CDG\n"
    ));

    // when (操作):
    let out = session.run(&["3", "may-26 6:45 2020", "5"]);

    // then (期待する結果):
    assert!(out.contains("│ alice │"));
    assert!(!out.contains("│ bob"));
}

#[test]
fn test_sequential_visits_shows_flights_first() {
    // テスト項目: 連続訪問検索ではフライト情報を表示してから結果を表示する
    // given (前提条件):
    let session = Session::new(&format!(
        "{HEADER}alice,may-26 6:45 2020,AMS->LHR\nbob,jun-01 9:00 2020,LHR->CDG\n"
    ));

    // when (操作):
    let out = session.run(&["4", "lhr", "cdg", "5"]);

    // then (期待する結果):
    let flights_at = out.find("KL1002").unwrap();
    let result_at = out.find("Bookings visiting 2 airports LHR->CDG").unwrap();
    assert!(flights_at < result_at);
    assert!(out[result_at..].contains("│ bob "));
    assert!(!out[result_at..].contains("│ alice "));
    assert!(session.output_dir.join("flight_details.html").exists());
}

#[test]
fn test_empty_result_renders_header_only() {
    // テスト項目: 該当なしの場合はヘッダーのみの表が表示される
    // given (前提条件):
    let session = Session::new(&format!("{HEADER}alice,may-26 6:45 2020,AMS->LHR\n"));
    let mut app = session.app(&[]);

    // when (操作):
    run_command(
        &mut app,
        Command::After {
            time: "jan-01 0:00 2099".to_string(),
        },
    )
    .unwrap();

    // then (期待する結果):
    let (_, out) = app.into_parts();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("│ name │ departure │ itinerary │"));
    assert!(!out.contains("alice"));
}

#[test]
fn test_one_shot_add_with_yes_skips_prompt() {
    // テスト項目: --yes 付きの add は確認なしで保存される
    // given (前提条件):
    let session = Session::new("");
    let mut app = session.app(&[]);

    // when (操作):
    run_command(
        &mut app,
        Command::Add {
            name: "carol".to_string(),
            departure: "jul-04 21:30 2021".to_string(),
            from: "cdg".to_string(),
            to: "ams".to_string(),
            yes: true,
        },
    )
    .unwrap();

    // then (期待する結果):
    assert!(app.prompt().shown.is_empty());
    assert_eq!(
        session.bookings(),
        format!("{HEADER}carol,jul-04 21:30 2021,CDG->AMS\n")
    );
}

#[test]
fn test_missing_output_directory_is_reported() {
    // テスト項目: 出力先ディレクトリがない場合、表は表示されエクスポートのエラーが報告される
    // given (前提条件):
    let session = Session::new(&format!("{HEADER}alice,may-26 6:45 2020,AMS->LHR\n"));
    fs::remove_dir(&session.output_dir).unwrap();

    // when (操作):
    let out = session.run(&["1", "5"]);

    // then (期待する結果):
    assert!(out.contains("│ alice │"));
    assert!(out.contains("Error: I/O error: failed to export"));
}

#[test]
fn test_sequential_visits_continues_when_flight_export_fails() {
    // テスト項目: フライト情報の出力に失敗しても空港コードの入力と検索は続行される
    // given (前提条件):
    let session = Session::new(&format!(
        "{HEADER}alice,may-26 6:45 2020,AMS->LHR\nbob,jun-01 9:00 2020,LHR->CDG\n"
    ));
    fs::remove_dir(&session.output_dir).unwrap();

    // when (操作):
    let out = session.run(&["4", "lhr", "cdg", "5"]);

    // then (期待する結果):
    assert!(out.contains("Error: I/O error: failed to export"));
    let result_at = out.find("Bookings visiting 2 airports LHR->CDG").unwrap();
    assert!(out[result_at..].contains("│ bob "));
    assert!(!out.contains("Invalid entry! Please try again"));
    assert!(out.ends_with("Goodbye\n"));
}
