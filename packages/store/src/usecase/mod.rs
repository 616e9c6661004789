//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! BookingStore（および CLI）から呼び出され、Domain 層を操作します。

pub mod add_booking;
pub mod error;
pub mod find_departing;
pub mod find_sequential_visit;
pub mod list_bookings;
pub mod show_flight_info;

pub use add_booking::AddBookingUseCase;
pub use error::BookingError;
pub use find_departing::FindDepartingAtOrAfterUseCase;
pub use find_sequential_visit::FindSequentialVisitUseCase;
pub use list_bookings::ListBookingsUseCase;
pub use show_flight_info::ShowFlightInfoUseCase;
