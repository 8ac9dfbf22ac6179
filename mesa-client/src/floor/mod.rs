//! Front-of-house flows
//!
//! The stateful pieces the floor staff drive: the table board, the
//! reservation assignment flow, order sessions on a table, the
//! upcoming-reservation poller and the customer cart. Each one holds a
//! `FloorBackend` handle and reconciles its local view against
//! whatever the last successful response said.

mod assign;
mod board;
mod cart;
mod session;
mod watch;

pub use assign::AssignmentFlow;
pub use board::{FloorBoard, FloorView};
pub use cart::Cart;
pub use session::{
    clean_table, BusySession, FreeTableSession, InactiveOrderAssignment, OrderDraft,
    ReservedTableView, StockOutcome,
};
pub use watch::{ReservationSnapshot, ReservationWatcher, UpcomingAlert, WatcherConfig};
