//! Domain models
//!
//! Wire-faithful representations of the floor backend's entities. The
//! backend predates this client and is inconsistent about "no value"
//! spellings (`""`, `0`, `null`, absent field) and about numbers encoded
//! as strings; those quirks are absorbed here, at the serde boundary,
//! so flow code only ever sees typed fields.

mod category;
mod order;
mod product;
mod reservation;
mod table;
pub(crate) mod wire;

pub use category::Category;
pub use order::{Order, OrderItem, OrderStatus};
pub use product::Product;
pub use reservation::Reservation;
pub use table::{Table, TableStatus, TableStatusUpdate};
