pub mod columns;
pub mod record;
pub mod writer;

pub use columns::{Column, ColumnClass, Layout};
pub use record::{Cell, DealRecord};
pub use writer::TableWriter;
