//! Database Models

pub mod serde_helpers;

pub mod dining_table;
pub mod food;
pub mod invoice;
pub mod menu;
pub mod order;
pub mod order_item;

pub use dining_table::{DiningTable, DiningTableCreate, DiningTableUpdate};
pub use food::{Food, FoodCreate, FoodUpdate};
pub use invoice::{Invoice, InvoiceCreate, InvoiceUpdate, PaymentMethod, PaymentStatus};
pub use menu::{Menu, MenuCreate, MenuUpdate};
pub use order::{Order, OrderCreate, OrderUpdate};
pub use order_item::{OrderItem, OrderItemCreate, OrderItemUpdate, OrderPack};
