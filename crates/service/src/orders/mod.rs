pub mod repository;
pub mod service;

pub use repository::{OrderRepository, SeaOrmOrderRepository};
pub use service::{NewOrder, OrderService};
