pub mod booking;
pub mod cart;
pub mod order;
pub mod product;

pub use booking::{BookingRequest, BookingResponse};
pub use cart::{CartItem, CartSnapshot};
pub use order::{CreateOrderRequest, CreateOrderResponse, OrderItemRequest};
pub use product::{Product, ProductFilter};
