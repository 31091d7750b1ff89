//! Data transfer objects for the API boundary.

mod order_view;

pub use order_view::{
    AdminOrderRequest, LineRequest, LineView, OrderView, OwnerDetail, SubmitOrderRequest,
};
