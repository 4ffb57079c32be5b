//! Order Item API module
//!
//! Besides plain CRUD, `/order/{order_id}` exposes the aggregated order
//! summary (joined line items, table number, payment due).

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/order-items", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create_pack))
        .route("/order/{order_id}", get(handler::summary_by_order))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .patch(handler::update)
                .delete(handler::delete),
        )
}
