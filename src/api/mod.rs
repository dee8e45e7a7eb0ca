//! HTTP 介面：單一路由提供 planilla 查詢表單

mod handlers;
mod state;

pub use handlers::create_router;
pub use state::AppState;
