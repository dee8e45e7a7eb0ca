//! 表單頁面的請求處理

use std::collections::HashMap;

use axum::{
    extract::{rejection::FormRejection, State},
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use tracing::warn;

use crate::core::handler::{handle_request, FormRequest, PageResponse};

use super::state::AppState;

/// 建立路由：`GET /` 顯示表單，`POST /` 送出查詢
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .with_state(state)
}

async fn show_form(State(state): State<AppState>) -> Response {
    handle_request(&FormRequest::get(), state.query())
        .await
        .into_response()
}

/// 無法解析的 body 視為兩個欄位皆空白的送出，使用者仍會看到驗證訊息
async fn submit_form(
    State(state): State<AppState>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Response {
    let fields = match form {
        Ok(Form(fields)) => fields,
        Err(rejection) => {
            warn!(error = %rejection, "Unreadable form body");
            HashMap::new()
        }
    };

    handle_request(&FormRequest::post(fields), state.query())
        .await
        .into_response()
}

impl IntoResponse for PageResponse {
    fn into_response(self) -> Response {
        (self.status, Html(self.body)).into_response()
    }
}
