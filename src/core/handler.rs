use crate::core::render::render_page;
use crate::domain::model::{QueryResult, SubmittedForm};
use crate::domain::ports::PlanillaQuery;
use crate::utils::error::FieldError;
use crate::utils::validation::is_valid_email;
use axum::http::{Method, StatusCode};
use std::collections::HashMap;

/// 表單頁面收到的單一請求
#[derive(Debug, Clone)]
pub struct FormRequest {
    pub method: Method,
    pub fields: HashMap<String, String>,
}

impl FormRequest {
    pub fn get() -> Self {
        Self {
            method: Method::GET,
            fields: HashMap::new(),
        }
    }

    pub fn post(fields: HashMap<String, String>) -> Self {
        Self {
            method: Method::POST,
            fields,
        }
    }
}

/// 產生的頁面與回應狀態碼
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    pub status: StatusCode,
    pub body: String,
}

impl PageResponse {
    pub fn ok(body: String) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }
}

/// 檢查兩個欄位，回報所有錯誤
pub fn validate_form(form: &SubmittedForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !is_valid_email(&form.correo) {
        errors.push(FieldError::InvalidCorreo);
    }
    if form.planilla.trim().is_empty() {
        errors.push(FieldError::MissingPlanilla);
    }

    errors
}

/// 處理單一請求：驗證、遠端查詢、產生頁面
///
/// 只有 POST 算是送出，其他方法一律回傳空白表單。兩個欄位都通過驗證才會呼叫遠端
pub async fn handle_request<Q>(request: &FormRequest, query: &Q) -> PageResponse
where
    Q: PlanillaQuery + ?Sized,
{
    if request.method != Method::POST {
        return PageResponse::ok(render_page(&SubmittedForm::default(), &[], None));
    }

    let form = SubmittedForm::from_fields(&request.fields);
    let mut errors: Vec<String> = validate_form(&form)
        .iter()
        .map(ToString::to_string)
        .collect();

    let mut record = None;
    if errors.is_empty() {
        match query.query(&form.correo, form.planilla.trim()).await {
            QueryResult::Success { data } => record = Some(data),
            QueryResult::Failure { message } => errors.push(message),
        }
    } else {
        tracing::debug!(errors = errors.len(), "Form submission rejected by validation");
    }

    PageResponse::ok(render_page(&form, &errors, record.as_ref()))
}
