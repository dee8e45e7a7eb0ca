use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// 遠端未回 `ok: true` 且沒有提供原因時的預設訊息
pub const GENERIC_FAILURE: &str = "No se pudo consultar.";

/// 使用者送出的原始欄位值，不做任何處理
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmittedForm {
    pub correo: String,
    pub planilla: String,
}

impl SubmittedForm {
    pub fn new(correo: impl Into<String>, planilla: impl Into<String>) -> Self {
        Self {
            correo: correo.into(),
            planilla: planilla.into(),
        }
    }

    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        Self {
            correo: fields.get("correo").cloned().unwrap_or_default(),
            planilla: fields.get("planilla").cloned().unwrap_or_default(),
        }
    }
}

/// 送往遠端的查詢內容
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryPayload {
    pub correo: String,
    pub numero_planilla: String,
}

impl QueryPayload {
    pub fn new(correo: &str, planilla: &str) -> Self {
        Self {
            correo: correo.to_string(),
            numero_planilla: normalize_planilla(planilla),
        }
    }
}

/// 只保留 planilla 編號中的 ASCII 數字
pub fn normalize_planilla(planilla: &str) -> String {
    planilla.chars().filter(char::is_ascii_digit).collect()
}

/// 結果表格的七個欄位，依顯示順序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultField {
    RazonSocial,
    PeriodoSalud,
    TipoPlanilla,
    DiasMora,
    ValorMora,
    DiaPagoEfectivo,
    ValorAPagar,
}

impl ResultField {
    pub const ALL: [ResultField; 7] = [
        ResultField::RazonSocial,
        ResultField::PeriodoSalud,
        ResultField::TipoPlanilla,
        ResultField::DiasMora,
        ResultField::ValorMora,
        ResultField::DiaPagoEfectivo,
        ResultField::ValorAPagar,
    ];

    /// 遠端 `data` 物件中的欄位名稱
    pub fn key(self) -> &'static str {
        match self {
            ResultField::RazonSocial => "razon_social",
            ResultField::PeriodoSalud => "periodo_salud",
            ResultField::TipoPlanilla => "tipo_planilla",
            ResultField::DiasMora => "dias_mora",
            ResultField::ValorMora => "valor_mora",
            ResultField::DiaPagoEfectivo => "dia_pago_efectivo",
            ResultField::ValorAPagar => "valor_a_pagar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResultField::RazonSocial => "Razón Social / Nombres y Apellidos:",
            ResultField::PeriodoSalud => "Periodo Liquidación Salud:",
            ResultField::TipoPlanilla => "Tipo de Planilla:",
            ResultField::DiasMora => "Días de Mora:",
            ResultField::ValorMora => "Valor Mora:",
            ResultField::DiaPagoEfectivo => "Día de Pago Efectivo:",
            ResultField::ValorAPagar => "Valor a Pagar:",
        }
    }

    /// 遠端未提供此欄位時顯示的預設值
    pub fn default_value(self) -> &'static str {
        match self {
            ResultField::DiasMora => "0",
            ResultField::ValorMora => "$ 0",
            _ => "-",
        }
    }

    pub fn is_money(self) -> bool {
        matches!(self, ResultField::ValorAPagar)
    }
}

/// 遠端回傳的單筆 planilla 資料；未提供的欄位保持缺席
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultRecord {
    values: HashMap<ResultField, String>,
}

impl ResultRecord {
    pub fn from_json(data: &Map<String, Value>) -> Self {
        let values = ResultField::ALL
            .iter()
            .filter_map(|field| {
                let text = match data.get(field.key())? {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    // null / array / object 視為未提供
                    _ => return None,
                };
                Some((*field, text))
            })
            .collect();

        Self { values }
    }

    pub fn with_value(mut self, field: ResultField, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    pub fn get(&self, field: ResultField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// 顯示用的值：遠端有值就用遠端，否則用預設值
    pub fn resolve(&self, field: ResultField) -> &str {
        self.get(field).unwrap_or_else(|| field.default_value())
    }
}

/// 單次查詢結果：資料或錯誤訊息，兩者不會同時存在
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    Success { data: ResultRecord },
    Failure { message: String },
}

impl QueryResult {
    pub fn failure(message: impl Into<String>) -> Self {
        QueryResult::Failure {
            message: message.into(),
        }
    }

    /// 解讀回應 body；只有明確的 `ok: true` 才算成功
    pub fn from_body(body: &Map<String, Value>) -> Self {
        match body.get("ok") {
            Some(Value::Bool(true)) => {
                let data = match body.get("data") {
                    Some(Value::Object(data)) => ResultRecord::from_json(data),
                    _ => ResultRecord::default(),
                };
                QueryResult::Success { data }
            }
            _ => QueryResult::failure(remote_error(body).unwrap_or(GENERIC_FAILURE)),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, QueryResult::Success { .. })
    }
}

/// 遠端以字串提供的 `error` 訊息（`detail` 不顯示）
pub fn remote_error(body: &Map<String, Value>) -> Option<&str> {
    body.get("error").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_normalize_planilla() {
        assert_eq!(normalize_planilla("AB-123/45"), "12345");
        assert_eq!(normalize_planilla(""), "");
        assert_eq!(normalize_planilla(" 98 76 "), "9876");
        assert_eq!(normalize_planilla("sin número"), "");
        // 全形數字不算十進位數字
        assert_eq!(normalize_planilla("１２3"), "3");
    }

    #[test]
    fn test_payload_serializes_expected_keys() {
        let payload = QueryPayload::new("josé@example.com", "N° 8001-22");
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            json,
            r#"{"correo":"josé@example.com","numero_planilla":"800122"}"#
        );
    }

    #[test]
    fn test_submitted_form_from_fields() {
        let mut fields = HashMap::new();
        fields.insert("correo".to_string(), "a@b.co".to_string());
        let form = SubmittedForm::from_fields(&fields);
        assert_eq!(form, SubmittedForm::new("a@b.co", ""));
    }

    #[test]
    fn test_record_defaults() {
        let record = ResultRecord::default();
        let resolved: Vec<&str> = ResultField::ALL.iter().map(|f| record.resolve(*f)).collect();
        assert_eq!(resolved, vec!["-", "-", "-", "0", "$ 0", "-", "-"]);
    }

    #[test]
    fn test_record_from_json_coerces_scalars() {
        let data = object(json!({
            "razon_social": "ACME S.A.",
            "dias_mora": 5,
            "valor_mora": null,
            "tipo_planilla": ["E"],
            "periodo_salud": true,
            "unrelated": "ignored"
        }));
        let record = ResultRecord::from_json(&data);

        assert_eq!(record.get(ResultField::RazonSocial), Some("ACME S.A."));
        assert_eq!(record.get(ResultField::DiasMora), Some("5"));
        assert_eq!(record.get(ResultField::PeriodoSalud), Some("true"));
        assert_eq!(record.resolve(ResultField::ValorMora), "$ 0");
        assert_eq!(record.resolve(ResultField::TipoPlanilla), "-");
    }

    #[test]
    fn test_from_body_success() {
        let body = object(json!({
            "ok": true,
            "data": {"razon_social": "ACME S.A.", "dias_mora": "5"}
        }));
        let expected = ResultRecord::default()
            .with_value(ResultField::RazonSocial, "ACME S.A.")
            .with_value(ResultField::DiasMora, "5");

        assert_eq!(
            QueryResult::from_body(&body),
            QueryResult::Success { data: expected }
        );
    }

    #[test]
    fn test_from_body_success_without_data() {
        let body = object(json!({"ok": true}));
        assert_eq!(
            QueryResult::from_body(&body),
            QueryResult::Success {
                data: ResultRecord::default()
            }
        );
    }

    #[test]
    fn test_from_body_failure_uses_remote_error() {
        let body = object(json!({"ok": false, "error": "captcha_or_interstitial"}));
        assert_eq!(
            QueryResult::from_body(&body),
            QueryResult::failure("captcha_or_interstitial")
        );
    }

    #[test]
    fn test_from_body_failure_without_error_uses_fallback() {
        let body = object(json!({"ok": false}));
        assert_eq!(QueryResult::from_body(&body), QueryResult::failure(GENERIC_FAILURE));

        let missing_ok = object(json!({"data": {"razon_social": "ACME"}}));
        assert!(!QueryResult::from_body(&missing_ok).is_success());

        let non_string_error = object(json!({"ok": false, "error": {"code": 7}}));
        assert_eq!(
            QueryResult::from_body(&non_string_error),
            QueryResult::failure(GENERIC_FAILURE)
        );
    }

    #[test]
    fn test_detail_is_never_shown() {
        let body = object(json!({
            "ok": false,
            "error": "timeout",
            "detail": "Timeout 30000ms exceeded at https://internal/page",
            "meta": {"elapsed_ms": 30012}
        }));
        assert_eq!(QueryResult::from_body(&body), QueryResult::failure("timeout"));

        let detail_only = object(json!({"ok": false, "detail": "Traceback ..."}));
        assert_eq!(
            QueryResult::from_body(&detail_only),
            QueryResult::failure(GENERIC_FAILURE)
        );
    }
}
