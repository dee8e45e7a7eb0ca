use crate::config::QueryConfig;
use crate::domain::model::{remote_error, QueryPayload, QueryResult};
use crate::domain::ports::PlanillaQuery;
use crate::utils::error::{ConsultaError, Result};
use async_trait::async_trait;
use reqwest::{redirect, Client};
use serde_json::{Map, Value};
use std::time::Instant;

/// 以 reqwest 呼叫遠端 planilla 查詢 API 的客戶端
pub struct QueryClient {
    config: QueryConfig,
    client: Client,
}

impl QueryClient {
    pub fn new(config: QueryConfig) -> Result<Self> {
        // 每次查詢使用獨立連線，不保留閒置連線
        let client = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(0)
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| ConsultaError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// 送出查詢並回傳非錯誤回應的 JSON 物件
    async fn fetch(&self, payload: &QueryPayload) -> Result<Map<String, Value>> {
        tracing::debug!("📡 POST {}", self.config.endpoint);

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("📡 Query response status: {}", status);

        let text = response.text().await?;
        let body = match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(body)) => body,
            _ => return Err(ConsultaError::InvalidResponse),
        };

        if status.as_u16() >= 400 {
            return Err(match remote_error(&body) {
                Some(message) => ConsultaError::Remote {
                    message: message.to_string(),
                },
                None => ConsultaError::remote_status(status.as_u16()),
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl PlanillaQuery for QueryClient {
    async fn query(&self, correo: &str, planilla: &str) -> QueryResult {
        let payload = QueryPayload::new(correo, planilla);
        let started = Instant::now();

        let result = match self.fetch(&payload).await {
            Ok(body) => QueryResult::from_body(&body),
            Err(e) => {
                tracing::warn!(
                    numero_planilla = %payload.numero_planilla,
                    error = %e,
                    "❌ Planilla query failed"
                );
                QueryResult::failure(e.to_string())
            }
        };

        tracing::info!(
            numero_planilla = %payload.numero_planilla,
            success = result.is_success(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Planilla query finished"
        );

        result
    }
}
