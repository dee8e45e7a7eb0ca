use crate::domain::model::QueryResult;
use async_trait::async_trait;

/// 向遠端查詢服務查詢一筆 planilla
///
/// 實作不回傳錯誤：連線、協定或遠端錯誤都轉成 [`QueryResult::Failure`]
#[async_trait]
pub trait PlanillaQuery: Send + Sync {
    async fn query(&self, correo: &str, planilla: &str) -> QueryResult;
}
