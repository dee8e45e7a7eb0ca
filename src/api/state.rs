//! 表單頁面的共用狀態

use std::sync::Arc;

use crate::domain::ports::PlanillaQuery;

/// 所有請求共用的資源
///
/// 查詢客戶端透過 [`PlanillaQuery`] 介面持有，測試可替換成自己的實作
#[derive(Clone)]
pub struct AppState {
    query: Arc<dyn PlanillaQuery>,
}

impl AppState {
    pub fn new<Q>(query: Q) -> Self
    where
        Q: PlanillaQuery + 'static,
    {
        Self {
            query: Arc::new(query),
        }
    }

    pub fn query(&self) -> &dyn PlanillaQuery {
        self.query.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // axum 要求 state 可 Clone
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }
}
