use cartwise_core::BudgetStatus;

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::{ConfirmRequest, ProposeRequest, ProposeResponse, SetBudgetRequest};

impl ApiClient {
    /// Sets the budget limit. The backend also resets the wallet balance to
    /// the new limit.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`] from the request.
    pub async fn set_budget(
        &self,
        budget_limit: f64,
        currency: &str,
        user_id: &str,
    ) -> Result<BudgetStatus, ClientError> {
        let body = SetBudgetRequest {
            user_id,
            budget_limit,
            currency,
        };
        self.post("/api/budget/set", &body).await
    }

    /// # Errors
    ///
    /// Propagates any [`ClientError`] from the request.
    pub async fn budget_status(&self, user_id: &str) -> Result<BudgetStatus, ClientError> {
        self.get_with_query("/api/budget/status", &[("user_id", user_id)])
            .await
    }

    /// Asks the budget service whether a purchase may go ahead. Does not
    /// touch the wallet; use [`ProposeResponse::decision`] to interpret it.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`] from the request.
    pub async fn propose_purchase(
        &self,
        amount: f64,
        item_name: &str,
        user_id: &str,
    ) -> Result<ProposeResponse, ClientError> {
        let body = ProposeRequest {
            user_id,
            amount,
            item_name,
        };
        self.post("/api/budget/propose", &body).await
    }

    /// Debits `amount` from the wallet and returns the new status.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`] from the request.
    pub async fn confirm_purchase(
        &self,
        amount: f64,
        user_id: &str,
    ) -> Result<BudgetStatus, ClientError> {
        self.post("/api/budget/confirm", &ConfirmRequest { user_id, amount })
            .await
    }
}
