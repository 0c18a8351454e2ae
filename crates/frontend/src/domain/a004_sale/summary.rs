use contracts::domain::a004_sale::{round_cents, SaleFilter, SalesTotal};

use crate::shared::api::{fetch_one, ApiClient, ApiError};
use crate::shared::api_utils::{encode_query, with_query};

/// Figures of the summary cards above the sales table.
///
/// Built in one place from the backend total and the transaction count of
/// the list load that used the same filters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SalesSummary {
    pub total_sales: f64,
    pub transactions: u64,
}

impl SalesSummary {
    pub fn new(total_sales: f64, transactions: u64) -> Self {
        Self {
            total_sales,
            transactions,
        }
    }

    pub fn average(&self) -> f64 {
        if self.transactions == 0 {
            return 0.0;
        }
        round_cents(self.total_sales / self.transactions as f64)
    }
}

/// Summary shown next to the table, fed by one fetch per applied list load.
///
/// Only the completion of the latest started fetch is kept; an older one
/// finishing late is dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SummaryTracker {
    latest: u64,
    summary: SalesSummary,
}

impl SummaryTracker {
    pub fn summary(&self) -> SalesSummary {
        self.summary
    }

    /// Registers a fetch for the list load carrying `token`
    pub fn begin(&mut self, token: u64) {
        self.latest = self.latest.max(token);
    }

    /// Applies a finished fetch; failures reset the cards to zeros
    pub fn complete(&mut self, token: u64, result: Result<SalesSummary, ApiError>) -> bool {
        if token != self.latest {
            log::debug!("Discarding stale sales summary (token {} < {})", token, self.latest);
            return false;
        }
        self.summary = match result {
            Ok(value) => value,
            Err(e) => {
                log::error!("Error loading sales summary: {}", e);
                SalesSummary::default()
            }
        };
        true
    }
}

/// `GET /sales/total` with the list's date filters
pub async fn fetch_summary<A: ApiClient>(
    api: &A,
    filters: &SaleFilter,
    transactions: u64,
) -> Result<SalesSummary, ApiError> {
    let query = encode_query(filters).map_err(|e| ApiError::Encode(e.to_string()))?;
    let total: SalesTotal = fetch_one(api, with_query("/sales/total", &query)).await?;
    Ok(SalesSummary::new(total.amount(), transactions))
}
