use tracker_api::endpoints::analytics::AnalyticsSummary;

pub fn render_analytics(summary: &AnalyticsSummary) -> String {
    format!(
        "Transactions: {}  Expenses: {}  Income: {}",
        summary.transactions_count, summary.expense_count, summary.income_count
    )
}
