//! Built-in insight rules

use crate::models::{Category, Transaction};

use super::aggregate::top_category;
use super::engine::{AnalysisContext, InsightRule};
use super::types::{Insight, InsightKind};

/// One insight per budget whose spend is over its amount
pub struct OverBudgetRule;

impl InsightRule for OverBudgetRule {
    fn kind(&self) -> InsightKind {
        InsightKind::Exceeded
    }

    fn name(&self) -> &'static str {
        "Over budget"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        ctx.comparisons
            .iter()
            .filter(|c| c.over_budget)
            .map(|c| {
                Insight::new(
                    self.kind(),
                    format!(
                        "You've exceeded your {} budget by ${:.2}.",
                        c.label, c.overage_amount
                    ),
                )
            })
            .collect()
    }
}

/// One insight per budget still within its amount but past the warning threshold
pub struct NearLimitRule;

impl InsightRule for NearLimitRule {
    fn kind(&self) -> InsightKind {
        InsightKind::Warning
    }

    fn name(&self) -> &'static str {
        "Near limit"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let threshold = ctx.config.near_limit_percent;

        ctx.comparisons
            .iter()
            .filter(|c| !c.over_budget && c.percent_used > threshold)
            .map(|c| {
                Insight::new(
                    self.kind(),
                    format!(
                        "You've used {:.0}% of your {} budget.",
                        c.percent_used.round(),
                        c.label
                    ),
                )
            })
            .collect()
    }
}

/// The single highest-spending category
pub struct TopCategoryRule;

impl InsightRule for TopCategoryRule {
    fn kind(&self) -> InsightKind {
        InsightKind::Informational
    }

    fn name(&self) -> &'static str {
        "Top category"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        top_category(&ctx.totals)
            .map(|top| {
                Insight::new(
                    self.kind(),
                    format!(
                        "Your highest spending category is {} at ${:.2}.",
                        top.category.label(),
                        top.amount
                    ),
                )
            })
            .into_iter()
            .collect()
    }
}

/// Categories with spend but no budget, combined into one suggestion
pub struct UnbudgetedCategoriesRule;

impl InsightRule for UnbudgetedCategoriesRule {
    fn kind(&self) -> InsightKind {
        InsightKind::Suggestion
    }

    fn name(&self) -> &'static str {
        "Unbudgeted categories"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let missing: Vec<Category> = ctx
            .totals
            .categories()
            .filter(|c| !ctx.budgets.iter().any(|b| b.category == *c))
            .collect();

        if missing.is_empty() {
            return vec![];
        }

        let labels: Vec<&str> = missing.iter().map(|c| c.label()).collect();
        vec![Insight::new(
            self.kind(),
            format!(
                "Consider setting budgets for these categories: {}.",
                labels.join(", ")
            ),
        )]
    }
}

/// The most recent transaction above the large-amount threshold
pub struct LargeTransactionRule;

impl LargeTransactionRule {
    /// Latest qualifying transaction; on equal dates the earlier one in input order wins
    fn most_recent_large<'t>(
        transactions: &'t [Transaction],
        threshold: f64,
    ) -> Option<&'t Transaction> {
        let mut latest: Option<&Transaction> = None;
        for tx in transactions.iter().filter(|t| t.amount > threshold) {
            match latest {
                Some(current) if tx.date <= current.date => {}
                _ => latest = Some(tx),
            }
        }
        latest
    }
}

impl InsightRule for LargeTransactionRule {
    fn kind(&self) -> InsightKind {
        InsightKind::Notable
    }

    fn name(&self) -> &'static str {
        "Large transaction"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        Self::most_recent_large(ctx.transactions, ctx.config.large_transaction_amount)
            .map(|tx| {
                Insight::new(
                    self.kind(),
                    format!(
                        "Large transaction of ${:.2} on {} for \"{}\".",
                        tx.amount,
                        tx.date.format("%b %-d"),
                        tx.description
                    ),
                )
            })
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InsightConfig;
    use crate::models::{Budget, Snapshot};
    use crate::test_utils::{at, budget, spend, tx};

    fn run(rule: &dyn InsightRule, transactions: Vec<Transaction>, budgets: Vec<Budget>) -> Vec<Insight> {
        let snapshot = Snapshot {
            transactions,
            budgets,
        };
        let config = InsightConfig::default();
        let ctx = AnalysisContext::new(&snapshot, &config).unwrap();
        rule.evaluate(&ctx)
    }

    #[test]
    fn test_over_budget_fires_per_budget() {
        let insights = run(
            &OverBudgetRule,
            vec![
                spend(1, Category::Food, 210.0),
                spend(2, Category::Debt, 80.25),
                spend(3, Category::Housing, 10.0),
            ],
            vec![
                budget(1, Category::Food, 200.0),
                budget(2, Category::Debt, 50.0),
                budget(3, Category::Housing, 900.0),
            ],
        );

        assert_eq!(insights.len(), 2);
        assert_eq!(insights[0].text, "You've exceeded your Food budget by $10.00.");
        assert_eq!(insights[1].text, "You've exceeded your Debt budget by $30.25.");
    }

    #[test]
    fn test_near_limit_skips_exact_threshold_and_over_budget() {
        let insights = run(
            &NearLimitRule,
            vec![
                spend(1, Category::Food, 80.0),
                spend(2, Category::Debt, 100.0),
                spend(3, Category::Gifts, 120.0),
            ],
            vec![
                budget(1, Category::Food, 100.0),
                budget(2, Category::Debt, 100.0),
                budget(3, Category::Gifts, 100.0),
            ],
        );

        // 80% is not past the threshold, 100% is at the limit, 120% is exceeded
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].text, "You've used 100% of your Debt budget.");
    }

    #[test]
    fn test_near_limit_rounds_percentage() {
        let insights = run(
            &NearLimitRule,
            vec![spend(1, Category::Utilities, 86.6)],
            vec![budget(1, Category::Utilities, 100.0)],
        );
        assert_eq!(insights[0].text, "You've used 87% of your Utilities budget.");
    }

    #[test]
    fn test_top_category_fires_once() {
        let insights = run(
            &TopCategoryRule,
            vec![
                spend(1, Category::Food, 50.0),
                spend(2, Category::Housing, 50.0),
                spend(3, Category::Gifts, 10.0),
            ],
            vec![budget(1, Category::Food, 10.0)],
        );
        assert_eq!(insights.len(), 1);
        assert_eq!(
            insights[0].text,
            "Your highest spending category is Food at $50.00."
        );
    }

    #[test]
    fn test_top_category_silent_without_categorized_spend() {
        let insights = run(
            &TopCategoryRule,
            vec![tx(1, 500.0, None, at(2026, 3, 1), "Unsorted")],
            vec![budget(1, Category::Food, 10.0)],
        );
        assert!(insights.is_empty());
    }

    #[test]
    fn test_unbudgeted_excludes_budgeted_categories() {
        let budgets = vec![budget(1, Category::Food, 100.0)];
        let insights = run(
            &UnbudgetedCategoriesRule,
            vec![
                spend(1, Category::Personal, 5.0),
                spend(2, Category::Food, 5.0),
                spend(3, Category::Education, 5.0),
                spend(4, Category::Personal, 5.0),
            ],
            budgets.clone(),
        );

        assert_eq!(insights.len(), 1);
        assert_eq!(
            insights[0].text,
            "Consider setting budgets for these categories: Personal, Education."
        );
        for b in &budgets {
            assert!(!insights[0].text.contains(b.category.label()));
        }
    }

    #[test]
    fn test_unbudgeted_silent_when_all_covered() {
        let insights = run(
            &UnbudgetedCategoriesRule,
            vec![spend(1, Category::Food, 5.0), tx(2, 9.0, None, at(2026, 3, 2), "Cash")],
            vec![budget(1, Category::Food, 100.0)],
        );
        assert!(insights.is_empty());
    }

    #[test]
    fn test_large_transaction_picks_most_recent() {
        let insights = run(
            &LargeTransactionRule,
            vec![
                tx(1, 300.0, Some(Category::Housing), at(2026, 1, 3), "Rent top-up"),
                tx(2, 150.0, None, at(2026, 2, 14), "Flowers"),
                tx(3, 100.0, Some(Category::Food), at(2026, 3, 1), "Exactly at threshold"),
            ],
            vec![budget(1, Category::Food, 10.0)],
        );

        assert_eq!(insights.len(), 1);
        assert_eq!(
            insights[0].text,
            "Large transaction of $150.00 on Feb 14 for \"Flowers\"."
        );
    }

    #[test]
    fn test_large_transaction_tie_keeps_input_order() {
        let insights = run(
            &LargeTransactionRule,
            vec![
                tx(1, 101.0, None, at(2026, 3, 5), "First"),
                tx(2, 500.0, None, at(2026, 3, 5), "Second"),
            ],
            vec![budget(1, Category::Food, 10.0)],
        );
        assert_eq!(
            insights[0].text,
            "Large transaction of $101.00 on Mar 5 for \"First\"."
        );
    }

    #[test]
    fn test_large_transaction_none_qualifying() {
        let insights = run(
            &LargeTransactionRule,
            vec![spend(1, Category::Food, 99.99)],
            vec![budget(1, Category::Food, 10.0)],
        );
        assert!(insights.is_empty());
    }
}
