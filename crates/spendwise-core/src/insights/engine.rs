//! Insight Engine - runs the registered rules over a snapshot

use crate::config::InsightConfig;
use crate::models::{Budget, Snapshot, Transaction};
use crate::Result;

use super::aggregate::{category_totals, compare_budgets_with_totals};
use super::rules::{
    LargeTransactionRule, NearLimitRule, OverBudgetRule, TopCategoryRule, UnbudgetedCategoriesRule,
};
use super::types::{BudgetComparison, CategoryTotals, Insight, InsightKind};

/// Everything a rule may look at, computed once per snapshot
pub struct AnalysisContext<'a> {
    pub transactions: &'a [Transaction],
    pub budgets: &'a [Budget],
    pub config: &'a InsightConfig,
    pub totals: CategoryTotals,
    /// One entry per budget, in budget order
    pub comparisons: Vec<BudgetComparison>,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(snapshot: &'a Snapshot, config: &'a InsightConfig) -> Result<Self> {
        let totals = category_totals(&snapshot.transactions);
        let comparisons = compare_budgets_with_totals(&snapshot.budgets, &totals)?;

        Ok(Self {
            transactions: &snapshot.transactions,
            budgets: &snapshot.budgets,
            config,
            totals,
            comparisons,
        })
    }
}

/// A single insight rule
pub trait InsightRule: Send + Sync {
    /// Kind of insight this rule emits
    fn kind(&self) -> InsightKind;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Produce zero or more insights
    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight>;
}

/// Evaluates rules in registration order and concatenates their output
pub struct InsightEngine {
    config: InsightConfig,
    rules: Vec<Box<dyn InsightRule>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new(InsightConfig::default())
    }
}

impl InsightEngine {
    /// Create an engine with the built-in rules
    pub fn new(config: InsightConfig) -> Self {
        let mut engine = Self {
            config,
            rules: vec![],
        };

        engine.register(Box::new(OverBudgetRule));
        engine.register(Box::new(NearLimitRule));
        engine.register(Box::new(TopCategoryRule));
        engine.register(Box::new(UnbudgetedCategoriesRule));
        engine.register(Box::new(LargeTransactionRule));

        engine
    }

    /// Append a rule; it runs after every rule registered before it
    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    /// Generate insights for a snapshot.
    ///
    /// Yields nothing unless the snapshot has both transactions and budgets.
    pub fn generate(&self, snapshot: &Snapshot) -> Result<Vec<Insight>> {
        if snapshot.transactions.is_empty() || snapshot.budgets.is_empty() {
            return Ok(vec![]);
        }

        let ctx = AnalysisContext::new(snapshot, &self.config)?;
        let mut insights = vec![];

        for rule in &self.rules {
            let produced = rule.evaluate(&ctx);
            tracing::debug!(
                rule = rule.name(),
                kind = rule.kind().as_str(),
                count = produced.len(),
                "Insight rule evaluated"
            );
            insights.extend(produced);
        }

        Ok(insights)
    }

    /// Kinds of the registered rules, in evaluation order
    pub fn rule_kinds(&self) -> Vec<InsightKind> {
        self.rules.iter().map(|r| r.kind()).collect()
    }
}
