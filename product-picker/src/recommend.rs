use std::cmp::Ordering;

use crate::catalog::{FinancialProduct, RiskTier};

/// What the user is looking for.
#[derive(Debug, Clone, Copy)]
pub struct UserQuery {
    pub risk: RiskTier,
    pub amount: f64,
    /// Desired duration in days; `None` means any duration is fine.
    pub duration: Option<u32>,
}

/// Maximum number of products shown per query.
pub const MAX_RESULTS: usize = 3;

/// Filter the catalog against a query: matching risk tier, an affordable
/// minimum amount, and — when a duration is requested — a product term that
/// covers it (products without a term always qualify). Best interest rate
/// first; ties keep catalog order.
pub fn recommend<'a>(
    catalog: &'a [FinancialProduct],
    query: &UserQuery,
) -> Vec<&'a FinancialProduct> {
    let mut matches: Vec<&FinancialProduct> = catalog
        .iter()
        .filter(|product| product.risk == query.risk)
        .filter(|product| product.min_amount <= query.amount)
        .filter(|product| match query.duration {
            Some(days) => product.duration_days.map_or(true, |term| term >= days),
            None => true,
        })
        .collect();

    // Stable sort: equal rates keep their catalog order.
    matches.sort_by(|a, b| {
        b.interest_rate
            .partial_cmp(&a.interest_rate)
            .unwrap_or(Ordering::Equal)
    });
    matches.truncate(MAX_RESULTS);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ProductKind, default_catalog};

    fn product(id: &str, risk: RiskTier, rate: f64, min_amount: f64) -> FinancialProduct {
        FinancialProduct {
            id: id.to_string(),
            name: format!("Product {id}"),
            kind: ProductKind::Fund,
            risk,
            interest_rate: rate,
            min_amount,
            max_amount: None,
            duration_days: None,
            replenishable: false,
            withdrawable: false,
            issuer: "Test".to_string(),
        }
    }

    #[test]
    fn low_risk_query_returns_bonds_before_deposit() {
        let catalog = default_catalog();
        let query = UserQuery {
            risk: RiskTier::Low,
            amount: 10_000.0,
            duration: None,
        };

        let results = recommend(&catalog, &query);

        let names: Vec<&str> = results.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Government Bonds", "Reliable Savings Deposit"]);
    }

    #[test]
    fn medium_risk_query_returns_only_the_fund() {
        let catalog = default_catalog();
        let query = UserQuery {
            risk: RiskTier::Medium,
            amount: 5_000.0,
            duration: None,
        };

        let results = recommend(&catalog, &query);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Gold ETF");
    }

    #[test]
    fn tiny_amount_matches_nothing() {
        let catalog = default_catalog();
        let query = UserQuery {
            risk: RiskTier::Low,
            amount: 100.0,
            duration: None,
        };

        assert!(recommend(&catalog, &query).is_empty());
    }

    #[test]
    fn requested_duration_drops_short_products() {
        let catalog = default_catalog();
        let query = UserQuery {
            risk: RiskTier::Low,
            amount: 50_000.0,
            duration: Some(400),
        };

        let results = recommend(&catalog, &query);

        // The 365-day deposit is out; the 730-day bonds stay.
        let names: Vec<&str> = results.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Government Bonds"]);
    }

    #[test]
    fn products_without_a_term_pass_any_duration() {
        let catalog = default_catalog();
        let query = UserQuery {
            risk: RiskTier::Medium,
            amount: 10_000.0,
            duration: Some(10_000),
        };

        let results = recommend(&catalog, &query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Gold ETF");
    }

    #[test]
    fn never_more_than_three_results_and_ties_keep_order() {
        let catalog = vec![
            product("a", RiskTier::Low, 5.0, 100.0),
            product("b", RiskTier::Low, 7.0, 100.0),
            product("c", RiskTier::Low, 7.0, 100.0),
            product("d", RiskTier::Low, 6.0, 100.0),
            product("e", RiskTier::High, 9.0, 100.0),
        ];
        let query = UserQuery {
            risk: RiskTier::Low,
            amount: 1_000.0,
            duration: None,
        };

        let results = recommend(&catalog, &query);

        assert_eq!(results.len(), MAX_RESULTS);
        let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "d"]);
        assert!(results.iter().all(|p| p.risk == RiskTier::Low));
    }
}
