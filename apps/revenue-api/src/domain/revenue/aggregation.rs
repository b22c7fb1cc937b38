//! Pure revenue aggregation over reservation rows.

use crate::domain::revenue::reservation::Reservation;
use crate::domain::shared::{Money, PropertyId, RevenuePeriod, TenantId};

/// Stateless service computing exact revenue totals.
///
/// Selection and summation are pure; store access lives behind the
/// application-layer port.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevenueAggregationService;

impl RevenueAggregationService {
    /// Sum the total amounts of the given rows with exact decimal addition.
    ///
    /// An empty slice sums to [`Money::ZERO`].
    #[must_use]
    pub fn sum_amounts(reservations: &[Reservation]) -> Money {
        reservations.iter().map(|r| r.total_amount).sum()
    }

    /// Select the rows belonging to `(tenant, property, period)`.
    ///
    /// Tenant and property match exactly; the check-in instant is tested
    /// against the period's half-open UTC range. Used by in-process stores;
    /// a SQL store expresses the same predicate in its WHERE clause.
    #[must_use]
    pub fn select_for_period<'a>(
        reservations: &'a [Reservation],
        tenant_id: &TenantId,
        property_id: &PropertyId,
        period: RevenuePeriod,
    ) -> Vec<&'a Reservation> {
        reservations
            .iter()
            .filter(|r| {
                r.tenant_id == *tenant_id
                    && r.property_id == *property_id
                    && period.contains(r.check_in)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::{ReservationId, Timestamp};

    fn reservation(id: &str, tenant: &str, property: &str, check_in: &str, amount: &str) -> Reservation {
        Reservation::new(
            ReservationId::new(id),
            TenantId::new(tenant),
            PropertyId::new(property),
            Timestamp::parse(check_in).unwrap(),
            Money::parse(amount).unwrap(),
        )
    }

    #[test]
    fn sum_is_exact() {
        let rows = vec![
            reservation("r1", "tenant-a", "prop-001", "2024-03-10T10:00:00Z", "333.333"),
            reservation("r2", "tenant-a", "prop-001", "2024-03-15T10:00:00Z", "333.333"),
            reservation("r3", "tenant-a", "prop-001", "2024-03-20T10:00:00Z", "333.334"),
        ];

        let total = RevenueAggregationService::sum_amounts(&rows);
        assert_eq!(total.to_amount_string(), "1000.000");
    }

    #[test]
    fn sum_of_no_rows_is_zero() {
        assert!(RevenueAggregationService::sum_amounts(&[]).is_zero());
    }

    #[test]
    fn selection_matches_tenant_exactly() {
        let rows = vec![
            reservation("r1", "tenant-a", "prop-001", "2024-03-10T10:00:00Z", "100.000"),
            // Same property id string under a different tenant.
            reservation("r2", "tenant-b", "prop-001", "2024-03-10T10:00:00Z", "999.000"),
        ];

        let period = RevenuePeriod::new(2024, 3).unwrap();
        let selected = RevenueAggregationService::select_for_period(
            &rows,
            &TenantId::new("tenant-a"),
            &PropertyId::new("prop-001"),
            period,
        );

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id.as_str(), "r1");
    }

    #[test]
    fn selection_respects_half_open_window() {
        let rows = vec![
            reservation("at-start", "tenant-a", "prop-001", "2024-03-01T00:00:00Z", "1.000"),
            reservation("at-end", "tenant-a", "prop-001", "2024-04-01T00:00:00Z", "2.000"),
            reservation("before", "tenant-a", "prop-001", "2024-02-29T23:30:00Z", "4.000"),
        ];

        let period = RevenuePeriod::new(2024, 3).unwrap();
        let selected = RevenueAggregationService::select_for_period(
            &rows,
            &TenantId::new("tenant-a"),
            &PropertyId::new("prop-001"),
            period,
        );

        let ids: Vec<&str> = selected.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["at-start"]);
    }
}
