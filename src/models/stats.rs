//! Dashboard summary aggregates computed over the fixture data.

use std::collections::BTreeMap;

use crate::models::{ClassSession, ClassStatus, Currency, Member, Payment, PaymentStatus, Wod};

/// Figures shown on the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_members: usize,
    /// Classes with status `scheduled`
    pub scheduled_classes: usize,
    pub full_classes: usize,
    pub cancelled_classes: usize,
    pub pending_payments: usize,
    pub failed_payments: usize,
    /// Paid revenue per currency, in minor units
    pub revenue_by_currency: BTreeMap<Currency, i64>,
    /// Most recent WOD by date
    pub latest_wod: Option<Wod>,
}

impl DashboardSummary {
    pub fn compute(
        members: &[Member],
        classes: &[ClassSession],
        payments: &[Payment],
        wods: &[Wod],
    ) -> Self {
        let mut summary = Self {
            total_members: members.len(),
            ..Self::default()
        };

        for class in classes {
            match class.status {
                ClassStatus::Cancelled => summary.cancelled_classes += 1,
                ClassStatus::Scheduled => summary.scheduled_classes += 1,
                ClassStatus::Full => summary.full_classes += 1,
            }
        }

        for payment in payments {
            match payment.status {
                PaymentStatus::Paid => {
                    *summary
                        .revenue_by_currency
                        .entry(payment.currency)
                        .or_insert(0) += payment.amount_cents;
                }
                PaymentStatus::Pending => summary.pending_payments += 1,
                PaymentStatus::Failed => summary.failed_payments += 1,
                PaymentStatus::Refunded => {}
            }
        }

        summary.latest_wod = wods.iter().max_by_key(|w| w.date).cloned();
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayOfWeek, PaymentMethod};
    use chrono::{NaiveDate, NaiveTime};

    fn make_payment(id: &str, cents: i64, currency: Currency, status: PaymentStatus) -> Payment {
        Payment {
            id: id.to_string(),
            member_id: "m1".to_string(),
            amount_cents: cents,
            currency,
            method: PaymentMethod::Card,
            status,
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            notes: None,
        }
    }

    fn make_class(id: &str, status: ClassStatus) -> ClassSession {
        ClassSession {
            id: id.to_string(),
            name: "WOD".to_string(),
            day: DayOfWeek::Monday,
            time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            status,
        }
    }

    fn make_wod(id: &str, day: u32) -> Wod {
        Wod {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            title: format!("Wod {}", id),
            notes: None,
        }
    }

    #[test]
    fn test_revenue_only_counts_paid() {
        let payments = vec![
            make_payment("p1", 5000, Currency::Eur, PaymentStatus::Paid),
            make_payment("p2", 2500, Currency::Eur, PaymentStatus::Paid),
            make_payment("p3", 9900, Currency::Usd, PaymentStatus::Paid),
            make_payment("p4", 1000, Currency::Eur, PaymentStatus::Pending),
            make_payment("p5", 1000, Currency::Eur, PaymentStatus::Refunded),
            make_payment("p6", 1000, Currency::Usd, PaymentStatus::Failed),
        ];

        let summary = DashboardSummary::compute(&[], &[], &payments, &[]);

        assert_eq!(summary.revenue_by_currency.get(&Currency::Eur), Some(&7500));
        assert_eq!(summary.revenue_by_currency.get(&Currency::Usd), Some(&9900));
        assert_eq!(summary.pending_payments, 1);
        assert_eq!(summary.failed_payments, 1);
    }

    #[test]
    fn test_class_counts_and_latest_wod() {
        let classes = vec![
            make_class("c1", ClassStatus::Scheduled),
            make_class("c2", ClassStatus::Full),
            make_class("c3", ClassStatus::Cancelled),
        ];
        let wods = vec![make_wod("w1", 3), make_wod("w2", 9), make_wod("w3", 5)];

        let summary = DashboardSummary::compute(&[], &classes, &[], &wods);

        assert_eq!(summary.scheduled_classes, 1);
        assert_eq!(summary.full_classes, 1);
        assert_eq!(summary.cancelled_classes, 1);
        assert_eq!(summary.latest_wod.map(|w| w.id), Some("w2".to_string()));
    }

    #[test]
    fn test_empty_inputs() {
        let summary = DashboardSummary::compute(&[], &[], &[], &[]);
        assert_eq!(summary, DashboardSummary::default());
    }
}
