//! Payment breakdown line items for the add/edit trip forms.
//!
//! The backend expects the variable-length `{description, price}` list as a
//! single JSON-encoded form field, in entry order. The running total is
//! displayed next to the row editor before submission.

use crate::models::PaymentDetail;

/// Serialize line items into the single `paymentDetails` form field.
/// Order is preserved; rows with an empty description are dropped.
pub fn encode_payment_details(items: &[PaymentDetail]) -> String {
    let kept: Vec<&PaymentDetail> = items
        .iter()
        .filter(|item| !item.description.trim().is_empty())
        .collect();
    // Vec<&T> serializes like Vec<T>; a list of strings and numbers cannot fail.
    serde_json::to_string(&kept).unwrap_or_else(|_| "[]".to_string())
}

/// Running total shown in the form footer.
pub fn payment_total(items: &[PaymentDetail]) -> f64 {
    items.iter().map(|item| item.price).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<PaymentDetail> {
        vec![
            PaymentDetail {
                description: "Transport".into(),
                price: 500.0,
            },
            PaymentDetail {
                description: "Stay".into(),
                price: 1500.0,
            },
        ]
    }

    #[test]
    fn encoding_round_trips_in_entry_order() {
        let encoded = encode_payment_details(&rows());
        let decoded: Vec<PaymentDetail> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, rows());
        assert_eq!(decoded[0].description, "Transport");
        assert_eq!(decoded[1].description, "Stay");
    }

    #[test]
    fn running_total_matches_displayed_value() {
        assert_eq!(payment_total(&rows()), 2000.0);
        assert_eq!(payment_total(&[]), 0.0);
    }

    #[test]
    fn blank_rows_are_dropped_from_the_encoding() {
        let mut items = rows();
        items.push(PaymentDetail {
            description: "  ".into(),
            price: 999.0,
        });
        let decoded: Vec<PaymentDetail> =
            serde_json::from_str(&encode_payment_details(&items)).unwrap();
        assert_eq!(decoded.len(), 2);
        // The blank row still counts toward the visible total until removed.
        assert_eq!(payment_total(&items), 2999.0);
    }
}
