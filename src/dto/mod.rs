use validator::ValidationError;

pub mod addresses;
pub mod carts;
pub mod categories;
pub mod descriptions;
pub mod image_to_text;
pub mod orders;
pub mod payments;
pub mod products;
pub mod ranks;
pub mod reviews;
pub mod users;

/// Rejects empty and whitespace-only strings.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;
    use crate::dto::{
        orders::{OrderItemRequest, OrderRequest},
        reviews::ReviewRequest,
    };

    #[test]
    fn blank_strings_are_rejected() {
        assert!(not_blank("").is_err());
        assert!(not_blank(" \t").is_err());
        assert!(not_blank("kimchi").is_ok());
    }

    #[test]
    fn order_items_are_validated_too() {
        let order = OrderRequest {
            payment_id: 1,
            address_id: 1,
            order_status: "PLACED".into(),
            total_amount: 100,
            order_items: vec![OrderItemRequest {
                product_id: 1,
                quantity: 0,
                unit_price: 100,
            }],
        };
        let errors = order.validate().unwrap_err();
        assert!(errors.to_string().contains("quantity"));
    }

    #[test]
    fn review_rate_is_bounded() {
        let low = ReviewRequest { rate: 0, comment: None };
        let high = ReviewRequest { rate: 5, comment: None };
        assert!(low.validate().is_err());
        assert!(high.validate().is_ok());
    }
}
