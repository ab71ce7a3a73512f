//! Payment summary section - totals and the place-order button.

use shopfront_commerce::checkout::{PaymentSummary, TAX_RATE_PERCENT};
use shopfront_dom::Fragment;

/// Render the payment summary.
pub fn render_payment_summary(summary: &PaymentSummary) -> Fragment {
    Fragment::markup(format!(
        r#"<div class="payment-summary-title">Order Summary</div>
<div class="payment-summary-row">
    <div>Items ({items}):</div>
    <div class="payment-summary-money">{products}</div>
</div>
<div class="payment-summary-row">
    <div>Shipping &amp; handling:</div>
    <div class="payment-summary-money">{shipping}</div>
</div>
<div class="payment-summary-row subtotal-row">
    <div>Total before tax:</div>
    <div class="payment-summary-money">{before_tax}</div>
</div>
<div class="payment-summary-row">
    <div>Estimated tax ({rate}%):</div>
    <div class="payment-summary-money">{tax}</div>
</div>
<div class="payment-summary-row total-row">
    <div>Order total:</div>
    <div class="payment-summary-money">{total}</div>
</div>
<button class="place-order-button button-primary js-place-order">Place your order</button>"#,
        items = summary.item_count,
        products = summary.products_total.display(),
        shipping = summary.shipping_total.display(),
        before_tax = summary.total_before_tax.display(),
        rate = TAX_RATE_PERCENT,
        tax = summary.tax.display(),
        total = summary.total.display(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_commerce::Money;

    #[test]
    fn test_render_totals() {
        let summary = PaymentSummary {
            item_count: 3,
            products_total: Money::new(2000),
            shipping_total: Money::new(500),
            total_before_tax: Money::new(2500),
            tax: Money::new(250),
            total: Money::new(2750),
        };

        let html = render_payment_summary(&summary).to_html();
        assert!(html.contains("Items (3):"));
        assert!(html.contains(r#"<div class="payment-summary-money">$20.00</div>"#));
        assert!(html.contains(r#"<div class="payment-summary-money">$5.00</div>"#));
        assert!(html.contains(r#"<div class="payment-summary-money">$25.00</div>"#));
        assert!(html.contains("Estimated tax (10%):"));
        assert!(html.contains(r#"<div class="payment-summary-money">$2.50</div>"#));
        assert!(html.contains(r#"<div class="payment-summary-money">$27.50</div>"#));
        assert!(html.contains("js-place-order"));
    }

    #[test]
    fn test_render_empty() {
        let html = render_payment_summary(&PaymentSummary::default()).to_html();
        assert!(html.contains("Items (0):"));
        assert!(html.contains("$0.00"));
    }
}
