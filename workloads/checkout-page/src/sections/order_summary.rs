//! Order summary section - one container per cart line.

use shopfront_dom::{html_escape, Fragment};

use crate::view::{cart_item_selector, DeliveryChoiceView, OrderLineView, OrderSummaryView};

/// Render the order summary. Each line is an addressable node.
pub fn render_order_summary(view: &OrderSummaryView) -> Fragment {
    let mut fragment = Fragment::new();
    for line in &view.lines {
        fragment.push_node(cart_item_selector(&line.product_id), render_line(line));
    }
    fragment
}

fn render_line(line: &OrderLineView) -> String {
    let id = html_escape(line.product_id.as_str());
    let choices: String = line
        .choices
        .iter()
        .map(|choice| render_delivery_choice(&id, choice))
        .collect();

    format!(
        r#"<div class="cart-item-container js-cart-item-container-{id}">
    <div class="delivery-date">Delivery date: {date}</div>
    <div class="cart-item-details-grid">
        <img class="product-image" src="{image}">
        <div class="cart-item-details">
            <div class="product-name">{name}</div>
            <div class="product-price">{price}</div>
            <div class="product-quantity">
                <span>Quantity: <span class="quantity-label">{quantity}</span></span>
                <span class="update-quantity-link link-primary js-update-link" data-product-id="{id}">Update</span>
                <input class="quantity-input">
                <span class="save-quantity-link link-primary">Save</span>
                <span class="delete-quantity-link link-primary js-delete-link" data-product-id="{id}">Delete</span>
            </div>
        </div>
        <div class="delivery-options">
            <div class="delivery-options-title">Choose a delivery option:</div>
            {choices}
        </div>
    </div>
</div>"#,
        id = id,
        date = html_escape(&line.delivery_date),
        image = html_escape(&line.image),
        name = html_escape(&line.name),
        price = html_escape(&line.price_label),
        quantity = line.quantity,
        choices = choices,
    )
}

fn render_delivery_choice(product_id: &str, choice: &DeliveryChoiceView) -> String {
    format!(
        r#"<div class="delivery-option js-delivery-option" data-product-id="{id}" data-delivery-option-id="{option}">
    <input type="radio" {checked}class="delivery-option-input" name="delivery-option-{id}">
    <div>
        <div class="delivery-option-date">{date}</div>
        <div class="delivery-option-price">{price}</div>
    </div>
</div>"#,
        id = product_id,
        option = html_escape(choice.delivery_option_id.as_str()),
        checked = if choice.selected { "checked " } else { "" },
        date = html_escape(&choice.date_label),
        price = html_escape(&choice.price_label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shopfront_commerce::ids::ProductId;

    fn line(id: &str, name: &str) -> OrderLineView {
        OrderLineView {
            product_id: ProductId::new(id),
            name: name.to_string(),
            image: "images/products/socks.jpg".to_string(),
            price_label: "$10.90".to_string(),
            quantity: 2,
            delivery_date: "Friday, June 21".to_string(),
            choices: vec![
                DeliveryChoiceView {
                    delivery_option_id: "1".into(),
                    date_label: "Friday, June 21".to_string(),
                    price_label: "FREE".to_string(),
                    selected: true,
                },
                DeliveryChoiceView {
                    delivery_option_id: "2".into(),
                    date_label: "Monday, June 17".to_string(),
                    price_label: "$4.99".to_string(),
                    selected: false,
                },
            ],
        }
    }

    #[test]
    fn test_one_node_per_line() {
        let view = OrderSummaryView {
            lines: vec![line("p1", "Socks"), line("p2", "Ball")],
        };

        let fragment = render_order_summary(&view);
        assert_eq!(
            fragment.node_selectors().collect::<Vec<_>>(),
            vec![".js-cart-item-container-p1", ".js-cart-item-container-p2"]
        );
    }

    #[test]
    fn test_line_hooks() {
        let html = render_line(&line("p1", "Socks"));

        assert!(html.contains(r#"class="cart-item-container js-cart-item-container-p1""#));
        assert!(html.contains("Delivery date: Friday, June 21"));
        assert!(html.contains(r#"<span class="quantity-label">2</span>"#));
        assert!(html.contains(r#"js-update-link" data-product-id="p1""#));
        assert!(html.contains(r#"js-delete-link" data-product-id="p1""#));
        assert!(html.contains(r#"data-product-id="p1" data-delivery-option-id="2""#));
        assert_eq!(html.matches("js-delivery-option\"").count(), 2);
        assert_eq!(html.matches("checked ").count(), 1);
    }

    #[test]
    fn test_names_are_escaped() {
        let html = render_line(&line("p1", "<b>Socks</b>"));
        assert!(html.contains("&lt;b&gt;Socks&lt;/b&gt;"));
    }

    #[test]
    fn test_empty_cart_renders_nothing() {
        assert!(render_order_summary(&OrderSummaryView::default()).is_empty());
    }
}
