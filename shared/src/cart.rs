//! Client-local shopping cart
//!
//! 购物车完全在客户端本地维护，不产生任何服务端订单记录。
//! "结账" 只是把购物车内容编排成 WhatsApp 文本消息和 deep link，
//! 由客户端打开；没有回执、没有确认、没有库存影响。
//!
//! # 状态机 (每条 cart line)
//!
//! ```text
//! absent --add--> quantity=1 --add/update--> quantity=k
//!        <--update(q<=0) / remove / clear--
//! ```
//!
//! 行按菜品名称合并：全目录范围内假设名称唯一，跨分类的重名
//! 菜品会合并到同一行（已知限制）。
//!
//! 客户端可以用 serde 把整个 [`Cart`] 镜像到浏览器本地存储；
//! 本 crate 不负责持久化。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::MenuItem;
use crate::price::{InvalidPrice, format_grouped, parse_price};

/// Currency suffix on every amount (Lebanese pound)
const CURRENCY: &str = "ل.ل";

/// One cart line: an item plus a desired quantity (always >= 1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: MenuItem,
    pub quantity: u32,
}

/// Cart operation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CartError {
    /// Checkout requires a non-empty, trimmed delivery address
    #[error("delivery address is required")]
    MissingAddress,
    /// Checkout of an empty cart composes nothing
    #[error("cart is empty")]
    EmptyCart,
    /// A line's price text failed to parse
    #[error(transparent)]
    InvalidPrice(#[from] InvalidPrice),
}

/// The composed order: human-readable message plus the outbound deep link
///
/// Dispatching the link is the client's job; once composition succeeds the
/// cart is already cleared, whether or not the link ever opens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderMessage {
    pub message: String,
    pub link: String,
    pub total: Decimal,
}

/// Client-local cart, keyed by item name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of `item`
    ///
    /// Merges by name: an existing line's quantity is incremented, otherwise
    /// a new line is appended with quantity 1.
    pub fn add(&mut self, item: MenuItem) {
        match self.lines.iter_mut().find(|l| l.item.name == item.name) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine { item, quantity: 1 }),
        }
    }

    /// Set the quantity of the line named `name`
    ///
    /// `quantity <= 0` removes the line. There is no upper bound; values
    /// beyond `u32::MAX` clamp rather than wrap, so the `quantity >= 1`
    /// invariant holds for every positive input. Unknown names are ignored.
    pub fn update_quantity(&mut self, name: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(name);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.name == name) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Remove the line named `name`, if present
    pub fn remove(&mut self, name: &str) {
        self.lines.retain(|l| l.item.name != name);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Σ(parsed price × quantity) over all lines
    pub fn total(&self) -> Result<Decimal, CartError> {
        let mut total = Decimal::ZERO;
        for line in &self.lines {
            total += parse_price(&line.item.price)? * Decimal::from(line.quantity);
        }
        Ok(total)
    }

    /// Compose the order message and clear the cart
    ///
    /// Rejects an empty or whitespace-only delivery address without touching
    /// the cart. On success the cart is cleared unconditionally; whether the
    /// returned link actually opens is outside this crate's control.
    pub fn checkout(&mut self, address: &str, phone: &str) -> Result<OrderMessage, CartError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(CartError::MissingAddress);
        }
        if self.lines.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let total = self.total()?;

        let details = self
            .lines
            .iter()
            .map(|line| {
                // total() already proved every price parses
                let unit = parse_price(&line.item.price).unwrap_or_default();
                let line_total = unit * Decimal::from(line.quantity);
                format!(
                    "• {} ({}x) - {}{CURRENCY} = {}{CURRENCY}",
                    line.item.name,
                    line.quantity,
                    line.item.price,
                    format_grouped(line_total),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let message = format!(
            "مرحبا، أريد طلب:\n\n{details}\n\nالعنوان: {address}\n\n*المجموع الكلي: {}{CURRENCY}*",
            format_grouped(total),
        );
        let link = format!(
            "https://api.whatsapp.com/send?phone={phone}&text={}",
            urlencoding::encode(&message),
        );

        tracing::debug!(total = %total, lines = self.lines.len(), "order message composed");
        self.clear();

        Ok(OrderMessage {
            message,
            link,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: &str) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            item_type: "قطعة".to_string(),
            price: price.to_string(),
            size: String::new(),
            description: String::new(),
            product_image: String::new(),
        }
    }

    #[test]
    fn add_same_name_twice_merges_into_one_line() {
        let mut cart = Cart::new();
        cart.add(item("كرواسان", "1,500"));
        cart.add(item("كرواسان", "1,500"));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn zero_or_negative_quantity_removes_the_line() {
        let mut cart = Cart::new();
        cart.add(item("خبز", "2,000"));
        cart.update_quantity("خبز", 0);
        assert!(cart.is_empty());

        cart.add(item("خبز", "2,000"));
        cart.update_quantity("خبز", -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn update_quantity_sets_exact_value() {
        let mut cart = Cart::new();
        cart.add(item("معمول", "3,250"));
        cart.update_quantity("معمول", 7);
        assert_eq!(cart.lines()[0].quantity, 7);
    }

    #[test]
    fn huge_quantity_clamps_instead_of_wrapping_to_zero() {
        let mut cart = Cart::new();
        cart.add(item("معمول", "3,250"));

        // 2^32 is a valid positive input; it must never leave a
        // quantity-0 line behind
        cart.update_quantity("معمول", 1 << 32);
        assert_eq!(cart.lines()[0].quantity, u32::MAX);

        cart.update_quantity("معمول", i64::MAX);
        assert_eq!(cart.lines()[0].quantity, u32::MAX);
    }

    #[test]
    fn add_at_max_quantity_saturates() {
        let mut cart = Cart::new();
        cart.add(item("معمول", "3,250"));
        cart.update_quantity("معمول", i64::MAX);
        cart.add(item("معمول", "3,250"));
        assert_eq!(cart.lines()[0].quantity, u32::MAX);
    }

    #[test]
    fn total_strips_thousands_separators() {
        let mut cart = Cart::new();
        cart.add(item("كرواسان", "1,500"));
        cart.update_quantity("كرواسان", 2);
        cart.add(item("كعكة", "2,000"));

        assert_eq!(cart.total().unwrap(), Decimal::from(5000));
    }

    #[test]
    fn total_reports_unparsable_price() {
        let mut cart = Cart::new();
        cart.add(item("غامض", "يُحدد لاحقا"));

        let err = cart.total().unwrap_err();
        assert!(matches!(err, CartError::InvalidPrice(_)));
    }

    #[test]
    fn checkout_rejects_blank_address_and_keeps_cart() {
        let mut cart = Cart::new();
        cart.add(item("كرواسان", "1,500"));

        assert_eq!(
            cart.checkout("", "96171942435").unwrap_err(),
            CartError::MissingAddress
        );
        assert_eq!(
            cart.checkout("   \t ", "96171942435").unwrap_err(),
            CartError::MissingAddress
        );
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn checkout_rejects_empty_cart() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.checkout("بيروت، الحمرا", "96171942435").unwrap_err(),
            CartError::EmptyCart
        );
    }

    #[test]
    fn checkout_composes_message_and_clears_cart() {
        let mut cart = Cart::new();
        cart.add(item("كرواسان", "1,500"));
        cart.update_quantity("كرواسان", 2);
        cart.add(item("كعكة", "2,000"));

        let order = cart.checkout(" بيروت، الحمرا ", "96171942435").unwrap();

        assert!(cart.is_empty());
        assert_eq!(order.total, Decimal::from(5000));
        assert!(order.message.contains("• كرواسان (2x) - 1,500ل.ل = 3,000ل.ل"));
        assert!(order.message.contains("• كعكة (1x) - 2,000ل.ل = 2,000ل.ل"));
        assert!(order.message.contains("العنوان: بيروت، الحمرا"));
        assert!(order.message.contains("*المجموع الكلي: 5,000ل.ل*"));
        assert!(
            order
                .link
                .starts_with("https://api.whatsapp.com/send?phone=96171942435&text=")
        );
        // The deep link carries the message URL-encoded, not raw
        assert!(!order.link.contains(' '));
    }

    #[test]
    fn cart_round_trips_through_serde() {
        let mut cart = Cart::new();
        cart.add(item("كرواسان", "1,500"));

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }
}
