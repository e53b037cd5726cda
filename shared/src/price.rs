//! Price text parsing and formatting
//!
//! 价格在目录中以本地化文本存储（如 "1,500"），不是数字。
//! 解析时仅剥离千分位逗号，其余字符原样交给 [`Decimal`] 解析；
//! 无法解析的价格返回错误而不是静默按 0 计算。

use rust_decimal::Decimal;

/// Price text that failed to parse as a decimal number
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price text: {raw:?}")]
pub struct InvalidPrice {
    /// The offending price string, verbatim
    pub raw: String,
}

/// Parse locale-formatted price text ("1,500" -> 1500)
///
/// Strips thousands-separator commas only. Any other punctuation (or a
/// negative sign) makes the text invalid.
pub fn parse_price(raw: &str) -> Result<Decimal, InvalidPrice> {
    let stripped = raw.trim().replace(',', "");
    let value: Decimal = stripped.parse().map_err(|_| InvalidPrice {
        raw: raw.to_string(),
    })?;
    if value.is_sign_negative() {
        return Err(InvalidPrice {
            raw: raw.to_string(),
        });
    }
    Ok(value)
}

/// Format a decimal with en-US style thousands grouping ("5000" -> "5,000")
pub fn format_grouped(value: Decimal) -> String {
    let text = value.normalize().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    match frac_part {
        Some(f) => format!("{}.{}", grouped, f),
        None => grouped,
    }
}
