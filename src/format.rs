use rust_decimal::Decimal;

/// Format a rupee amount with Indian digit grouping, e.g. ₹12,34,567.
/// Paise are shown only when present, rounded to two places.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp(2).normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let abs = rounded.abs().to_string();

    let (rupees, paise) = match abs.split_once('.') {
        Some((r, p)) => (r, Some(p)),
        None => (abs.as_str(), None),
    };

    let sign = if negative { "-" } else { "" };
    match paise {
        Some(p) => format!("{}₹{}.{:0<2}", sign, group_indian(rupees), p),
        None => format!("{}₹{}", sign, group_indian(rupees)),
    }
}

/// Indian grouping: rightmost three digits, then groups of two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
