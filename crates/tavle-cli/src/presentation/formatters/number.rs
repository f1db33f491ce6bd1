/// Format an amount as NOK with zero decimals: "kr 980 000".
pub fn format_nok(amount: f64) -> String {
    format!("kr {}", group_thousands(amount.round() as i64))
}

pub fn group_thousands(value: i64) -> String {
    let negative = value < 0;
    let digits = value.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
