use contracts::shared::indicators::ValueFormat;

/// Format a numeric value for display according to its `ValueFormat`.
pub fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } => {
            let abs = val.abs();
            let formatted = if abs >= 1_000_000.0 {
                format!("{:.1}M", val / 1_000_000.0)
            } else if abs >= 1_000.0 {
                let int_part = val as i64;
                let frac = ((val.abs() - (int_part.abs() as f64)) * 100.0).round() as i64;
                let s = format_thousands(int_part);
                if frac == 0 {
                    s
                } else {
                    format!("{}.{:02}", s, frac)
                }
            } else {
                format!("{:.2}", val)
            };
            format!("{} {}", formatted, currency)
        }
        ValueFormat::Number { decimals } => {
            format!("{:.prec$}", val, prec = *decimals as usize)
        }
        ValueFormat::Percent { decimals } => {
            format!("{:.prec$}%", val, prec = *decimals as usize)
        }
        ValueFormat::Integer => format_thousands(val as i64),
    }
}

/// Group an integer with thin spaces: 1234567 -> "1 234 567".
pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Money cell shorthand used by the list tables.
pub fn format_money(val: f64) -> String {
    format_value(
        val,
        &ValueFormat::Money {
            currency: "USD".to_string(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_234_567), "1\u{00a0}234\u{00a0}567");
        assert_eq!(format_thousands(-4_200), "-4\u{00a0}200");
    }

    #[test]
    fn test_format_value_money() {
        let usd = ValueFormat::Money { currency: "USD".into() };
        assert_eq!(format_value(52.5, &usd), "52.50 USD");
        assert_eq!(format_value(1_250.0, &usd), "1\u{00a0}250 USD");
        assert_eq!(format_value(2_500_000.0, &usd), "2.5M USD");
    }

    #[test]
    fn test_format_value_percent_and_integer() {
        assert_eq!(format_value(7.25, &ValueFormat::Percent { decimals: 1 }), "7.2%");
        assert_eq!(format_value(42.9, &ValueFormat::Integer), "42");
    }
}
