/// Renders money amounts for breakdown text and rate cards.
pub trait AmountFormatter {
    fn format(&self, amount: f64) -> String;
}

/// Plain number, as computed: `2360`, `12.5`
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl AmountFormatter for Passthrough {
    fn format(&self, amount: f64) -> String {
        amount.to_string()
    }
}

/// Indian Rupees without paise, Indian digit grouping: `₹1,23,456`
#[derive(Debug, Clone, Copy, Default)]
pub struct Inr;

impl AmountFormatter for Inr {
    fn format(&self, amount: f64) -> String {
        let rounded = amount.round();
        let sign = if rounded < 0.0 { "-" } else { "" };
        let digits = format!("{:.0}", rounded.abs());

        format!("{}₹{}", sign, group_indian(&digits))
    }
}

// Last three digits form one group, every group before that has two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();

    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_drops_trailing_zero_fraction() {
        assert_eq!(Passthrough.format(2360.0), "2360");
        assert_eq!(Passthrough.format(12.5), "12.5");
    }

    #[test]
    fn inr_uses_indian_grouping() {
        assert_eq!(Inr.format(0.0), "₹0");
        assert_eq!(Inr.format(950.0), "₹950");
        assert_eq!(Inr.format(1800.0), "₹1,800");
        assert_eq!(Inr.format(123456.0), "₹1,23,456");
        assert_eq!(Inr.format(12345678.0), "₹1,23,45,678");
    }

    #[test]
    fn inr_rounds_to_whole_rupees() {
        assert_eq!(Inr.format(1149.5), "₹1,150");
        assert_eq!(Inr.format(99.4), "₹99");
    }
}
