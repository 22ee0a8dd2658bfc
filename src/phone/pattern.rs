// Digit analytics shown in the report; input is the national number's digits.

pub fn masked(digits: &str) -> String {
    if digits.len() >= 6 {
        format!("{}***{}", &digits[..3], &digits[digits.len() - 3..])
    } else {
        digits.to_string()
    }
}

pub fn digit_sum(digits: &str) -> u32 {
    digits.chars().filter_map(|c| c.to_digit(10)).sum()
}
