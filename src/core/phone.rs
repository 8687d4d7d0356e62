/// Canonicalize a US phone number to `+1 (NNN) NNN-NNNN`.
///
/// Only the digits are considered. Ten digits, or eleven with a leading `1`
/// country code, are reformatted; anything else is returned unchanged.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    let national = match digits.len() {
        10 => digits.as_str(),
        11 if digits.starts_with('1') => &digits[1..],
        _ => return raw.to_string(),
    };

    format!(
        "+1 ({}) {}-{}",
        &national[..3],
        &national[3..6],
        &national[6..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_digits() {
        assert_eq!(normalize_phone("5551234567"), "+1 (555) 123-4567");
    }

    #[test]
    fn test_punctuated_input() {
        assert_eq!(normalize_phone("(555) 123-4567"), "+1 (555) 123-4567");
        assert_eq!(normalize_phone("555.123.4567"), "+1 (555) 123-4567");
    }

    #[test]
    fn test_country_code() {
        assert_eq!(normalize_phone("1-555-123-4567"), "+1 (555) 123-4567");
        assert_eq!(normalize_phone("+1 (555) 123-4567"), "+1 (555) 123-4567");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(normalize_phone("notaphone"), "notaphone");
        assert_eq!(normalize_phone("25551234567"), "25551234567");
        assert_eq!(normalize_phone("555-1234"), "555-1234");
        assert_eq!(normalize_phone(""), "");
    }
}
