/// Checks that a candidate string has the shape of a dotted-quad IPv4
/// address: four dot-separated decimal groups of at most 3 digits, each no
/// greater than 255, with nothing before the first group or after the last.
///
/// This is a syntactic gate applied to user input before it is handed to an
/// external command, not a full address-semantics check. Leading zeros are
/// accepted.
pub fn is_valid_ipv4(candidate: &str) -> bool {
    if candidate.len() < 7 || candidate.len() > 15 {
        return false;
    }

    let groups: Vec<&str> = candidate.split('.').collect();
    if groups.len() != 4 {
        return false;
    }

    groups.iter().all(|group| {
        !group.is_empty()
            && group.len() <= 3
            && group.bytes().all(|b| b.is_ascii_digit())
            && group.parse::<u16>().map(|n| n <= 255).unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_addresses() {
        assert!(is_valid_ipv4("192.168.1.1"));
        assert!(is_valid_ipv4("0.0.0.0"));
        assert!(is_valid_ipv4("255.255.255.255"));
        assert!(is_valid_ipv4("1.2.3.4"));
    }

    #[test]
    fn test_rejects_group_over_255() {
        assert!(!is_valid_ipv4("256.1.1.1"));
        assert!(!is_valid_ipv4("1.1.1.999"));
    }

    #[test]
    fn test_rejects_wrong_group_count() {
        assert!(!is_valid_ipv4("1.2.3"));
        assert!(!is_valid_ipv4("1.2.3.4.5"));
    }

    #[test]
    fn test_rejects_trailing_characters() {
        assert!(!is_valid_ipv4("1.2.3.4abc"));
        assert!(!is_valid_ipv4("10.0.0.1 "));
    }

    #[test]
    fn test_rejects_out_of_range_lengths() {
        // Shortest well-formed address is 7 characters, longest is 15.
        assert!(!is_valid_ipv4("1.1.1."));
        assert!(!is_valid_ipv4("1.1.1"));
        assert!(!is_valid_ipv4(""));
        assert!(!is_valid_ipv4("111.222.333.4445"));
    }

    #[test]
    fn test_rejects_empty_and_oversized_groups() {
        assert!(!is_valid_ipv4("1..2.3.4"));
        assert!(!is_valid_ipv4("1234.1.1.1"));
    }

    #[test]
    fn test_accepts_leading_zeros() {
        assert!(is_valid_ipv4("010.001.002.003"));
    }
}
