use super::*;

const ALICE: &str = "0x1234567890abcdef1234567890abcdef12345678";

#[test]
fn truncate_address_shortens_valid_address() {
    assert_eq!(truncate_address(ALICE), Ok("0x1234...5678".to_owned()));
}

#[test]
fn truncate_address_empty_is_empty_not_error() {
    assert_eq!(truncate_address(""), Ok(String::new()));
}

#[test]
fn truncate_address_short_input_is_length_error() {
    assert_eq!(truncate_address("0xabc"), Err(AddressError::InvalidAddressLength(5)));
}

#[test]
fn truncate_address_missing_prefix_is_format_error() {
    assert_eq!(truncate_address("1234..."), Err(AddressError::InvalidAddressFormat));
    // Prefix is checked before length.
    assert_eq!(
        truncate_address("1x1234567890abcdef1234567890abcdef12345678"),
        Err(AddressError::InvalidAddressFormat)
    );
}

#[test]
fn truncate_address_rejects_too_long() {
    let long = format!("{ALICE}9");
    assert_eq!(truncate_address(&long), Err(AddressError::InvalidAddressLength(43)));
}

#[test]
fn truncate_address_rejects_non_hex_body() {
    let bad = "0x1234567890abcdef1234567890abcdef1234567z";
    assert_eq!(truncate_address(bad), Err(AddressError::InvalidAddressCharacters));
}

#[test]
fn truncate_address_preserves_prefix_suffix_and_single_ellipsis() {
    let samples = [
        ALICE,
        "0x0000000000000000000000000000000000000000",
        "0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
        "0xAbCdEf0123456789aBcDeF0123456789AbCdEf01",
    ];
    for address in samples {
        let short = truncate_address(address).unwrap();
        assert!(short.starts_with(&address[..6]), "{short}");
        assert!(short.ends_with(&address[address.len() - 4..]), "{short}");
        assert_eq!(short.matches("...").count(), 1, "{short}");
    }
}

#[test]
fn truncate_address_with_custom_window() {
    assert_eq!(truncate_address_with(ALICE, 6, 2), Ok("0x123456...78".to_owned()));
    assert_eq!(truncate_address_with(ALICE, 0, 0), Ok("0x...".to_owned()));
}

#[test]
fn truncate_address_with_clamps_oversized_window() {
    let short = truncate_address_with(ALICE, 100, 100).unwrap();
    assert_eq!(short, format!("{ALICE}...{}", &ALICE[2..]));
}

#[test]
fn length_error_counts_characters_not_bytes() {
    assert_eq!(truncate_address("0xé"), Err(AddressError::InvalidAddressLength(3)));

    let wide = format!("0x{}", "é".repeat(40));
    assert_eq!(wide.chars().count(), 42);
    assert_eq!(truncate_address(&wide), Err(AddressError::InvalidAddressCharacters));
}

#[test]
fn validate_address_accepts_mixed_case_hex() {
    assert_eq!(validate_address("0xAbCdEf0123456789aBcDeF0123456789AbCdEf01"), Ok(()));
}

#[test]
fn address_error_messages_name_the_problem() {
    assert_eq!(
        AddressError::InvalidAddressLength(5).to_string(),
        "invalid address length: expected 42, got 5"
    );
    assert!(AddressError::InvalidAddressFormat.to_string().contains("0x"));
}
