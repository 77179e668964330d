use soroban_sdk::String;

use crate::errors::Error;
use crate::types::MAX_URI_LEN;

/// Decimal digits in `u32::MAX`.
const MAX_ID_DIGITS: usize = 10;

pub fn validate_uri(uri: &String) -> Result<(), Error> {
    if uri.len() > MAX_URI_LEN {
        return Err(Error::InvalidUri);
    }
    Ok(())
}

/// Writes `value` in decimal at the end of `digits`, returning the start index.
fn write_decimal(digits: &mut [u8; MAX_ID_DIGITS], value: u32) -> usize {
    let mut n = value;
    let mut start = MAX_ID_DIGITS;
    loop {
        start -= 1;
        digits[start] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            return start;
        }
    }
}

/// `base_uri` followed by the decimal token id. Any base length composes.
pub fn compose_token_uri(base_uri: &String, token_id: u32) -> String {
    let mut digits = [0u8; MAX_ID_DIGITS];
    let start = write_decimal(&mut digits, token_id);

    let mut uri = base_uri.to_bytes();
    uri.extend_from_slice(&digits[start..]);
    uri.to_string()
}
