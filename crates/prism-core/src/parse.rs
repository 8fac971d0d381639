//! Parsing of `"a,b,c"` channel triples for boundary callers.

use crate::error::ColorError;

/// Parse three comma-separated unsigned integers, e.g. `"255,128,0"`.
///
/// Surrounding whitespace is ignored; anything else besides digits and the
/// two commas is rejected.
pub fn parse_triple(s: &str) -> Result<[u32; 3], ColorError> {
    let invalid = || ColorError::InvalidTriple(s.to_string());

    let mut out = [0u32; 3];
    let mut parts = s.trim().split(',');
    for slot in out.iter_mut() {
        let part = parts.next().ok_or_else(invalid)?;
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *slot = part.parse().map_err(|_| invalid())?;
    }

    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triple_accepts_plain_digits() {
        assert_eq!(parse_triple("255,128,0").unwrap(), [255, 128, 0]);
        assert_eq!(parse_triple(" 1,2,3\n").unwrap(), [1, 2, 3]);
    }

    #[test]
    fn test_parse_triple_rejects_malformed_input() {
        for bad in ["", "1,2", "1,2,3,4", "1,,3", "a,b,c", "-1,2,3", "1, 2,3", "1.5,2,3"] {
            assert!(
                matches!(parse_triple(bad), Err(ColorError::InvalidTriple(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_triple_rejects_overflow() {
        assert!(parse_triple("99999999999,0,0").is_err());
    }
}
