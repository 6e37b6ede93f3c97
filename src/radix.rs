use crate::{Error, Result};

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Formats `value` in the given radix using lowercase digits.
///
/// Returns [`Error::InvalidRadix`] unless `radix` is in `2..=36`.
pub(crate) fn encode_radix(mut value: u64, radix: u32) -> Result<String> {
    if !(2..=36).contains(&radix) {
        return Err(Error::InvalidRadix { radix });
    }

    // 64 binary digits is the worst case for a u64.
    let mut digits = [0u8; 64];
    let mut len = 0;
    let radix = radix as u64;
    loop {
        // The remainder is strictly below 36, so the index is in-bounds.
        digits[len] = ALPHABET[(value % radix) as usize];
        len += 1;
        value /= radix;
        if value == 0 {
            break;
        }
    }

    let mut out = String::with_capacity(len);
    for &d in digits[..len].iter().rev() {
        out.push(d as char);
    }
    Ok(out)
}

/// Parses a u64 from `s` in the given radix.
///
/// Accepts whatever [`u64::from_str_radix`] accepts, which includes the
/// uppercase forms of the digits emitted by [`encode_radix`].
pub(crate) fn decode_radix(s: &str, radix: u32) -> Result<u64> {
    // `u64::from_str_radix` panics on an out-of-range radix, so reject it
    // first.
    if !(2..=36).contains(&radix) {
        return Err(Error::InvalidRadix { radix });
    }
    Ok(u64::from_str_radix(s, radix)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(value: u64, radix: u32) {
        let s = encode_radix(value, radix).unwrap();
        let parsed = decode_radix(&s, radix).unwrap();
        assert_eq!(value, parsed, "roundtrip: value={value}, radix={radix}, s={s}");
    }

    #[test]
    fn encode_matches_std_formatting() {
        for value in [0, 1, 42, 0xdead_beef, u64::MAX] {
            assert_eq!(encode_radix(value, 10).unwrap(), format!("{value}"));
            assert_eq!(encode_radix(value, 16).unwrap(), format!("{value:x}"));
            assert_eq!(encode_radix(value, 8).unwrap(), format!("{value:o}"));
            assert_eq!(encode_radix(value, 2).unwrap(), format!("{value:b}"));
        }
    }

    #[test]
    fn roundtrips_across_radixes() {
        for radix in 2..=36 {
            roundtrip(0, radix);
            roundtrip(1, radix);
            roundtrip(4095, radix);
            roundtrip(175_928_847_299_117_063, radix);
            roundtrip(u64::MAX, radix);
        }
    }

    #[test]
    fn rejects_out_of_range_radix() {
        assert_eq!(encode_radix(1, 1), Err(Error::InvalidRadix { radix: 1 }));
        assert_eq!(encode_radix(1, 37), Err(Error::InvalidRadix { radix: 37 }));
        assert_eq!(decode_radix("1", 0), Err(Error::InvalidRadix { radix: 0 }));
        assert_eq!(decode_radix("1", 37), Err(Error::InvalidRadix { radix: 37 }));
    }

    #[test]
    fn rejects_invalid_digits() {
        assert!(matches!(decode_radix("12g", 16), Err(Error::ParseInt(_))));
        assert!(matches!(decode_radix("", 10), Err(Error::ParseInt(_))));
        assert!(matches!(decode_radix("-1", 10), Err(Error::ParseInt(_))));
    }
}
