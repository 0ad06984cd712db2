pub const ALPHABET_SIZE: usize = 26;

const NO_LETTER: u8 = 0xff;

const fn letter_table() -> [u8; 256] {
    let mut map = [NO_LETTER; 256];
    let mut i = 0u8;
    while i < ALPHABET_SIZE as u8 {
        map[(b'a' + i) as usize] = i;
        map[(b'A' + i) as usize] = i;
        i += 1;
    }
    map
}

static LETTER_TABLE: [u8; 256] = letter_table();

/// Letter index of `byte` in `0..26`, folding case; `None` for every other
/// byte value.
#[inline]
pub fn classify(byte: u8) -> Option<u8> {
    match LETTER_TABLE[byte as usize] {
        NO_LETTER => None,
        index => Some(index),
    }
}

/// Lowercase letter for an index produced by `classify`.
#[inline]
pub fn letter_char(index: u8) -> u8 {
    debug_assert!((index as usize) < ALPHABET_SIZE);
    b'a' + index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_both_cases_to_the_same_index() {
        assert_eq!(classify(b'a'), Some(0));
        assert_eq!(classify(b'A'), Some(0));
        assert_eq!(classify(b'z'), Some(25));
        assert_eq!(classify(b'Z'), Some(25));
        for i in 0..ALPHABET_SIZE as u8 {
            assert_eq!(classify(b'a' + i), classify(b'A' + i));
        }
    }

    #[test]
    fn exactly_the_52_letter_bytes_classify() {
        let letters = (0..=255u8).filter(|&b| classify(b).is_some()).count();
        assert_eq!(letters, 2 * ALPHABET_SIZE);
        assert_eq!(classify(b'0'), None);
        assert_eq!(classify(b' '), None);
        assert_eq!(classify(b'@'), None); // one below 'A'
        assert_eq!(classify(b'['), None); // one past 'Z'
        assert_eq!(classify(b'`'), None); // one below 'a'
        assert_eq!(classify(b'{'), None); // one past 'z'
        assert_eq!(classify(0xff), None);
    }

    #[test]
    fn letter_char_round_trips() {
        for b in b'a'..=b'z' {
            assert_eq!(letter_char(classify(b).unwrap()), b);
        }
        for b in b'A'..=b'Z' {
            assert_eq!(letter_char(classify(b).unwrap()), b | 0x20);
        }
    }
}
