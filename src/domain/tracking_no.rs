use rand::Rng;

pub const TRACKING_PREFIX: &str = "TRK";

const SUFFIX_LEN: usize = 4;
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Produce a candidate tracking number: "TRK" plus four characters drawn
/// uniformly from [A-Z0-9]. Ambiguous characters (0/O, 1/I) are part of the
/// alphabet on purpose.
///
/// Uniqueness is NOT checked here. Callers insert and regenerate on a
/// duplicate-key conflict, up to a bounded retry budget.
pub fn generate_tracking_number() -> String {
    let mut rng = rand::thread_rng();
    let mut out = String::with_capacity(TRACKING_PREFIX.len() + SUFFIX_LEN);
    out.push_str(TRACKING_PREFIX);

    for _ in 0..SUFFIX_LEN {
        let idx = rng.gen_range(0..ALPHABET.len());
        out.push(ALPHABET[idx] as char);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{generate_tracking_number, ALPHABET, TRACKING_PREFIX};

    #[test]
    fn output_is_always_seven_characters() {
        for _ in 0..200 {
            assert_eq!(generate_tracking_number().len(), 7);
        }
    }

    #[test]
    fn output_starts_with_prefix() {
        for _ in 0..200 {
            assert!(generate_tracking_number().starts_with(TRACKING_PREFIX));
        }
    }

    #[test]
    fn suffix_is_drawn_from_uppercase_alphanumerics() {
        for _ in 0..200 {
            let number = generate_tracking_number();
            for ch in number[TRACKING_PREFIX.len()..].bytes() {
                assert!(ALPHABET.contains(&ch), "unexpected character {}", ch as char);
            }
        }
    }
}
