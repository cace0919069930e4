use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strength {
    VeryWeak,
    Weak,
    Strong,
    VeryStrong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntropyEstimate {
    pub bits: u32,
    pub label: Strength,
}

// Idealized model: uniform independent draws over the whole alphabet. It
// does not account for dictionary patterns or guessing strategies, and the
// per-class seeding still draws uniformly within each pool, so the bound
// holds in expectation.
pub fn estimate(length: usize, alphabet_size: usize) -> EntropyEstimate {
    let size = alphabet_size.max(1) as f64;
    let bits = (length as f64 * size.log2()).round() as u32;

    EntropyEstimate {
        bits,
        label: label_for(bits),
    }
}

fn label_for(bits: u32) -> Strength {
    if bits < 28 {
        Strength::VeryWeak
    } else if bits < 45 {
        Strength::Weak
    } else if bits < 60 {
        Strength::Strong
    } else {
        Strength::VeryStrong
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_lowercase_characters_are_very_strong() {
        let estimate = estimate(16, 26);

        assert_eq!(estimate.bits, 75);
        assert_eq!(estimate.label, Strength::VeryStrong);
    }

    #[test]
    fn six_digits_are_very_weak() {
        let estimate = estimate(6, 10);

        assert_eq!(estimate.bits, 20);
        assert_eq!(estimate.label, Strength::VeryWeak);
    }

    #[test]
    fn empty_alphabet_counts_as_zero_bits() {
        let estimate = estimate(16, 0);

        assert_eq!(estimate.bits, 0);
        assert_eq!(estimate.label, Strength::VeryWeak);
    }

    #[test]
    fn labels_change_at_the_documented_boundaries() {
        assert_eq!(label_for(27), Strength::VeryWeak);
        assert_eq!(label_for(28), Strength::Weak);
        assert_eq!(label_for(44), Strength::Weak);
        assert_eq!(label_for(45), Strength::Strong);
        assert_eq!(label_for(59), Strength::Strong);
        assert_eq!(label_for(60), Strength::VeryStrong);
    }
}
