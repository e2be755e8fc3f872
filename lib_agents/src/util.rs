use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

/// A fresh rng seeded from system entropy.
pub fn get_rng() -> XorShiftRng {
    XorShiftRng::from_entropy()
}

/// An rng whose sequence is fully determined by `seed`.
pub fn seeded_rng(seed: u64) -> XorShiftRng {
    XorShiftRng::seed_from_u64(seed)
}

pub fn random_pick<'a, T, R>(choices: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    choices.choose(rng)
}

pub fn random_choice<T, R>(choices: &[T], rng: &mut R) -> Option<T>
where
    T: Copy,
    R: Rng + ?Sized,
{
    random_pick(choices, rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_choice_on_empty_slice_is_none() {
        let empty: [u8; 0] = [];
        assert_eq!(None, random_choice(&empty, &mut seeded_rng(1)));
    }

    #[test]
    fn same_seed_same_choices() {
        let choices = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        let mut a = seeded_rng(42);
        let mut b = seeded_rng(42);

        for _ in 0..20 {
            assert_eq!(
                random_choice(&choices, &mut a),
                random_choice(&choices, &mut b)
            );
        }
    }
}
