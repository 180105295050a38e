use num_traits::Float;
use rand::distr::StandardUniform;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6,
    5, 4, 3, 2, 1,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// Generate `n` random numbers using provided generator
pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: rand::distr::Distribution<T>,
{
    std::iter::repeat_with(|| rng.random::<T>())
        .take(n)
        .collect()
}

/// Generate a strictly increasing, unevenly spaced knot sequence by
/// perturbing an evenly spaced one.
pub fn jittered_linspace<T>(rng: &mut StdRng, start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
    StandardUniform: rand::distr::Distribution<T>,
{
    let half = T::from(0.5).unwrap();
    let shrink = T::from(0.4).unwrap();
    let mut xs = crate::utils::linspace(start, stop, n);
    let dx = xs[1] - xs[0];
    for x in xs.iter_mut() {
        // Jitter by at most 0.2 dx in either direction so order is kept
        *x = *x + (rng.random::<T>() - half) * shrink * dx;
    }
    (0..n - 1).for_each(|i| assert!(xs[i + 1] > xs[i]));
    xs
}
