use crate::float::Float;

/// Compute the root-mean-square level of `signal`.
pub fn rms<T>(signal: &[T]) -> T
where
    T: Float + std::iter::Sum,
{
    if signal.is_empty() {
        return T::zero();
    }
    let mean_square =
        signal.iter().map(|&s| s * s).sum::<T>() / T::from_usize(signal.len()).unwrap();
    mean_square.sqrt()
}

/// A frame carries enough energy to analyze when its RMS reaches
/// `min_signal`. An all-zero frame is silence, not an error.
pub fn has_enough_signal<T>(signal: &[T], min_signal: T) -> bool
where
    T: Float + std::iter::Sum,
{
    rms(signal) >= min_signal
}
