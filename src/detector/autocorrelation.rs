use crate::detector::internals::{autocorrelation_series, best_lag, refine_lag};
use crate::detector::PitchDetector;
use crate::float::Float;
use crate::utils::signal::has_enough_signal;
use crate::utils::window::trim;

/// ACF2+ pitch detector: direct autocorrelation with parabolic peak
/// refinement.
///
/// Per frame: gate on RMS, trim the near-silent ramp at both edges,
/// correlate, pick the strongest peak past the initial descent and convert
/// the (possibly refined) period into a frequency.
pub struct AutocorrelationDetector<T>
where
    T: Float,
{
    min_signal: T,
    window_threshold: T,
}

impl<T> AutocorrelationDetector<T>
where
    T: Float,
{
    /// `min_signal` is the RMS level below which a frame counts as silence.
    /// `window_threshold` is the absolute amplitude under which leading and
    /// trailing samples are trimmed away before correlating.
    pub fn new(min_signal: T, window_threshold: T) -> Self {
        AutocorrelationDetector {
            min_signal,
            window_threshold,
        }
    }
}

impl<T> Default for AutocorrelationDetector<T>
where
    T: Float,
{
    fn default() -> Self {
        AutocorrelationDetector::new(
            T::from_f64(0.01).unwrap(),
            T::from_f64(0.2).unwrap(),
        )
    }
}

impl<T> PitchDetector<T> for AutocorrelationDetector<T>
where
    T: Float + std::iter::Sum,
{
    fn get_pitch(&mut self, signal: &[T], sample_rate: usize) -> Option<T> {
        if !has_enough_signal(signal, self.min_signal) {
            return None;
        }

        let trimmed = trim(signal, self.window_threshold);
        if trimmed.len() < 2 {
            return None;
        }

        let series = autocorrelation_series(trimmed);
        let peak = best_lag(&series)?;
        let period = refine_lag(&series, peak);
        if !period.is_finite() || period <= T::zero() {
            return None;
        }

        Some(T::from_usize(sample_rate).unwrap() / period)
    }
}
