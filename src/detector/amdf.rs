use crate::detector::PitchDetector;
use crate::error::ConfigError;
use crate::float::Float;

/// Tunables for the [AmdfDetector].
#[derive(Debug, Clone, Copy)]
pub struct AmdfConfig<T>
where
    T: Float,
{
    /// Lowest detectable frequency, in Hz. Bounds the longest lag searched.
    pub min_frequency: T,
    /// Highest detectable frequency, in Hz. Bounds the shortest lag searched.
    pub max_frequency: T,
    /// Peak-confidence multiplier: the chosen minimum, scaled by `ratio`,
    /// must stay below the worst lag of the frame or the match is rejected.
    pub ratio: T,
    /// Fraction of the difference range, above the best lag, that a
    /// candidate may sit at and still be considered. Lower is stricter.
    pub sensitivity: T,
}

impl<T> Default for AmdfConfig<T>
where
    T: Float,
{
    fn default() -> Self {
        AmdfConfig {
            min_frequency: T::from_usize(82).unwrap(),
            max_frequency: T::from_usize(1000).unwrap(),
            ratio: T::from_usize(5).unwrap(),
            sensitivity: T::from_f64(0.1).unwrap(),
        }
    }
}

/// Average-magnitude-difference pitch detector.
///
/// Sums |x(j) - x(j+lag)| over a bounded lag range; a periodic signal dips
/// toward zero at lags matching its period. Cheaper than correlation for
/// narrow frequency ranges and more robust on clean low-frequency input.
pub struct AmdfDetector<T>
where
    T: Float,
{
    config: AmdfConfig<T>,
}

impl<T> AmdfDetector<T>
where
    T: Float,
{
    /// Build a detector from `config`, rejecting inconsistent settings.
    pub fn new(config: AmdfConfig<T>) -> Result<Self, ConfigError> {
        if !(config.min_frequency > T::zero() && config.min_frequency < config.max_frequency) {
            return Err(ConfigError::FrequencyRange);
        }
        if config.ratio <= T::zero() {
            return Err(ConfigError::Ratio);
        }
        if !(config.sensitivity > T::zero() && config.sensitivity <= T::one()) {
            return Err(ConfigError::Sensitivity);
        }
        Ok(AmdfDetector { config })
    }

    pub fn config(&self) -> &AmdfConfig<T> {
        &self.config
    }
}

impl<T> Default for AmdfDetector<T>
where
    T: Float,
{
    fn default() -> Self {
        AmdfDetector {
            config: AmdfConfig::default(),
        }
    }
}

impl<T> PitchDetector<T> for AmdfDetector<T>
where
    T: Float,
{
    fn get_pitch(&mut self, signal: &[T], sample_rate: usize) -> Option<T> {
        let sample_rate = T::from_usize(sample_rate).unwrap();

        // Period bounds are rounded outward so the exact boundary
        // frequencies remain reachable.
        let max_period = (sample_rate / self.config.min_frequency).ceil().to_usize()?;
        let min_period = (sample_rate / self.config.max_frequency).floor().to_usize()?;
        let min_period = min_period.max(1);
        let max_period = max_period.min(signal.len().saturating_sub(1));
        if min_period > max_period {
            return None;
        }

        let mut amd = vec![T::zero(); max_period + 1];
        for (lag, value) in amd.iter_mut().enumerate().skip(min_period) {
            let mut sum = T::zero();
            for j in 0..signal.len() - lag {
                sum = sum + (signal[j] - signal[j + lag]).abs();
            }
            *value = sum;
        }

        let mut min_val = T::infinity();
        let mut max_val = T::neg_infinity();
        for &value in &amd[min_period..=max_period] {
            if value < min_val {
                min_val = value;
            }
            if value > max_val {
                max_val = value;
            }
        }

        // Walk up to the first lag dipping under the cutoff, then search its
        // neighborhood for the actual trough: the scan lands on the crossing,
        // not the minimum.
        let cutoff = (self.config.sensitivity * (max_val - min_val) + min_val).round();
        let mut crossing = min_period;
        while crossing <= max_period && amd[crossing] > cutoff {
            crossing += 1;
        }
        if crossing > max_period {
            return None;
        }

        let search_start = crossing.saturating_sub(1).max(min_period);
        let search_end = (search_start + min_period / 2).min(max_period);
        let mut min_pos = crossing;
        for lag in search_start..=search_end {
            if amd[lag] < amd[min_pos] {
                min_pos = lag;
            }
        }

        if (amd[min_pos] * self.config.ratio).round() < max_val {
            Some(sample_rate / T::from_usize(min_pos).unwrap())
        } else {
            None
        }
    }
}
