use crate::float::Float;

pub mod amdf;
pub mod autocorrelation;
pub mod internals;

pub trait PitchDetector<T>
where
    T: Float,
{
    /// Estimate the fundamental frequency of `signal`, in Hz.
    ///
    /// Returns `None` when the frame does not carry a reliable pitch:
    /// too little energy, aperiodic content, or a degenerate correlation.
    /// Callers therefore never see NaN or out-of-band frequencies.
    fn get_pitch(&mut self, signal: &[T], sample_rate: usize) -> Option<T>;
}
