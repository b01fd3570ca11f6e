use crate::float::Float;

/// Trim leading and trailing near-silence from a frame before analysis,
/// removing the capture ramp at both edges so the correlation peak stays
/// sharp.
///
/// The window starts at the first sample of the first half whose magnitude
/// falls below `threshold` (0 when none does), and ends at the first such
/// sample found scanning the second half from the tail inward (`len - 1`
/// when none does, end exclusive). Returns a view into `signal`, never a
/// copy.
pub fn trim<T>(signal: &[T], threshold: T) -> &[T]
where
    T: Float,
{
    if signal.len() < 2 {
        return signal;
    }
    let half = signal.len() / 2;

    let start = signal[..half]
        .iter()
        .position(|s| s.abs() < threshold)
        .unwrap_or(0);

    let mut end = signal.len() - 1;
    for i in 1..half {
        if signal[signal.len() - i].abs() < threshold {
            end = signal.len() - i;
            break;
        }
    }

    &signal[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_ramp_at_both_edges() {
        let signal: Vec<f64> = vec![0.9, 0.8, 0.1, 0.7, 0.6, 0.5, 0.05, 0.4];
        // First sub-threshold sample in the first half is index 2; scanning
        // tail-in, the first in the second half is index 6.
        assert_eq!(trim(&signal, 0.2), &signal[2..6]);
    }

    #[test]
    fn loud_frame_keeps_everything_but_the_last_sample() {
        let signal: Vec<f64> = vec![0.9; 16];
        assert_eq!(trim(&signal, 0.2), &signal[0..15]);
    }

    #[test]
    fn tiny_frames_are_returned_untrimmed() {
        let signal: Vec<f64> = vec![0.5];
        assert_eq!(trim(&signal, 0.2), &signal[..]);
        let empty: Vec<f64> = vec![];
        assert!(trim(&empty, 0.2).is_empty());
    }

    #[test]
    fn trimmed_view_is_never_empty_for_real_frames() {
        // Start always lies in the first half and end past it.
        let signal: Vec<f64> = vec![0.0; 64];
        assert!(!trim(&signal, 0.2).is_empty());
    }
}
