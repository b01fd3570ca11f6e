//! Per-frame orchestration: gate → window → detect → map. The [Tuner] owns
//! a detector and a [NoteMapper] and is otherwise stateless; the host drives
//! it with one frame per animation tick or capture callback.

use crate::detector::autocorrelation::AutocorrelationDetector;
use crate::detector::PitchDetector;
use crate::float::Float;
use crate::tuning::{note_label, NoteMapper};

/// One analyzed frame: the detected pitch and where it sits on the scale.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Reading<T>
where
    T: Float,
{
    /// Detected fundamental, in Hz.
    pub frequency: T,
    /// Nearest note index (MIDI numbering with the default mapper).
    pub note: i32,
    /// Signed offset from the nearest note, in cents.
    pub detune: i32,
}

impl<T> Reading<T>
where
    T: Float,
{
    /// Pitch-class plus octave of the nearest note, e.g. "A4".
    pub fn note_label(&self) -> String {
        note_label(self.note)
    }

    /// Whether the detune magnitude is within `tolerance` cents.
    pub fn is_in_tune(&self, tolerance: i32) -> bool {
        self.detune.abs() <= tolerance
    }
}

/// Ties a pitch detector to a note mapper.
pub struct Tuner<T>
where
    T: Float,
{
    detector: Box<dyn PitchDetector<T>>,
    mapper: NoteMapper<T>,
}

impl<T> Tuner<T>
where
    T: Float,
{
    pub fn new(detector: Box<dyn PitchDetector<T>>, mapper: NoteMapper<T>) -> Self {
        Tuner { detector, mapper }
    }

    /// Analyze one frame. `None` means the frame carried no reliable pitch;
    /// a reading is only ever produced from a positive detected frequency.
    pub fn analyze(&mut self, signal: &[T], sample_rate: usize) -> Option<Reading<T>> {
        let frequency = self.detector.get_pitch(signal, sample_rate)?;
        let note = self.mapper.note_of(frequency);
        let detune = self.mapper.detune_cents(frequency, note);
        Some(Reading {
            frequency,
            note,
            detune,
        })
    }

    pub fn chamber_pitch(&self) -> T {
        self.mapper.chamber_pitch()
    }

    /// See [NoteMapper::set_chamber_pitch]: invalid values are ignored and
    /// the pitch in effect is returned.
    pub fn set_chamber_pitch(&mut self, pitch: T) -> T {
        self.mapper.set_chamber_pitch(pitch)
    }
}

impl<T> Default for Tuner<T>
where
    T: Float + std::iter::Sum + 'static,
{
    /// An ACF2+ detector with stock thresholds, anchored at A4 = 440 Hz.
    fn default() -> Self {
        Tuner::new(
            Box::new(AutocorrelationDetector::default()),
            NoteMapper::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::A4;

    struct FixedDetector(f64);

    impl PitchDetector<f64> for FixedDetector {
        fn get_pitch(&mut self, _signal: &[f64], _sample_rate: usize) -> Option<f64> {
            Some(self.0)
        }
    }

    struct NoPitchDetector;

    impl PitchDetector<f64> for NoPitchDetector {
        fn get_pitch(&mut self, _signal: &[f64], _sample_rate: usize) -> Option<f64> {
            None
        }
    }

    #[test]
    fn maps_detected_pitch_onto_the_scale() {
        let mut tuner = Tuner::new(Box::new(FixedDetector(445.0)), NoteMapper::default());
        let reading = tuner.analyze(&[0.0; 16], 44100).unwrap();
        assert_eq!(reading.note, A4);
        assert_eq!(reading.note_label(), "A4");
        assert!(reading.detune > 0);
        assert!(reading.is_in_tune(30));
        assert!(!reading.is_in_tune(5));
    }

    #[test]
    fn no_pitch_means_no_reading() {
        let mut tuner = Tuner::new(Box::new(NoPitchDetector), NoteMapper::default());
        assert_eq!(tuner.analyze(&[0.0; 16], 44100), None);
    }

    #[test]
    fn chamber_pitch_passes_through_to_the_mapper() {
        let mut tuner = Tuner::<f64>::default();
        assert_eq!(tuner.chamber_pitch(), 440.0);
        assert_eq!(tuner.set_chamber_pitch(432.0), 432.0);
        assert_eq!(tuner.set_chamber_pitch(f64::NAN), 432.0);
    }
}
