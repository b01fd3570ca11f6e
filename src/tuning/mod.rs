//! Equal-temperament note mapping: note index ↔ frequency, detune in cents,
//! pitch-class names. The whole scale hangs off a single chamber pitch
//! assigned to one anchor note.

use crate::float::Float;

/// Pitch-class names, indexed by note index modulo 12.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// MIDI note number of A4, the default tuning anchor.
pub const A4: i32 = 69;

/// Number of cents in an octave.
const CENTS_PER_OCTAVE: i32 = 1200;

/// Maps frequencies onto the equal-tempered scale.
///
/// `chamber_pitch` (440 Hz by default) is the frequency assigned to the
/// `reference_note` anchor, which is fixed at construction. Changing the
/// chamber pitch rescales the entire mapping; nothing else is mutable.
pub struct NoteMapper<T>
where
    T: Float,
{
    chamber_pitch: T,
    reference_note: i32,
}

impl<T> NoteMapper<T>
where
    T: Float,
{
    pub fn new(chamber_pitch: T, reference_note: i32) -> Self {
        NoteMapper {
            chamber_pitch,
            reference_note,
        }
    }

    pub fn chamber_pitch(&self) -> T {
        self.chamber_pitch
    }

    pub fn reference_note(&self) -> i32 {
        self.reference_note
    }

    /// Re-anchor the scale at `pitch` Hz. Values that are not positive
    /// finite numbers are ignored and the previous pitch is kept. Returns
    /// the chamber pitch in effect afterwards either way.
    pub fn set_chamber_pitch(&mut self, pitch: T) -> T {
        if pitch.is_finite() && pitch > T::zero() {
            self.chamber_pitch = pitch;
        }
        self.chamber_pitch
    }

    /// Exact frequency of `note` on the current scale, in Hz.
    pub fn frequency_of(&self, note: i32) -> T {
        let twelve = T::from_usize(12).unwrap();
        let semitones = T::from_i32(note - self.reference_note).unwrap();
        self.chamber_pitch * (semitones / twelve).exp2()
    }

    /// Nearest note index for `frequency`.
    ///
    /// `frequency` must be positive; in particular a detector's "no pitch"
    /// outcome must be handled before mapping, not fed through.
    pub fn note_of(&self, frequency: T) -> i32 {
        debug_assert!(
            frequency > T::zero(),
            "note_of requires a positive frequency"
        );
        let twelve = T::from_usize(12).unwrap();
        let semitones = twelve * (frequency / self.chamber_pitch).log2();
        semitones.round().to_i32().unwrap() + self.reference_note
    }

    /// Signed distance between `frequency` and the exact frequency of
    /// `note`, in cents, rounded to nearest. 100 cents is one semitone.
    pub fn detune_cents(&self, frequency: T, note: i32) -> i32 {
        debug_assert!(
            frequency > T::zero(),
            "detune_cents requires a positive frequency"
        );
        let cents = T::from_i32(CENTS_PER_OCTAVE).unwrap()
            * (frequency / self.frequency_of(note)).log2();
        cents.round().to_i32().unwrap()
    }
}

impl<T> Default for NoteMapper<T>
where
    T: Float,
{
    fn default() -> Self {
        NoteMapper::new(T::from_usize(440).unwrap(), A4)
    }
}

/// Pitch-class name of `note`. Negative indices wrap the right way around:
/// note -1 is a B.
pub fn note_name(note: i32) -> &'static str {
    NOTE_NAMES[note.rem_euclid(12) as usize]
}

/// Pitch-class name plus octave, e.g. "A4". Octaves follow MIDI numbering
/// (note 60 is C4), so this is only meaningful for mappers anchored at
/// [A4] = 69.
pub fn note_label(note: i32) -> String {
    format!("{}{}", note_name(note), note.div_euclid(12) - 1)
}
