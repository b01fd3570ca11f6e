//! # Tuner Engine
//! *tuner_engine* estimates the fundamental frequency of a sound wave stored
//! in a buffer and maps it onto the equal-tempered scale: nearest note plus a
//! detune offset in cents. All analysis is done in the time domain, one frame
//! at a time; audio capture and rendering belong to the host.
//!
//! # Detectors
//! A *detector* is an implementation of a pitch detection algorithm. Each
//! detector's tolerance for noise and low frequencies varies.
//!
//!   * [AutocorrelationDetector][detector::autocorrelation] (ACF2+)
//!   * [AmdfDetector][detector::amdf]
//!
//! # Examples
//! ```
//! use tuner_engine::detector::autocorrelation::AutocorrelationDetector;
//! use tuner_engine::detector::PitchDetector;
//! use tuner_engine::tuning::{note_label, NoteMapper};
//!
//! const SAMPLE_RATE: usize = 44100;
//! const SIZE: usize = 2048;
//!
//! // Signal coming from some source (microphone, generated, etc...)
//! let dt = 1.0 / SAMPLE_RATE as f64;
//! let freq = 440.0;
//! let signal: Vec<f64> = (0..SIZE)
//!     .map(|x| (2.0 * std::f64::consts::PI * x as f64 * dt * freq).sin())
//!     .collect();
//!
//! let mut detector = AutocorrelationDetector::default();
//! let pitch = detector.get_pitch(&signal, SAMPLE_RATE).unwrap();
//!
//! let mapper = NoteMapper::default();
//! let note = mapper.note_of(pitch);
//! let detune = mapper.detune_cents(pitch, note);
//!
//! println!("{}: {} cents off {}", pitch, detune, note_label(note));
//! ```

pub use detector::PitchDetector;
pub use tuner::{Reading, Tuner};
pub use tuning::NoteMapper;

pub mod detector;
pub mod error;
pub mod float;
pub mod tuner;
pub mod tuning;
pub mod utils;
