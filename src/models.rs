//! Data models for quote statistics.
//!
//! Quote records come from the upstream extraction and genderization
//! steps and are only ever read here. `GenderStats` is the one record
//! this tool produces.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field carrying the speaker gender label on a quote record.
pub const SPEAKER_GENDER_FIELD: &str = "speaker_gender";

/// Gender label attached to a quote's speaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeakerGender {
    Female,
    Male,
    /// Genderization ran but could not resolve the speaker.
    Unknown,
    /// Anything else: missing field, null, non-string, or an unrecognized
    /// label such as an organisation.
    Other,
}

impl SpeakerGender {
    /// Classify a raw label. Matching is exact and case-sensitive.
    pub fn classify(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("female") => SpeakerGender::Female,
            Some("male") => SpeakerGender::Male,
            Some("unknown") => SpeakerGender::Unknown,
            _ => SpeakerGender::Other,
        }
    }
}

/// A single extracted quote, kept as the raw JSON object.
///
/// Decoding fails for array elements that are not JSON objects.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct QuoteRecord {
    fields: Map<String, Value>,
}

impl QuoteRecord {
    /// The speaker gender category of this quote.
    pub fn speaker_gender(&self) -> SpeakerGender {
        SpeakerGender::classify(self.fields.get(SPEAKER_GENDER_FIELD))
    }
}

/// Per-file speaker gender tally.
///
/// Invariant: `women_speakers + men_speakers + unknown_speakers <= num_quotes`.
/// Quotes with no recognized label count toward `num_quotes` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderStats {
    /// Total number of quotes processed.
    pub num_quotes: u64,
    /// Quotes whose speaker is labelled `female`.
    pub women_speakers: u64,
    /// Quotes whose speaker is labelled `male`.
    pub men_speakers: u64,
    /// Quotes whose speaker is labelled `unknown`.
    pub unknown_speakers: u64,
}

impl GenderStats {
    /// Count one quote with the given speaker gender.
    pub fn record(&mut self, gender: SpeakerGender) {
        self.num_quotes += 1;
        match gender {
            SpeakerGender::Female => self.women_speakers += 1,
            SpeakerGender::Male => self.men_speakers += 1,
            SpeakerGender::Unknown => self.unknown_speakers += 1,
            SpeakerGender::Other => {}
        }
    }

    /// Quotes that landed in one of the three named buckets.
    pub fn categorized(&self) -> u64 {
        self.women_speakers + self.men_speakers + self.unknown_speakers
    }

    /// Quotes with no recognized gender label.
    pub fn uncategorized(&self) -> u64 {
        self.num_quotes - self.categorized()
    }
}
