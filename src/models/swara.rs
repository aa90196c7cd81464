//! Swara to Western letter mapping
//!
//! Carnatic notation names the seven scale degrees S R G M P D N. With Sa
//! fixed at C they correspond to the Western letters C D E F G A B. Case is
//! carried across: upper-case swaras are the middle octave, lower-case ones
//! the octave above (so `s` is the upper tonic, ABC `c`).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The seven base swaras paired with their Western letters
const SWARA_TABLE: [(char, char); 7] = [
    ('S', 'C'),
    ('R', 'D'),
    ('G', 'E'),
    ('M', 'F'),
    ('P', 'G'),
    ('D', 'A'),
    ('N', 'B'),
];

static MAPPING: Lazy<SwaraMapping> = Lazy::new(SwaraMapping::build);

/// How a swara is labelled in the annotated variants
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// The swara character itself (`S`, `r`, ...)
    #[default]
    Letter,
    /// Spoken syllable (`sa`, `ri`, ...)
    Syllable,
}

/// Bidirectional swara/Western table, built once per process
#[derive(Debug)]
pub struct SwaraMapping {
    to_western: HashMap<char, char>,
    to_swara: HashMap<char, char>,
}

impl SwaraMapping {
    fn build() -> Self {
        let mut to_western = HashMap::with_capacity(14);
        let mut to_swara = HashMap::with_capacity(14);

        for (swara, western) in SWARA_TABLE {
            for (s, w) in [
                (swara, western),
                (swara.to_ascii_lowercase(), western.to_ascii_lowercase()),
            ] {
                to_western.insert(s, w);
                to_swara.insert(w, s);
            }
        }

        Self {
            to_western,
            to_swara,
        }
    }

    /// Shared read-only instance
    pub fn global() -> &'static SwaraMapping {
        &MAPPING
    }

    /// Check whether a character is a swara letter (either case)
    pub fn is_swara(c: char) -> bool {
        Self::global().to_western.contains_key(&c)
    }

    /// Western letter for a swara, case preserved
    pub fn to_western(&self, swara: char) -> Option<char> {
        self.to_western.get(&swara).copied()
    }

    /// Swara for a Western letter, case preserved
    pub fn to_swara(&self, western: char) -> Option<char> {
        self.to_swara.get(&western).copied()
    }

    /// Spoken syllable for a swara
    pub fn syllable(swara: char) -> Option<&'static str> {
        let name = match swara.to_ascii_uppercase() {
            'S' => "sa",
            'R' => "ri",
            'G' => "ga",
            'M' => "ma",
            'P' => "pa",
            'D' => "da",
            'N' => "ni",
            _ => return None,
        };
        Some(name)
    }

    /// Label for a swara in the requested style
    pub fn label(swara: char, style: LabelStyle) -> Option<String> {
        match style {
            LabelStyle::Letter => Self::is_swara(swara).then(|| swara.to_string()),
            LabelStyle::Syllable => Self::syllable(swara).map(str::to_string),
        }
    }
}
