//! Mixed-radix codec between syllable indices and jamo index triples.
//!
//! A syllable index is a three-digit number whose digits are the initial,
//! medial and final jamo indices, most significant first. For the Unicode
//! block the radices are (19, 21, 28).

use serde::Serialize;

/// Initial, medial and final jamo indices of one syllable.
///
/// `final_ == 0` means the syllable has no final consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct JamoTriple {
    pub initial: u32,
    pub medial: u32,
    #[serde(rename = "final")]
    pub final_: u32,
}

impl JamoTriple {
    pub const fn new(initial: u32, medial: u32, final_: u32) -> Self {
        Self {
            initial,
            medial,
            final_,
        }
    }

    pub const fn to_array(self) -> [u32; 3] {
        [self.initial, self.medial, self.final_]
    }

    pub const fn from_array(digits: [u32; 3]) -> Self {
        Self::new(digits[0], digits[1], digits[2])
    }
}

impl From<(u32, u32, u32)> for JamoTriple {
    fn from((initial, medial, final_): (u32, u32, u32)) -> Self {
        Self::new(initial, medial, final_)
    }
}

/// Size of each jamo family, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Radices(pub [u32; 3]);

/// Radices of the modern Unicode syllable block.
pub const SYLLABLE_RADICES: Radices = Radices([19, 21, 28]);

impl Radices {
    /// Number of distinct triples (and syllable indices) these radices encode.
    pub fn product(&self) -> u32 {
        self.0.iter().fold(1u32, |acc, &r| acc.wrapping_mul(r))
    }
}

/// Split `index` into digits, least significant radix first.
///
/// Exact inverse of [`compose_index`] for `index < radices.product()`. Larger
/// indices overflow into a wrong initial digit; a zero radix yields zero
/// digits. Neither case is reported.
pub fn decompose_index(mut index: u32, radices: Radices) -> JamoTriple {
    let mut digits = [0u32; 3];
    for (digit, &radix) in digits.iter_mut().zip(radices.0.iter()).rev() {
        *digit = index.checked_rem(radix).unwrap_or(0);
        index = index.checked_div(radix).unwrap_or(0);
    }
    JamoTriple::from_array(digits)
}

/// Fold digits back into an index: `acc = acc * radix + digit`.
///
/// Components outside their radix produce a different (wrong) index.
pub fn compose_index(triple: JamoTriple, radices: Radices) -> u32 {
    radices
        .0
        .iter()
        .zip(triple.to_array())
        .fold(0u32, |acc, (&radix, digit)| {
            acc.wrapping_mul(radix).wrapping_add(digit)
        })
}
