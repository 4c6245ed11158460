//! Mode C (Gillham) Gray code altitude conversion.

use crate::bits;
use crate::error::Result;

use serde::Serialize;

/// A decoded Mode C altitude.
///
/// `Invalid` is reported for codes the Gillham table leaves undefined, it is
/// never folded into `Feet(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Altitude {
    Invalid,
    Feet(i32),
}

impl Altitude {
    pub fn feet(&self) -> Option<i32> {
        match self {
            Altitude::Invalid => None,
            Altitude::Feet(feet) => Some(*feet),
        }
    }
}

impl std::fmt::Display for Altitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Altitude::Invalid => write!(f, "invalid"),
            Altitude::Feet(feet) => write!(f, "{} ft", feet),
        }
    }
}

// C1 C2 C4
const HUNDREDS_PATTERN: [(u8, u8); 3] = [(0x4, 0x7), (0x2, 0x3), (0x1, 0x1)];

// D2 D4 A1 A2 A4 B1 B2 B4
const FIVE_HUNDREDS_PATTERN: [(u8, u8); 8] = [
    (0x80, 0xff),
    (0x40, 0x7f),
    (0x20, 0x3f),
    (0x10, 0x1f),
    (0x08, 0x0f),
    (0x04, 0x07),
    (0x02, 0x03),
    (0x01, 0x01),
];

fn gray_decode(pattern: &[(u8, u8)], code: u8) -> i32 {
    let binary = pattern
        .iter()
        .map(|(in_bit, xor_bits)| {
            if *in_bit == code & in_bit {
                *xor_bits
            } else {
                0
            }
        })
        .fold(0u8, |acc, v| acc ^ v);

    i32::from(binary)
}

/// Converts the Gray coded 100 ft (`C1 C2 C4`) and 500 ft
/// (`D2 D4 A1 A2 A4 B1 B2 B4`) sub-fields to feet.
///
/// The lowest valid code is -1200 ft. Hundreds codes `000`, `101` and `111`
/// are undefined and give `Altitude::Invalid`.
pub fn gray_code_to_altitude(hundreds: u8, five_hundreds: u8) -> Altitude {
    let mut ones = gray_decode(&HUNDREDS_PATTERN, hundreds & 0x7);

    // 5 and 7 are swapped in the hundreds sequence
    if ones & 5 == 5 {
        ones ^= 2;
    }

    if ones == 0 || ones > 5 {
        return Altitude::Invalid;
    }

    let fives = gray_decode(&FIVE_HUNDREDS_PATTERN, five_hundreds);

    let ones = if fives & 1 == 1 { 6 - ones } else { ones };

    Altitude::Feet((fives * 5 + ones - 13) * 100)
}

/// Bit indices (as used by `bits::read`) of the twelve Mode C code bits
/// inside some buffer. D1 is never used for altitude and is not listed.
#[derive(Debug, Clone, Copy)]
pub struct ModeCLayout {
    pub c1: usize,
    pub c2: usize,
    pub c4: usize,
    pub a1: usize,
    pub a2: usize,
    pub a4: usize,
    pub b1: usize,
    pub b2: usize,
    pub b4: usize,
    pub d2: usize,
    pub d4: usize,
}

impl ModeCLayout {
    /// Bit indices of the hundreds code, most significant first
    fn hundreds(&self) -> [usize; 3] {
        [self.c1, self.c2, self.c4]
    }

    /// Bit indices of the five hundreds code, most significant first
    fn five_hundreds(&self) -> [usize; 8] {
        [
            self.d2, self.d4, self.a1, self.a2, self.a4, self.b1, self.b2, self.b4,
        ]
    }
}

fn assemble(input: &[u8], indices: &[usize]) -> Result<u8> {
    indices.iter().try_fold(0u8, |code, index| {
        Ok((code << 1) | bits::read(input, *index, 1)? as u8)
    })
}

/// Assembles the Mode C code described by `layout` from `input` and converts
/// it to an altitude
pub fn decode_mode_c(input: &[u8], layout: &ModeCLayout) -> Result<Altitude> {
    let hundreds = assemble(input, &layout.hundreds())?;
    let five_hundreds = assemble(input, &layout.five_hundreds())?;

    Ok(gray_code_to_altitude(hundreds, five_hundreds))
}
