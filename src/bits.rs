//! Bit-field extraction.
//!
//! Bit indices are 0-based from the start of the slice and MSB first within
//! each octet, so index 0 is bit 8 of the first octet in ASTERIX numbering
//! and index `n - 1` is bit `n` of a Mode S MB field.

use crate::error::DecodeError;
use crate::error::Result;

use nom::bits::complete::take;
use nom::combinator::map;
use nom::error::Error;
use nom::IResult;
use nom::Parser;

type BitInput<'a> = (&'a [u8], usize);
type BitResult<'a, O> = IResult<BitInput<'a>, O>;

/// Reads `width` bits starting at bit `index`, most significant bit first.
///
/// `width` may be anywhere from 0 to 64 and the span may cross any number of
/// octet boundaries. Wider fields are `MalformedItem`.
pub fn read(input: &[u8], index: usize, width: usize) -> Result<u64> {
    if width > 64 {
        return Err(DecodeError::MalformedItem {
            item: "bit field",
            reason: "wider than 64 bits",
        });
    }

    let end = index + width;

    if end > input.len() * 8 {
        return Err(DecodeError::TruncatedBuffer {
            needed: (end + 7) / 8,
            available: input.len(),
        });
    }

    let start = (&input[index / 8..], index % 8);

    let (_, value): (_, u64) = take::<_, u64, _, Error<(&[u8], usize)>>(width)(start).map_err(
        |_| DecodeError::TruncatedBuffer {
            needed: (end + 7) / 8,
            available: input.len(),
        },
    )?;

    Ok(value)
}

/// Reads the single bit at `index`
pub fn flag(input: &[u8], index: usize) -> Result<bool> {
    Ok(read(input, index, 1)? == 1)
}

/// A field of `width` bits, at most 8
pub fn field<'a>(width: usize) -> impl Fn(BitInput<'a>) -> BitResult<'a, u8> {
    take(width)
}

/// A one bit flag
pub fn bit(input: BitInput<'_>) -> BitResult<'_, bool> {
    map(take(1usize), |bit: u8| bit == 1)(input)
}

/// Runs a bit-level `parser` from the first bit of `input`, usually a
/// `tuple` of `field` and `bit`. Trailing bits are ignored.
pub fn parse<'a, O, P>(input: &'a [u8], parser: P) -> Result<O>
where
    P: Parser<BitInput<'a>, O, Error<BitInput<'a>>>,
{
    nom::bits::bits::<_, _, Error<BitInput<'a>>, Error<&'a [u8]>, _>(parser)(input)
        .map(|(_, value)| value)
        .map_err(|_| DecodeError::MalformedItem {
            item: "bit field",
            reason: "runs past the end of the item",
        })
}

/// Returns the `length` octets starting at `offset`
pub fn octets(input: &[u8], offset: usize, length: usize) -> Result<&[u8]> {
    input
        .get(offset..offset + length)
        .ok_or(DecodeError::TruncatedBuffer {
            needed: offset + length,
            available: input.len(),
        })
}

/// Returns the octet at `offset`
pub fn octet(input: &[u8], offset: usize) -> Result<u8> {
    input
        .get(offset)
        .copied()
        .ok_or(DecodeError::TruncatedBuffer {
            needed: offset + 1,
            available: input.len(),
        })
}

/// Sign-extends the low `width` bits of `value` as two's complement
pub fn signed(value: u64, width: usize) -> i64 {
    let shift = 64 - width;

    ((value << shift) as i64) >> shift
}
