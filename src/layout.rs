//! Venue Layout
//!
//! Fixed venue geometry and the mapping from seat tokens to row bytes.
//!
//! ## Row Byte Format
//! ```text
//! Bit position:  7  6  5  4  3  2  1  0
//! Seat number:   7  6  5  4  3  2  1  0
//! ```
//! A bit value of 0 means the seat is available, 1 means it is booked.
//! Row `A` is byte 0 of the store, row `T` is byte 19.

use crate::error::{Result, SeatError};

/// Number of rows in the venue (one byte each in the store)
pub const ROWS: usize = 20;

/// Number of seats in a row (one bit each in the row byte)
pub const SEATS_PER_ROW: u32 = u8::BITS;

/// Letter of the first row
const FIRST_ROW: char = 'A';

/// Map a row letter to its byte offset, if the row exists
///
/// `'A'` → 0 ... `'T'` → 19. Anything else, including lowercase
/// letters, is outside the venue.
pub fn row_index(letter: char) -> Option<usize> {
    let index = (letter as u32).checked_sub(FIRST_ROW as u32)? as usize;
    (index < ROWS).then_some(index)
}

/// Map a byte offset back to its row letter
pub fn row_letter(index: usize) -> Option<char> {
    if index >= ROWS {
        return None;
    }
    char::from_u32(FIRST_ROW as u32 + index as u32)
}

/// Whether `seat` is booked in a row byte
pub fn seat_booked(row_byte: u8, seat: u32) -> bool {
    seat < SEATS_PER_ROW && (row_byte >> seat) & 1 == 1
}

/// A validated, contiguous run of seats within one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatRange {
    /// Row offset in the store
    pub row: usize,

    /// First seat (0-based)
    pub start: u32,

    /// Number of seats, at least 1
    pub count: u32,
}

impl SeatRange {
    /// Parse a seat token such as `"B2"` plus a seat count
    ///
    /// Checks, first failure wins:
    /// 1. token is non-empty and has a seat number after the row letter
    /// 2. count is positive
    /// 3. row letter is inside the venue
    /// 4. seat number is a non-negative integer
    /// 5. the range does not run past the end of the row
    pub fn parse(token: &str, count: i64) -> Result<Self> {
        let mut chars = token.chars();
        let letter = chars
            .next()
            .ok_or_else(|| invalid("empty seat token".to_string()))?;
        let suffix = chars.as_str();
        if suffix.is_empty() {
            return Err(invalid(format!("seat token {token:?} has no seat number")));
        }

        if count <= 0 {
            return Err(invalid(format!("seat count must be positive, got {count}")));
        }

        let row = row_index(letter)
            .ok_or_else(|| invalid(format!("row {letter:?} is outside the venue")))?;

        // Signed parse: "-0" is seat 0 and "+1" is seat 1, negatives are rejected
        let start: i64 = suffix
            .parse()
            .map_err(|_| invalid(format!("seat number {suffix:?} is not a valid seat")))?;
        if start < 0 {
            return Err(invalid(format!("seat number {start} is negative")));
        }

        if start as u64 + count as u64 > u64::from(SEATS_PER_ROW) {
            return Err(invalid(format!(
                "{count} seats from seat {start} exceed the {SEATS_PER_ROW} seats in a row"
            )));
        }

        Ok(Self {
            row,
            start: start as u32,
            count: count as u32,
        })
    }

    /// Bit mask covering the range within the row byte
    ///
    /// ```text
    /// start = 5, count = 3
    /// (1 << 3) - 1  →  00000111
    /// 00000111 << 5 →  11100000
    /// ```
    pub fn mask(&self) -> u8 {
        (((1u16 << self.count) - 1) << self.start) as u8
    }

    /// Byte offset of the row in the store
    pub fn offset(&self) -> u64 {
        self.row as u64
    }
}

fn invalid(reason: String) -> SeatError {
    SeatError::InvalidRequest(reason)
}
