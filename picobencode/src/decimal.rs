// SPDX-License-Identifier: Apache-2.0

//! Panic-free base-10 helpers shared by the reader and the writer.
//!
//! Signed values are handled in the negative domain throughout: the
//! magnitude of `i64::MIN` is not representable as a positive `i64`, while
//! every positive value has a negative counterpart.

/// Longest decimal rendering of an `i64` (`-9223372036854775808`) or a
/// `u64` (`18446744073709551615`).
pub(crate) const MAX_DECIMAL_LEN: usize = 20;

/// A formatted decimal number held in a fixed scratch array.
pub(crate) struct Decimal {
    bytes: [u8; MAX_DECIMAL_LEN],
    start: usize,
}

impl Decimal {
    pub fn signed(value: i64) -> Self {
        let mut out = Self::empty();
        let negative = value < 0;
        // Fold positives into the negative domain; never negate a negative.
        let mut rest = if negative { value } else { -value };
        loop {
            // `rest % 10` is in -9..=0 here
            let digit = (-(rest % 10)) as u8;
            out.prepend(b'0' + digit);
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        if negative {
            out.prepend(b'-');
        }
        out
    }

    pub fn unsigned(value: u64) -> Self {
        let mut out = Self::empty();
        let mut rest = value;
        loop {
            out.prepend(b'0' + (rest % 10) as u8);
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        out
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.get(self.start..).unwrap_or(&[])
    }

    fn empty() -> Self {
        Self {
            bytes: [0; MAX_DECIMAL_LEN],
            start: MAX_DECIMAL_LEN,
        }
    }

    fn prepend(&mut self, byte: u8) {
        if let Some(pos) = self.start.checked_sub(1) {
            if let Some(slot) = self.bytes.get_mut(pos) {
                *slot = byte;
                self.start = pos;
            }
        }
    }
}

/// Appends one digit to a signed accumulator, building negatives downward
/// so that `i64::MIN` is reachable. `None` on overflow.
pub(crate) fn push_signed_digit(acc: i64, digit: u8, negative: bool) -> Option<i64> {
    let scaled = acc.checked_mul(10)?;
    if negative {
        scaled.checked_sub(i64::from(digit))
    } else {
        scaled.checked_add(i64::from(digit))
    }
}

/// Appends one digit to an unsigned accumulator. `None` on overflow.
pub(crate) fn push_unsigned_digit(acc: u64, digit: u8) -> Option<u64> {
    acc.checked_mul(10)?.checked_add(u64::from(digit))
}

/// Value of an ASCII decimal digit.
pub(crate) fn digit_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        _ => None,
    }
}
