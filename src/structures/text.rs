//! Text form of [`Poly`].
//!
//! Output is a single line of terms, highest exponent first, each preceded by
//! a space and carrying an explicit sign: `3x^2 - x + 5` prints as
//! ` +3x^2 -1x +5`. A polynomial with no nonzero coefficient prints as ` 0`.
//!
//! Input is a whitespace-separated stream of `coefficient exponent` integer
//! pairs terminated by the pair `-1 -1`.

use core::fmt;
use core::str::FromStr;
use std::collections::VecDeque;
use std::io::BufRead;

use tracing::{debug, trace};

use super::poly::Poly;
use crate::error::PolyError;
use crate::utils::is_sentinel;

/// Symbols used when printing a polynomial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notation<'a> {
    /// Name of the indeterminate.
    pub variable: char,
    /// Marker placed between the variable and an exponent above 1.
    pub exponent_marker: &'a str,
}

impl Default for Notation<'_> {
    fn default() -> Self {
        Self {
            variable: 'x',
            exponent_marker: "^",
        }
    }
}

/// A polynomial paired with the [`Notation`] used to print it.
///
/// Created by [`Poly::display_with`].
#[derive(Clone, Copy, Debug)]
pub struct Formatted<'a> {
    poly: &'a Poly,
    notation: Notation<'a>,
}

impl fmt::Display for Formatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Notation {
            variable,
            exponent_marker,
        } = self.notation;
        let mut printed = false;

        for (power, &coeff) in self.poly.coefficients().iter().enumerate().rev() {
            if coeff == 0 {
                continue;
            }
            printed = true;

            // Negative values carry their own sign
            f.write_str(if coeff > 0 { " +" } else { " " })?;
            match power {
                0 => write!(f, "{}", coeff)?,
                1 => write!(f, "{}{}", coeff, variable)?,
                _ => write!(f, "{}{}{}{}", coeff, variable, exponent_marker, power)?,
            }
        }

        if !printed {
            f.write_str(" 0")?;
        }
        Ok(())
    }
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(Notation::default()), f)
    }
}

impl Poly {
    /// Print with a custom variable symbol and exponent marker.
    ///
    /// # Example
    ///
    /// ```
    /// use intpoly::{Notation, Poly};
    ///
    /// let p = Poly::from_coefficients(vec![5, -1, 3]);
    /// assert_eq!(p.to_string(), " +3x^2 -1x +5");
    ///
    /// let t = Notation { variable: 't', exponent_marker: "**" };
    /// assert_eq!(p.display_with(t).to_string(), " +3t**2 -1t +5");
    /// ```
    pub fn display_with<'a>(&'a self, notation: Notation<'a>) -> Formatted<'a> {
        Formatted {
            poly: self,
            notation,
        }
    }

    /// Read `coefficient exponent` pairs from `tokens` into `self` until the
    /// `-1 -1` terminator.
    ///
    /// Each pair is applied with [`Poly::try_set_coefficient`], so existing
    /// terms are overwritten and negative exponents are skipped. The
    /// terminator is consumed. Tokens after it stay in `tokens` for the next
    /// read.
    ///
    /// If the input is malformed, or an exponent needs more storage than can
    /// be allocated ([`PolyError::CapacityOverflow`]), pairs read before the
    /// error stay applied.
    ///
    /// # Example
    ///
    /// ```
    /// use intpoly::{Poly, TokenReader};
    ///
    /// let mut tokens = TokenReader::new("3 2 -1 1\n5 0 -1 -1 4 1 -1 -1".as_bytes());
    ///
    /// let mut p = Poly::default();
    /// p.read_from(&mut tokens).unwrap();
    /// assert_eq!(p.to_string(), " +3x^2 -1x +5");
    ///
    /// let mut q = Poly::default();
    /// q.read_from(&mut tokens).unwrap();
    /// assert_eq!(q.to_string(), " +4x");
    /// ```
    pub fn read_from<R: BufRead>(&mut self, tokens: &mut TokenReader<R>) -> Result<(), PolyError> {
        loop {
            let Some(coefficient) = tokens.next_i32()? else {
                debug!("input ended before terminator");
                return Err(PolyError::MissingSentinel);
            };
            let Some(exponent) = tokens.next_i32()? else {
                debug!(coefficient, "input ended inside a pair");
                return Err(PolyError::UnpairedToken { coefficient });
            };
            if is_sentinel(coefficient, exponent) {
                trace!(max_exponent = self.max_exponent(), "read terminator");
                return Ok(());
            }
            self.try_set_coefficient(coefficient, exponent)?;
        }
    }

    /// Apply `(coefficient, exponent)` pairs until the `-1 -1` terminator.
    ///
    /// Returns [`PolyError::MissingSentinel`] if `pairs` runs out first and
    /// [`PolyError::CapacityOverflow`] if a pair cannot be stored; the pairs
    /// seen so far stay applied. Pairs after the terminator are not consumed
    /// from the iterator.
    pub fn extend_pairs<I>(&mut self, pairs: I) -> Result<(), PolyError>
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        for (coefficient, exponent) in pairs {
            if is_sentinel(coefficient, exponent) {
                return Ok(());
            }
            self.try_set_coefficient(coefficient, exponent)?;
        }
        Err(PolyError::MissingSentinel)
    }
}

impl FromStr for Poly {
    type Err = PolyError;

    /// Parse a complete pair stream, including the terminator.
    ///
    /// Anything but whitespace after the terminator is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = TokenReader::new(s.as_bytes());
        let mut poly = Poly::default();
        poly.read_from(&mut tokens)?;
        if let Some(token) = tokens.next_token()? {
            return Err(PolyError::TrailingToken { token });
        }
        Ok(poly)
    }
}

/// Whitespace-separated token source over a buffered reader.
///
/// Lines are pulled from the reader only when the pending tokens run out,
/// so an interactive reader is never asked for more input than needed.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
    line: String,
}

impl<R: BufRead> TokenReader<R> {
    /// Wrap `reader`; nothing is read until the first token is requested.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: String::new(),
        }
    }

    /// Next raw token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>, PolyError> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Next token parsed as an `i32`, or `None` at end of input.
    pub fn next_i32(&mut self) -> Result<Option<i32>, PolyError> {
        match self.next_token()? {
            Some(token) => match token.parse() {
                Ok(value) => Ok(Some(value)),
                Err(_) => {
                    debug!(%token, "rejecting non-integer token");
                    Err(PolyError::InvalidToken { token })
                }
            },
            None => Ok(None),
        }
    }

    /// Give back the underlying reader. Buffered tokens are discarded.
    pub fn into_inner(self) -> R {
        self.reader
    }
}
