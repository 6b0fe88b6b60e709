//! Publicly revealed solution mask

use super::{BLANK, Letter, Pattern};
use std::fmt;

/// The partially revealed word shown to the player
///
/// A position is revealed once every surviving candidate holds the same letter
/// there. Updates only ever fill in blanks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask(Box<[u8]>);

impl Mask {
    /// A fully hidden mask of `len` positions
    #[must_use]
    pub fn blank(len: usize) -> Self {
        Self(vec![BLANK; len].into_boxed_slice())
    }

    /// Fill in the positions the chosen pattern reveals for `letter`
    ///
    /// Positions already revealed by earlier letters are kept.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::{Letter, Mask};
    ///
    /// let o = Letter::new('o').unwrap();
    /// let c = Letter::new('c').unwrap();
    ///
    /// let mask = Mask::blank(4).update(&"-O--".parse().unwrap(), o);
    /// let mask = mask.update(&"C---".parse().unwrap(), c);
    /// assert_eq!(mask.to_string(), "CO--");
    /// ```
    #[must_use]
    pub fn update(&self, pattern: &Pattern, letter: Letter) -> Self {
        debug_assert_eq!(self.0.len(), pattern.len(), "pattern and mask lengths differ");

        let target = letter.as_byte();
        Self(
            self.0
                .iter()
                .zip(pattern.cells())
                .map(|(&current, &cell)| if cell == target { target } else { current })
                .collect(),
        )
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of positions still hidden
    #[must_use]
    pub fn blanks(&self) -> usize {
        self.0.iter().filter(|&&b| b == BLANK).count()
    }

    /// True once every position is revealed
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.blanks() == 0
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.0.iter() {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn pat(s: &str) -> Pattern {
        s.parse().unwrap()
    }

    #[test]
    fn blank_mask() {
        let mask = Mask::blank(5);
        assert_eq!(mask.to_string(), "-----");
        assert_eq!(mask.blanks(), 5);
        assert!(!mask.is_solved());
    }

    #[test]
    fn update_reveals_matching_positions() {
        let mask = Mask::blank(6).update(&pat("-E--E-"), letter('e'));
        assert_eq!(mask.to_string(), "-E--E-");
        assert_eq!(mask.blanks(), 4);
    }

    #[test]
    fn update_with_blank_pattern_is_unchanged() {
        let mask = Mask::blank(4).update(&pat("-O--"), letter('o'));
        let same = mask.update(&pat("----"), letter('d'));
        assert_eq!(mask, same);
    }

    #[test]
    fn update_never_unreveals() {
        let mask = Mask::blank(4)
            .update(&pat("-O--"), letter('o'))
            .update(&pat("C---"), letter('c'));

        let after = mask.update(&pat("---E"), letter('e'));
        for (before, now) in mask.cells().iter().zip(after.cells()) {
            if *before != BLANK {
                assert_eq!(before, now);
            }
        }
        assert_eq!(after.to_string(), "CO-E");
    }

    #[test]
    fn solved_when_no_blanks() {
        let mask = Mask::blank(3).update(&pat("A-A"), letter('a'));
        assert!(!mask.is_solved());
        let mask = mask.update(&pat("-B-"), letter('b'));
        assert!(mask.is_solved());
        assert_eq!(mask.to_string(), "ABA");
    }
}
