//! Mastermind code representation
//!
//! A Code stores the ordered peg colors of a secret or a guess. Colors are
//! integers in `1..=color_count`; rendering maps them to the letters printed
//! on the classic board.

use super::GameConfig;
use crate::error::CodeError;
use std::fmt;

/// Color letters: Red, Green, Blue, Yellow, White, blacK, then
/// Orange, Purple, Cyan, Magenta for larger boards
pub const PALETTE: [char; 10] = ['R', 'G', 'B', 'Y', 'W', 'K', 'O', 'P', 'C', 'M'];

const SEPARATORS: [char; 3] = [',', '-', ' '];

/// An ordered sequence of peg colors
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    pegs: Vec<u8>,
}

impl Code {
    /// Create a code, checking it against the game shape
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - The number of pegs differs from the configured peg count
    /// - A peg lies outside `1..=color_count`
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, GameConfig};
    ///
    /// let config = GameConfig::CLASSIC;
    /// let code = Code::new(vec![1, 1, 2, 2], &config).unwrap();
    /// assert_eq!(code.pegs(), &[1, 1, 2, 2]);
    ///
    /// assert!(Code::new(vec![1, 2, 3], &config).is_err());
    /// assert!(Code::new(vec![1, 2, 3, 7], &config).is_err());
    /// ```
    pub fn new(pegs: impl Into<Vec<u8>>, config: &GameConfig) -> Result<Self, CodeError> {
        let code = Self { pegs: pegs.into() };
        code.validate(config)?;
        Ok(code)
    }

    /// Wrap pegs produced internally (enumeration, opening book) without checks
    pub(crate) fn from_pegs(pegs: Vec<u8>) -> Self {
        Self { pegs }
    }

    /// A code with every peg set to `color`
    pub(crate) fn filled(color: u8, peg_count: usize) -> Self {
        Self {
            pegs: vec![color; peg_count],
        }
    }

    /// Parse a code typed by a user
    ///
    /// Accepts:
    /// - color letters, case-insensitive (`RRGG`, `rgby`)
    /// - one digit per peg (`1122`)
    /// - separated numbers for boards with more than nine colors (`1-10-3`, `1,10,3`),
    ///   letters allowed between separators (`R G G B`)
    ///
    /// Separated input uses one separator throughout. Signs and empty parts
    /// are rejected, so `1,-1,2,2` is an error rather than `1122`.
    ///
    /// # Errors
    /// Returns `CodeError` for unknown symbols, a wrong peg count, or colors
    /// outside the board.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, GameConfig};
    ///
    /// let config = GameConfig::CLASSIC;
    /// let a = Code::parse("RRGG", &config).unwrap();
    /// let b = Code::parse("1122", &config).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn parse(text: &str, config: &GameConfig) -> Result<Self, CodeError> {
        let text = text.trim();
        // The first separator seen splits the whole input
        let separator = text.chars().find(|ch| SEPARATORS.contains(ch));

        let pegs = if let Some(separator) = separator {
            text.split(separator)
                .map(|part| parse_part(part.trim(), separator))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            text.chars()
                .map(parse_symbol)
                .collect::<Result<Vec<_>, _>>()?
        };

        if pegs.len() != config.peg_count() {
            return Err(CodeError::WrongLength {
                expected: config.peg_count(),
                actual: pegs.len(),
            });
        }

        let pegs = pegs
            .into_iter()
            .map(|color| check_color(color, config))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { pegs })
    }

    /// Check this code against a game shape
    ///
    /// # Errors
    /// Returns `CodeError::WrongLength` or `CodeError::InvalidColor`.
    pub fn validate(&self, config: &GameConfig) -> Result<(), CodeError> {
        if self.pegs.len() != config.peg_count() {
            return Err(CodeError::WrongLength {
                expected: config.peg_count(),
                actual: self.pegs.len(),
            });
        }
        for &peg in &self.pegs {
            check_color(u32::from(peg), config)?;
        }
        Ok(())
    }

    /// Get the peg colors
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[u8] {
        &self.pegs
    }

    /// Mutable pegs, for stepping the odometer in place
    #[inline]
    pub(crate) fn pegs_mut(&mut self) -> &mut [u8] {
        &mut self.pegs
    }

    /// Get the color at a specific position
    ///
    /// # Panics
    /// Panics if `position` is out of range
    #[inline]
    #[must_use]
    pub fn peg(&self, position: usize) -> u8 {
        self.pegs[position]
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pegs.len()
    }

    /// True for a code with no pegs (never produced by a valid game shape)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }

    /// Render the code as color letters, e.g. `RRGG`
    ///
    /// Boards with more colors than [`PALETTE`] letters are rendered as
    /// dash-separated numbers instead.
    ///
    /// # Errors
    /// Returns `CodeError::InvalidColor` if a peg lies outside the board.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, GameConfig};
    ///
    /// let config = GameConfig::CLASSIC;
    /// let code = Code::new(vec![1, 2, 3, 6], &config).unwrap();
    /// assert_eq!(code.render(&config).unwrap(), "RGBK");
    /// ```
    pub fn render(&self, config: &GameConfig) -> Result<String, CodeError> {
        if usize::from(config.color_count()) > PALETTE.len() {
            let parts = self
                .pegs
                .iter()
                .map(|&peg| check_color(u32::from(peg), config).map(|c| c.to_string()))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(parts.join("-"));
        }

        self.pegs
            .iter()
            .map(|&peg| color_symbol(peg, config))
            .collect()
    }
}

/// Letter for a single peg color
///
/// # Errors
/// Returns `CodeError::InvalidColor` if `color` lies outside `1..=color_count`
/// or has no letter in [`PALETTE`].
pub fn color_symbol(color: u8, config: &GameConfig) -> Result<char, CodeError> {
    let color = check_color(u32::from(color), config)?;
    PALETTE
        .get(usize::from(color) - 1)
        .copied()
        .ok_or(CodeError::InvalidColor {
            color: u32::from(color),
            max: PALETTE.len() as u8,
        })
}

fn check_color(color: u32, config: &GameConfig) -> Result<u8, CodeError> {
    match u8::try_from(color) {
        Ok(value) if (1..=config.color_count()).contains(&value) => Ok(value),
        _ => Err(CodeError::InvalidColor {
            color,
            max: config.color_count(),
        }),
    }
}

fn parse_symbol(ch: char) -> Result<u32, CodeError> {
    if let Some(digit) = ch.to_digit(10) {
        return Ok(digit);
    }
    let upper = ch.to_ascii_uppercase();
    PALETTE
        .iter()
        .position(|&letter| letter == upper)
        .map(|index| index as u32 + 1)
        .ok_or(CodeError::InvalidSymbol(ch))
}

fn parse_part(part: &str, separator: char) -> Result<u32, CodeError> {
    if part.is_empty() {
        return Err(CodeError::InvalidSymbol(separator));
    }
    if part.bytes().all(|b| b.is_ascii_digit()) {
        // Only overflow can fail here; saturate so the color check reports it
        return Ok(part.parse().unwrap_or(u32::MAX));
    }

    let mut chars = part.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => parse_symbol(ch),
        _ => {
            let bad = part
                .chars()
                .find(|c| !c.is_ascii_digit())
                .unwrap_or(separator);
            Err(CodeError::InvalidSymbol(bad))
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let compact = self.pegs.iter().all(|&peg| peg <= 9);
        for (i, peg) in self.pegs.iter().enumerate() {
            if !compact && i > 0 {
                write!(f, "-")?;
            }
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}
