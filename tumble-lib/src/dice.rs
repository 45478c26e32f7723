use crate::error::Error;
use crate::parser;

/// Modifier attached to a roll, on the total or on every dice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// `+n`: add to the total
    Add,
    /// `-n`: subtract from the total
    Sub,
    /// `.+n`: add to every dice before aggregation
    AddEach,
    /// `.-n`: subtract from every dice before aggregation
    SubEach,
    None,
}

/// Describe a parsed roll: amount of dices, sides, optional modifier
///
/// The parser is the only producer; a value never changes once built.
/// A `count` of 0 is representable on purpose, rejecting it is the
/// caller's validation, not the parser's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Roll {
    pub count: u64,
    pub sides: u64,
    pub modifier: Modifier,
    /// Meaningless when `modifier` is `None`
    pub operand: u64,
}

impl Roll {
    pub const fn new(count: u64, sides: u64) -> Self {
        Roll {
            count,
            sides,
            modifier: Modifier::None,
            operand: 0,
        }
    }

    pub const fn with_modifier(count: u64, sides: u64, modifier: Modifier, operand: u64) -> Self {
        Roll {
            count,
            sides,
            modifier,
            operand,
        }
    }
}

impl std::str::FromStr for Roll {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parser::Parser::parse_roll(input)
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.modifier {
            Modifier::Add => write!(f, "+{}", self.operand),
            Modifier::Sub => write!(f, "-{}", self.operand),
            Modifier::AddEach => write!(f, ".+{}", self.operand),
            Modifier::SubEach => write!(f, ".-{}", self.operand),
            Modifier::None => Ok(()),
        }
    }
}
