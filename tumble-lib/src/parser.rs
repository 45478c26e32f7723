use crate::dice::Modifier;
use crate::dice::Roll;
use crate::error::Error;
use crate::error::Result;
use pest::iterators::Pair;
use pest::Parser as _;
use pest_derive::Parser;

/// Pest parser
#[derive(Parser)]
#[grammar = "tumble.pest"]
pub struct Parser;

impl Parser {
    /// Parse a full notation string into a roll description
    pub(crate) fn parse_roll(input: &str) -> Result<Roll> {
        let mut pairs = Self::parse(Rule::notation, input)?;
        let count = Self::extract_number(pairs.next().unwrap())?;
        let sides = Self::extract_number(pairs.next().unwrap())?;
        let (modifier, operand) = match pairs.next() {
            Some(pair) => match pair.as_rule() {
                Rule::add => (Modifier::Add, Self::extract_operand(pair)?),
                Rule::sub => (Modifier::Sub, Self::extract_operand(pair)?),
                Rule::each_add => (Modifier::AddEach, Self::extract_operand(pair)?),
                Rule::each_sub => (Modifier::SubEach, Self::extract_operand(pair)?),
                Rule::EOI => (Modifier::None, 0),
                _ => unreachable!("{:?}", pair),
            },
            None => (Modifier::None, 0),
        };
        Ok(Roll::with_modifier(count, sides, modifier, operand))
    }

    // The grammar only admits digit runs, but a run can still overflow
    // u64. That collapses into the same opaque failure.
    fn extract_number(pair: Pair<Rule>) -> Result<u64> {
        pair.as_str().parse::<u64>().map_err(|_| Error)
    }

    /// A missing operand reads as 0, `3d6+` rolls the same as `3d6+0`
    fn extract_operand(pair: Pair<Rule>) -> Result<u64> {
        match pair.into_inner().next() {
            Some(value) => value.as_str().parse::<u64>().map_err(|_| Error),
            None => Ok(0),
        }
    }
}
