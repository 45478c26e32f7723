use crate::dice::Modifier;
use crate::dice::Roll;
use crate::roll;
use crate::roll::Aggregation;
use crate::roll::Outcome;

/// Represent an evaluator
///
/// Trusts the roll description entirely: no validation happens here
/// and no error can be raised.
pub(crate) struct Evaluator;

impl Evaluator {
    /// Compute a whole roll under the requested aggregation
    pub(crate) fn eval<S: roll::Source>(
        roll: &Roll,
        aggregation: Aggregation,
        source: &mut S,
    ) -> Outcome {
        let rolls = Self::throw_all(roll, source);
        let mut total = aggregation.apply(&rolls);
        total = match roll.modifier {
            Modifier::Add => total + roll.operand as i64,
            Modifier::Sub => total - roll.operand as i64,
            _ => total,
        };
        Outcome::new(rolls, total)
    }

    /// Throw every dice, shifting each result by the per-dice modifier
    fn throw_all<S: roll::Source>(roll: &Roll, source: &mut S) -> Vec<i64> {
        let shift = match roll.modifier {
            Modifier::AddEach => roll.operand as i64,
            Modifier::SubEach => -(roll.operand as i64),
            _ => 0,
        };
        (0..roll.count)
            .map(|_| source.throw(roll.sides) as i64 + shift)
            .collect()
    }
}
