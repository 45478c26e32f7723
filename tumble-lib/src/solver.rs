use crate::dice::Roll;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::roll;
use crate::roll::Aggregation;
use crate::roll::Outcome;
use rand::Rng;

/// Default random dice roller
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> roll::Source for RandomSource<'_, T> {
    fn throw(&mut self, sides: u64) -> u64 {
        self.generator.gen_range(1..=sides)
    }
}

/// Represent a solver and holds the parsed roll
#[derive(Clone, Debug)]
pub struct Solver(Roll);

impl Solver {
    pub fn new(input: &str) -> Result<Self> {
        Ok(Solver(input.parse()?))
    }

    /// Return the parsed roll description
    pub fn roll(&self) -> &Roll {
        &self.0
    }

    /// Solve the roll using the default Rng source
    pub fn solve(&self, aggregation: Aggregation) -> Outcome {
        self.solve_with(aggregation, &mut rand::thread_rng())
    }

    /// Solve the roll using the provided Rng source
    pub fn solve_with<R: Rng>(&self, aggregation: Aggregation, generator: &mut R) -> Outcome {
        self.solve_with_source(aggregation, &mut RandomSource { generator })
    }

    /// Solve the roll using the provided source
    pub fn solve_with_source<S: roll::Source>(
        &self,
        aggregation: Aggregation,
        source: &mut S,
    ) -> Outcome {
        Evaluator::eval(&self.0, aggregation, source)
    }
}
