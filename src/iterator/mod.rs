pub mod concat;
pub mod constants;
pub mod generator;
pub mod permutations;

pub use concat::ConcatVariants;
pub use generator::ExpressionGenerator;
pub use permutations::Permutations;
