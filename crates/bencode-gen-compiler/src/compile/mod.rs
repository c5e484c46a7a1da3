//! Plan compilation: turn one type into an encoding plan.

mod compiler;
mod emptiness;
mod error;

#[cfg(test)]
mod compiler_tests;

pub use compiler::{Compiler, compile_type};
pub use emptiness::emptiness_test;
pub use error::{CompileError, CompileResult};
