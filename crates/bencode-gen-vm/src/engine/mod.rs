//! Plan execution engine.

mod error;
mod value;
mod vm;


pub use error::RuntimeError;
pub use value::Value;
pub use vm::VM;
