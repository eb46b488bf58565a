//! Java source generation modules.

pub mod accessors;
pub mod constants;
pub mod constructors;
pub mod prologue;
pub mod runtime;
pub mod syntax;

pub use accessors::AccessorGenerator;
pub use constants::ConstantGenerator;
pub use constructors::ConstructorGenerator;
pub use prologue::PrologueGenerator;
pub use syntax::{Method, Param, Statement};
