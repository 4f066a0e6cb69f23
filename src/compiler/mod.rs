pub mod compile_error;
pub use compile_error::*;

pub mod dialect;
pub use dialect::*;

pub mod accessor_compiler;
pub use accessor_compiler::*;

pub mod dyn_value;
pub use dyn_value::*;

pub mod type_inference;
pub use type_inference::*;

pub mod write_compiler;
pub use write_compiler::*;

pub mod fragment_rewriter;
pub use fragment_rewriter::*;

pub mod alias_assigner;
pub use alias_assigner::*;

pub mod select_list_compiler;
pub use select_list_compiler::*;
