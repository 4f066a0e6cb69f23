pub mod attribute_path;
pub use attribute_path::*;

pub mod type_descriptor;
pub use type_descriptor::*;

pub mod marker;
pub use marker::*;

pub mod marker_scanner;
pub use marker_scanner::*;
