//! Compiler for dynamic-column markers.
//!
//! SQL fragments may reference attributes stored inside a packed dynamic
//! column with the `(!path|type!)` notation. The compiler finds those
//! markers, expands each one into nested extraction calls and rewrites the
//! fragment around them:
//!
//! ```
//! use dyncol::{Dialect, FragmentRewriter};
//!
//! let sql = FragmentRewriter::compile_condition_fragment("(!one.two|int!) = 5", "dynamic_columns", &Dialect::default());
//! assert_eq!(sql, "COLUMN_GET(COLUMN_GET(dynamic_columns, 'one' AS BINARY), 'two' AS int) = 5");
//! ```

pub mod parser;
pub use parser::{AttributePath, Marker, MarkerScanner, TypeDescriptor, TypeKeyword};

pub mod compiler;
pub use compiler::{
    AccessorCompiler, AliasAssigner, CompileError, Dialect, DynValue, FragmentRewriter, SelectItem,
    SelectListCompiler, TypeCase, TypeInference, ValueKind, WriteCompiler,
};

pub mod entity;
pub use entity::{AttributeResolver, ColumnRef, DynamicAttributes, DynamicEntity, EntitySchema};

pub mod query;
pub use query::DynamicQuery;

pub mod config;
pub use config::{CompilerConfig, ConfigError};
