pub mod column_ref;
pub use column_ref::*;

pub mod dynamic_entity;
pub use dynamic_entity::*;

pub mod entity_schema;
pub use entity_schema::*;

pub mod dynamic_attributes;
pub use dynamic_attributes::*;

pub mod attribute_resolver;
pub use attribute_resolver::*;
