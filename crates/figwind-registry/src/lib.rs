//! Component registry for figwind.
//!
//! Instance nodes are looked up here by their normalized name: the node name
//! with every non-alphanumeric character removed (`"Card / Primary"` becomes
//! `"CardPrimary"`). The registry only answers lookups; rendering the
//! component is left to whatever consumes the generated markup.

mod registry;

pub use registry::{
    normalize_component_name, ComponentBuilder, ComponentDescriptor, ComponentRegistry, PropSchema,
    PropType,
};
