//! A polymorphic value core for an OPC UA-shaped server runtime: the
//! built-in primitive kinds, an open registry of composite type
//! descriptors, generic construction/copy/destruction over any of them,
//! and a `Variant` + numeric-range engine for slicing scalars and
//! arrays by index. Everything above this layer (sessions, subscriptions,
//! wire encoding) is a thin collaborator built on top of it.

pub mod collaborators;
pub mod descriptor;
pub mod error;
pub mod leaf;
pub mod primitives;
pub mod range;
pub mod rng;
pub mod traversal;
pub mod value;
pub mod variant;

pub use descriptor::{Descriptor, DescriptorRegistry, Member, StructureDescriptor};
pub use error::StatusCode;
pub use primitives::{BuiltInKind, PrimitiveLayout};
pub use range::{NumericRange, RangeDimension};
pub use value::{Buffer, Field, Structure, Value};
pub use variant::{Variant, VariantContent};
