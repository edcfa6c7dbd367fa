//! Generic, descriptor-driven construction, deep copy and deep destruction
//! of any [`Value`]. There is exactly one of each operation here; every
//! composite type, however it was registered, is walked through the same
//! code instead of generated per-type marshalling.

use crate::descriptor::{Descriptor, StructureDescriptor};
use crate::error::StatusCode;
use crate::leaf::data_value::DataValue;
use crate::leaf::date_time::DateTime;
use crate::leaf::diagnostic_info::DiagnosticInfo;
use crate::leaf::extension_object::ExtensionObject;
use crate::leaf::guid::Guid;
use crate::leaf::localized_text::LocalizedText;
use crate::leaf::node_id::{ExpandedNodeId, NodeId, QualifiedName};
use crate::leaf::string::ByteBuffer;
use crate::primitives::BuiltInKind;
use crate::value::{Buffer, Field, Structure, Value};
use crate::variant::Variant;

/// The zero/null-state value for a descriptor: what a value is reset to by
/// `delete_members`, and what every structure member starts out as.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn new(descriptor: Descriptor) -> Value {
	match descriptor {
		Descriptor::Builtin(kind) => new_builtin(kind),
		Descriptor::Composite(d) => Value::Structure(new_structure(d)),
	}
}

fn new_builtin(kind: BuiltInKind) -> Value {
	match kind {
		BuiltInKind::Boolean => Value::Boolean(false),
		BuiltInKind::SByte => Value::SByte(0),
		BuiltInKind::Byte => Value::Byte(0),
		BuiltInKind::Int16 => Value::Int16(0),
		BuiltInKind::UInt16 => Value::UInt16(0),
		BuiltInKind::Int32 => Value::Int32(0),
		BuiltInKind::UInt32 => Value::UInt32(0),
		BuiltInKind::Int64 => Value::Int64(0),
		BuiltInKind::UInt64 => Value::UInt64(0),
		BuiltInKind::Float => Value::Float(0.0),
		BuiltInKind::Double => Value::Double(0.0),
		BuiltInKind::String => Value::String(ByteBuffer::NULL),
		BuiltInKind::DateTime => Value::DateTime(DateTime::default()),
		BuiltInKind::Guid => Value::Guid(Guid::NULL),
		BuiltInKind::ByteString => Value::ByteString(ByteBuffer::NULL),
		BuiltInKind::XmlElement => Value::XmlElement(ByteBuffer::NULL),
		BuiltInKind::NodeId => Value::NodeId(Box::new(NodeId::default())),
		BuiltInKind::ExpandedNodeId => Value::ExpandedNodeId(Box::new(ExpandedNodeId::default())),
		BuiltInKind::StatusCode => Value::StatusCode(StatusCode::GOOD),
		BuiltInKind::QualifiedName => Value::QualifiedName(Box::new(QualifiedName::default())),
		BuiltInKind::LocalizedText => Value::LocalizedText(Box::new(LocalizedText::default())),
		BuiltInKind::ExtensionObject => Value::ExtensionObject(Box::new(ExtensionObject::default())),
		BuiltInKind::DataValue => Value::DataValue(Box::new(DataValue::default())),
		BuiltInKind::Variant => Value::Variant(Box::new(Variant::default())),
		BuiltInKind::DiagnosticInfo => Value::DiagnosticInfo(Box::new(DiagnosticInfo::default())),
	}
}

fn new_structure(descriptor: &'static StructureDescriptor) -> Structure {
	let fields = descriptor
		.members
		.iter()
		.map(|member| match member.is_array {
			true => Field::Array(Buffer::Null),
			false => Field::Scalar(new(member.descriptor)),
		})
		.collect();
	Structure { descriptor, fields }
}

/// Deep-copies `src`. On failure the partially built destination is simply
/// dropped without ever having been observable to the caller, which is the
/// same "destination never left half-filled" guarantee the original
/// provided by zero-initialising the destination up front and rolling back
/// member-by-member.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn copy(src: &Value) -> Result<Value, StatusCode> {
	Ok(match src {
		Value::Boolean(v) => Value::Boolean(*v),
		Value::SByte(v) => Value::SByte(*v),
		Value::Byte(v) => Value::Byte(*v),
		Value::Int16(v) => Value::Int16(*v),
		Value::UInt16(v) => Value::UInt16(*v),
		Value::Int32(v) => Value::Int32(*v),
		Value::UInt32(v) => Value::UInt32(*v),
		Value::Int64(v) => Value::Int64(*v),
		Value::UInt64(v) => Value::UInt64(*v),
		Value::Float(v) => Value::Float(*v),
		Value::Double(v) => Value::Double(*v),
		Value::String(b) => Value::String(b.clone()),
		Value::DateTime(v) => Value::DateTime(*v),
		Value::Guid(v) => Value::Guid(*v),
		Value::ByteString(b) => Value::ByteString(b.clone()),
		Value::XmlElement(b) => Value::XmlElement(b.clone()),
		Value::NodeId(n) => Value::NodeId(n.clone()),
		Value::ExpandedNodeId(n) => Value::ExpandedNodeId(n.clone()),
		Value::StatusCode(s) => Value::StatusCode(*s),
		Value::QualifiedName(q) => Value::QualifiedName(q.clone()),
		Value::LocalizedText(t) => Value::LocalizedText(t.clone()),
		Value::ExtensionObject(e) => Value::ExtensionObject(Box::new(e.copy()?)),
		Value::DataValue(d) => Value::DataValue(Box::new(d.copy()?)),
		Value::Variant(v) => Value::Variant(Box::new(v.copy()?)),
		Value::DiagnosticInfo(d) => Value::DiagnosticInfo(d.clone()),
		Value::Structure(s) => Value::Structure(copy_structure(s)?),
	})
}

fn copy_structure(src: &Structure) -> Result<Structure, StatusCode> {
	let mut fields = Vec::with_capacity(src.fields.len());
	for field in &src.fields {
		fields.push(match field {
			Field::Scalar(v) => Field::Scalar(copy(v)?),
			Field::Array(buffer) => Field::Array(array_copy(buffer)?),
		});
	}
	Ok(Structure { descriptor: src.descriptor, fields })
}

/// Resets `value` to its zero/null state, freeing whatever it owned. Calling
/// this twice in a row is a no-op after the first call: the second call
/// just rebuilds the same zero state from itself.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn delete_members(value: &mut Value) {
	*value = new(value.descriptor());
}

/// Drops `value` outright. Provided for symmetry with `new`/`delete_members`
/// — under `Drop` this is just scope exit.
pub fn delete(value: Value) {
	drop(value);
}

pub fn array_new(len: usize, descriptor: Descriptor) -> Buffer<Value> {
	match len {
		0 => Buffer::Empty,
		len => Buffer::Owned((0..len).map(|_| new(descriptor)).collect()),
	}
}

pub fn array_copy(src: &Buffer<Value>) -> Result<Buffer<Value>, StatusCode> {
	match src {
		Buffer::Null => Ok(Buffer::Null),
		Buffer::Empty => Ok(Buffer::Empty),
		Buffer::Owned(values) => {
			let mut out = Vec::with_capacity(values.len());
			for value in values {
				out.push(copy(value)?);
			}
			Ok(Buffer::Owned(out))
		}
	}
}

pub fn array_delete(buffer: &mut Buffer<Value>) {
	*buffer = Buffer::Null;
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::descriptor::{DescriptorRegistry, Member};

	#[test]
	fn new_builtin_produces_the_zero_value() {
		assert!(matches!(new(Descriptor::Builtin(BuiltInKind::Int32)), Value::Int32(0)));
		assert!(matches!(new(Descriptor::Builtin(BuiltInKind::String)), Value::String(b) if b.is_null()));
	}

	#[test]
	fn copy_then_delete_members_resets_to_zero_state() {
		let mut v = Value::String(ByteBuffer::from_chars("hello"));
		let copied = copy(&v).unwrap();
		assert!(matches!(&copied, Value::String(b) if b.equal(&ByteBuffer::from_chars("hello"))));

		delete_members(&mut v);
		assert!(matches!(&v, Value::String(b) if b.is_null()));
		// idempotent: a second delete_members on the zero state is a no-op
		delete_members(&mut v);
		assert!(matches!(&v, Value::String(b) if b.is_null()));
	}

	#[test]
	fn composite_copy_walks_every_member() {
		let registry = DescriptorRegistry::leaked();
		let point = registry.declare("Point", &[
			Member { name: "x", descriptor: Descriptor::Builtin(BuiltInKind::Double), is_array: false },
			Member { name: "y", descriptor: Descriptor::Builtin(BuiltInKind::Double), is_array: false },
		]);

		let value = Value::Structure(Structure {
			descriptor: point,
			fields: vec![Field::Scalar(Value::Double(1.5)), Field::Scalar(Value::Double(2.5))],
		});

		let copied = copy(&value).unwrap();
		match copied {
			Value::Structure(s) => {
				assert!(matches!(s.fields[0], Field::Scalar(Value::Double(x)) if x == 1.5));
				assert!(matches!(s.fields[1], Field::Scalar(Value::Double(y)) if y == 2.5));
			}
			_ => panic!("expected a Structure value"),
		}
	}

	#[test]
	fn array_new_of_zero_length_is_the_empty_sentinel_not_null() {
		let b = array_new(0, Descriptor::Builtin(BuiltInKind::Int32));
		assert!(matches!(b, Buffer::Empty));
	}

	#[test]
	fn array_copy_preserves_null_vs_empty_vs_owned() {
		assert!(matches!(array_copy(&Buffer::Null).unwrap(), Buffer::Null));
		assert!(matches!(array_copy(&Buffer::Empty).unwrap(), Buffer::Empty));
		let owned = Buffer::Owned(vec![Value::Int32(1), Value::Int32(2)]);
		assert!(matches!(array_copy(&owned).unwrap(), Buffer::Owned(v) if v.len() == 2));
	}
}
