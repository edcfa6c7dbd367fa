use crate::descriptor::{Descriptor, StructureDescriptor};
use crate::leaf::data_value::DataValue;
use crate::leaf::diagnostic_info::DiagnosticInfo;
use crate::leaf::date_time::DateTime;
use crate::leaf::extension_object::ExtensionObject;
use crate::leaf::guid::Guid;
use crate::leaf::localized_text::LocalizedText;
use crate::leaf::node_id::{ExpandedNodeId, NodeId, QualifiedName};
use crate::leaf::string::ByteBuffer;
use crate::error::StatusCode;
use crate::variant::Variant;

/// Replacement for the C `EMPTY_ARRAY_SENTINEL` trick: an owned buffer is
/// either altogether absent (`Null`), present with zero elements without
/// owning any allocation (`Empty`), or a real, owned allocation.
#[derive(Debug, Clone, Default)]
pub enum Buffer<T> {
	#[default]
	Null,
	Empty,
	Owned(Vec<T>),
}

impl<T> Buffer<T> {
	pub fn len(&self) -> usize {
		match self {
			Buffer::Null | Buffer::Empty => 0,
			Buffer::Owned(v) => v.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Buffer::Null)
	}

	pub fn as_slice(&self) -> &[T] {
		match self {
			Buffer::Owned(v) => v.as_slice(),
			Buffer::Null | Buffer::Empty => &[],
		}
	}

	pub fn from_vec(v: Vec<T>) -> Self {
		if v.is_empty() {
			Buffer::Empty
		} else {
			Buffer::Owned(v)
		}
	}
}

impl<T: Clone> Buffer<T> {
	pub fn clone_contents(&self) -> Self {
		match self {
			Buffer::Null => Buffer::Null,
			Buffer::Empty => Buffer::Empty,
			Buffer::Owned(v) => Buffer::Owned(v.clone()),
		}
	}
}

impl<T: PartialEq> PartialEq for Buffer<T> {
	fn eq(&self, other: &Self) -> bool {
		self.as_slice() == other.as_slice() && self.is_null() == other.is_null()
	}
}

impl<T: Eq> Eq for Buffer<T> {}

/// A dynamically-typed value, walked generically by the traversal engine in
/// [`crate::traversal`] rather than dispatched through per-type generated
/// code. `Structure` is the open extension point: any descriptor registered
/// in a [`crate::descriptor::DescriptorRegistry`] is represented by one.
#[derive(Debug, Clone)]
pub enum Value {
	Boolean(bool),
	SByte(i8),
	Byte(u8),
	Int16(i16),
	UInt16(u16),
	Int32(i32),
	UInt32(u32),
	Int64(i64),
	UInt64(u64),
	Float(f32),
	Double(f64),
	String(ByteBuffer),
	DateTime(DateTime),
	Guid(Guid),
	ByteString(ByteBuffer),
	XmlElement(ByteBuffer),
	NodeId(Box<NodeId>),
	ExpandedNodeId(Box<ExpandedNodeId>),
	StatusCode(StatusCode),
	QualifiedName(Box<QualifiedName>),
	LocalizedText(Box<LocalizedText>),
	ExtensionObject(Box<ExtensionObject>),
	DataValue(Box<DataValue>),
	Variant(Box<Variant>),
	DiagnosticInfo(Box<DiagnosticInfo>),
	Structure(Structure),
}

/// An instance of a user-registered composite type: the fields are kept
/// parallel to `descriptor.members`, walked by index rather than by name.
#[derive(Debug, Clone)]
pub struct Structure {
	pub descriptor: &'static StructureDescriptor,
	pub fields: Vec<Field>,
}

#[derive(Debug, Clone)]
pub enum Field {
	Scalar(Value),
	Array(Buffer<Value>),
}

impl Value {
	pub fn builtin_kind(&self) -> Option<crate::primitives::BuiltInKind> {
		use crate::primitives::BuiltInKind as K;
		Some(match self {
			Value::Boolean(_) => K::Boolean,
			Value::SByte(_) => K::SByte,
			Value::Byte(_) => K::Byte,
			Value::Int16(_) => K::Int16,
			Value::UInt16(_) => K::UInt16,
			Value::Int32(_) => K::Int32,
			Value::UInt32(_) => K::UInt32,
			Value::Int64(_) => K::Int64,
			Value::UInt64(_) => K::UInt64,
			Value::Float(_) => K::Float,
			Value::Double(_) => K::Double,
			Value::String(_) => K::String,
			Value::DateTime(_) => K::DateTime,
			Value::Guid(_) => K::Guid,
			Value::ByteString(_) => K::ByteString,
			Value::XmlElement(_) => K::XmlElement,
			Value::NodeId(_) => K::NodeId,
			Value::ExpandedNodeId(_) => K::ExpandedNodeId,
			Value::StatusCode(_) => K::StatusCode,
			Value::QualifiedName(_) => K::QualifiedName,
			Value::LocalizedText(_) => K::LocalizedText,
			Value::ExtensionObject(_) => K::ExtensionObject,
			Value::DataValue(_) => K::DataValue,
			Value::Variant(_) => K::Variant,
			Value::DiagnosticInfo(_) => K::DiagnosticInfo,
			Value::Structure(_) => return None,
		})
	}

	pub fn descriptor(&self) -> Descriptor {
		match self {
			Value::Structure(s) => Descriptor::Composite(s.descriptor),
			other => Descriptor::Builtin(other.builtin_kind().expect("non-structure value always has a builtin kind")),
		}
	}
}

impl Default for Value {
	fn default() -> Self {
		Value::Boolean(false)
	}
}
