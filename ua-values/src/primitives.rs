use ua_values_derive::FromRepr;

/// The closed set of built-in value kinds. Every composite type is, in the
/// end, a tree whose leaves are one of these.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, FromRepr)]
#[repr(u8)]
pub enum BuiltInKind {
	Boolean = 0,
	SByte = 1,
	Byte = 2,
	Int16 = 3,
	UInt16 = 4,
	Int32 = 5,
	UInt32 = 6,
	Int64 = 7,
	UInt64 = 8,
	Float = 9,
	Double = 10,
	String = 11,
	DateTime = 12,
	Guid = 13,
	ByteString = 14,
	XmlElement = 15,
	NodeId = 16,
	ExpandedNodeId = 17,
	StatusCode = 18,
	QualifiedName = 19,
	LocalizedText = 20,
	ExtensionObject = 21,
	DataValue = 22,
	Variant = 23,
	DiagnosticInfo = 24,
}

impl BuiltInKind {
	pub const COUNT: usize = 25;

	pub fn layout(self) -> &'static PrimitiveLayout {
		&PRIMITIVE_TABLE[self as usize]
	}

	pub fn is_fixed_size(self) -> bool {
		self.layout().fixed_size
	}

	pub fn name(self) -> &'static str {
		match self {
			BuiltInKind::Boolean => "Boolean",
			BuiltInKind::SByte => "SByte",
			BuiltInKind::Byte => "Byte",
			BuiltInKind::Int16 => "Int16",
			BuiltInKind::UInt16 => "UInt16",
			BuiltInKind::Int32 => "Int32",
			BuiltInKind::UInt32 => "UInt32",
			BuiltInKind::Int64 => "Int64",
			BuiltInKind::UInt64 => "UInt64",
			BuiltInKind::Float => "Float",
			BuiltInKind::Double => "Double",
			BuiltInKind::String => "String",
			BuiltInKind::DateTime => "DateTime",
			BuiltInKind::Guid => "Guid",
			BuiltInKind::ByteString => "ByteString",
			BuiltInKind::XmlElement => "XmlElement",
			BuiltInKind::NodeId => "NodeId",
			BuiltInKind::ExpandedNodeId => "ExpandedNodeId",
			BuiltInKind::StatusCode => "StatusCode",
			BuiltInKind::QualifiedName => "QualifiedName",
			BuiltInKind::LocalizedText => "LocalizedText",
			BuiltInKind::ExtensionObject => "ExtensionObject",
			BuiltInKind::DataValue => "DataValue",
			BuiltInKind::Variant => "Variant",
			BuiltInKind::DiagnosticInfo => "DiagnosticInfo",
		}
	}
}

/// Size, alignment and copy behaviour of a built-in kind, mirroring the
/// `memSize` / `fixedSize` fields a generated type descriptor would carry.
#[derive(Debug, Copy, Clone)]
pub struct PrimitiveLayout {
	pub size: usize,
	pub align: usize,
	pub fixed_size: bool,
}

const fn layout<T>(fixed_size: bool) -> PrimitiveLayout {
	PrimitiveLayout {
		size: std::mem::size_of::<T>(),
		align: std::mem::align_of::<T>(),
		fixed_size,
	}
}

static PRIMITIVE_TABLE: [PrimitiveLayout; BuiltInKind::COUNT] = [
	layout::<bool>(true),                  // Boolean
	layout::<i8>(true),                    // SByte
	layout::<u8>(true),                    // Byte
	layout::<i16>(true),                   // Int16
	layout::<u16>(true),                   // UInt16
	layout::<i32>(true),                   // Int32
	layout::<u32>(true),                   // UInt32
	layout::<i64>(true),                   // Int64
	layout::<u64>(true),                   // UInt64
	layout::<f32>(true),                   // Float
	layout::<f64>(true),                   // Double
	layout::<usize>(false),                // String (len-prefixed buffer)
	layout::<i64>(true),                   // DateTime (100ns ticks)
	layout::<(u32, u16, u16, [u8; 8])>(true), // Guid
	layout::<usize>(false),                // ByteString
	layout::<usize>(false),                // XmlElement
	layout::<usize>(false),                // NodeId (tagged union)
	layout::<usize>(false),                // ExpandedNodeId
	layout::<u32>(true),                   // StatusCode
	layout::<usize>(false),                // QualifiedName
	layout::<usize>(false),                // LocalizedText
	layout::<usize>(false),                // ExtensionObject
	layout::<usize>(false),                // DataValue
	layout::<usize>(false),                // Variant
	layout::<usize>(false),                // DiagnosticInfo
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_repr_round_trips_every_variant() {
		for i in 0..BuiltInKind::COUNT as u8 {
			assert!(BuiltInKind::from_repr(i).is_some());
		}
		assert!(BuiltInKind::from_repr(BuiltInKind::COUNT as u8).is_none());
	}

	#[test]
	fn fixed_size_matches_trivially_copyable_kinds() {
		assert!(BuiltInKind::Int32.is_fixed_size());
		assert!(BuiltInKind::DateTime.is_fixed_size());
		assert!(BuiltInKind::Guid.is_fixed_size());
		assert!(!BuiltInKind::String.is_fixed_size());
		assert!(!BuiltInKind::Variant.is_fixed_size());
	}
}
