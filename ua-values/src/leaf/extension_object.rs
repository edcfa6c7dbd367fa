use std::sync::Arc;

use crate::descriptor::Descriptor;
use crate::error::StatusCode;
use crate::leaf::node_id::NodeId;
use crate::leaf::string::ByteString;
use crate::primitives::BuiltInKind;
use crate::value::Value;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Encoding {
	#[default]
	NoBody,
	ByteString,
	Xml,
}

/// A value that may not have been decoded yet, or that is held without
/// ownership of the decoded payload. Copying a `Shared` extension object
/// always promotes it to an owning `Decoded` one, mirroring the "no-delete
/// becomes owning on copy" rule the original encoding used a raw,
/// non-owning pointer for.
#[derive(Debug, Clone)]
pub enum ExtensionObject {
	Encoded { type_id: NodeId, encoding: Encoding, body: ByteString },
	Decoded { descriptor: Descriptor, value: Box<Value> },
	Shared { descriptor: Descriptor, value: Arc<Value> },
}

impl Default for ExtensionObject {
	fn default() -> Self {
		ExtensionObject::Encoded { type_id: NodeId::default(), encoding: Encoding::NoBody, body: ByteString::NULL }
	}
}

impl ExtensionObject {
	pub fn copy(&self) -> Result<ExtensionObject, StatusCode> {
		match self {
			ExtensionObject::Encoded { type_id, encoding, body } => Ok(ExtensionObject::Encoded {
				type_id: type_id.clone(),
				encoding: *encoding,
				body: body.clone(),
			}),
			ExtensionObject::Decoded { descriptor, value } => Ok(ExtensionObject::Decoded {
				descriptor: *descriptor,
				value: Box::new(crate::traversal::copy(value)?),
			}),
			ExtensionObject::Shared { descriptor, value } => Ok(ExtensionObject::Decoded {
				descriptor: *descriptor,
				value: Box::new(crate::traversal::copy(value)?),
			}),
		}
	}
}

impl Value {
	pub fn as_extension_object(&self) -> Option<&ExtensionObject> {
		match self {
			Value::ExtensionObject(e) => Some(e),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_is_no_body_encoded() {
		let e = ExtensionObject::default();
		assert!(matches!(e, ExtensionObject::Encoded { encoding: Encoding::NoBody, .. }));
	}

	#[test]
	fn copying_shared_promotes_to_decoded() {
		let descriptor = Descriptor::Builtin(BuiltInKind::Int32);
		let shared = ExtensionObject::Shared { descriptor, value: Arc::new(Value::Int32(7)) };
		let copied = shared.copy().unwrap();
		assert!(matches!(copied, ExtensionObject::Decoded { .. }));
	}
}
