use std::sync::Arc;

use crate::descriptor::Descriptor;
use crate::error::StatusCode;
use crate::value::{Buffer, Value};

/// A scalar or n-dimensional array of any described type. `Shared*` variants
/// replace the original's "Data-no-delete" / "external pointer" storage
/// modes with safe reference counting: `copy` always promotes them to an
/// owned `Scalar`/`Array`, the same rule the original applied when a
/// no-delete `ExtensionObject` was copied.
#[derive(Debug, Clone, Default)]
pub struct Variant {
	pub descriptor: Option<Descriptor>,
	pub content: VariantContent,
	pub array_dimensions: Option<Vec<u32>>,
}

#[derive(Debug, Clone, Default)]
pub enum VariantContent {
	#[default]
	Empty,
	Scalar(Box<Value>),
	SharedScalar(Arc<Value>),
	Array(Buffer<Value>),
	SharedArray(Arc<[Value]>),
}

impl Variant {
	pub fn is_scalar(&self) -> bool {
		self.array_dimensions.is_none()
			&& matches!(self.content, VariantContent::Scalar(_) | VariantContent::SharedScalar(_))
	}

	pub fn array_length(&self) -> usize {
		match &self.content {
			VariantContent::Empty => 0,
			VariantContent::Scalar(_) | VariantContent::SharedScalar(_) => 1,
			VariantContent::Array(b) => b.len(),
			VariantContent::SharedArray(a) => a.len(),
		}
	}

	pub fn set_scalar(descriptor: Descriptor, value: Value) -> Variant {
		Variant { descriptor: Some(descriptor), content: VariantContent::Scalar(Box::new(value)), array_dimensions: None }
	}

	pub fn set_scalar_shared(descriptor: Descriptor, value: Arc<Value>) -> Variant {
		Variant { descriptor: Some(descriptor), content: VariantContent::SharedScalar(value), array_dimensions: None }
	}

	pub fn set_array(descriptor: Descriptor, values: Buffer<Value>) -> Variant {
		Variant { descriptor: Some(descriptor), content: VariantContent::Array(values), array_dimensions: None }
	}

	pub fn set_array_shared(descriptor: Descriptor, values: Arc<[Value]>) -> Variant {
		Variant { descriptor: Some(descriptor), content: VariantContent::SharedArray(values), array_dimensions: None }
	}

	/// `∏ arrayDimensions == arrayLength` must hold whenever a shape is given.
	pub fn validate_dimensions(&self) -> Result<(), StatusCode> {
		match &self.array_dimensions {
			None => Ok(()),
			Some(dims) => {
				let product: usize = dims.iter().map(|&d| d as usize).product();
				match product == self.array_length() {
					true => Ok(()),
					false => Err(StatusCode::BAD_INTERNAL_ERROR),
				}
			}
		}
	}

	/// The shape this Variant's range operations walk: its own
	/// `arrayDimensions` if given, otherwise a single dimension of
	/// `arrayLength` (scalars are virtualised as a length-1 array).
	pub(crate) fn own_dimensions(&self) -> Vec<u32> {
		match &self.array_dimensions {
			Some(dims) => dims.clone(),
			None => vec![self.array_length() as u32],
		}
	}

	pub fn copy(&self) -> Result<Variant, StatusCode> {
		if self.descriptor.is_none() && !matches!(self.content, VariantContent::Empty) {
			return Err(StatusCode::BAD_INTERNAL_ERROR);
		}
		let content = match &self.content {
			VariantContent::Empty => VariantContent::Empty,
			VariantContent::Scalar(v) => VariantContent::Scalar(Box::new(crate::traversal::copy(v)?)),
			VariantContent::SharedScalar(v) => VariantContent::Scalar(Box::new(crate::traversal::copy(v)?)),
			VariantContent::Array(b) => VariantContent::Array(crate::traversal::array_copy(b)?),
			VariantContent::SharedArray(a) => {
				let mut out = Vec::with_capacity(a.len());
				for v in a.iter() {
					out.push(crate::traversal::copy(v)?);
				}
				VariantContent::Array(Buffer::from_vec(out))
			}
		};
		Ok(Variant { descriptor: self.descriptor, content, array_dimensions: self.array_dimensions.clone() })
	}
}
