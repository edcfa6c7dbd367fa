use crate::descriptor::Descriptor;
use crate::error::StatusCode;
use crate::primitives::BuiltInKind;
use crate::value::{Buffer, Field, Structure, Value};
use crate::variant::{Variant, VariantContent};

/// One inclusive `[min, max]` slice along a single array dimension.
#[derive(Debug, Copy, Clone)]
pub struct RangeDimension {
	pub min: u32,
	pub max: u32,
}

/// An ordered sequence of per-dimension slices describing a rectangular
/// subregion of an n-dimensional array.
#[derive(Debug, Clone, Default)]
pub struct NumericRange {
	pub dimensions: Vec<RangeDimension>,
}

impl NumericRange {
	pub fn new(dimensions: Vec<RangeDimension>) -> Self {
		NumericRange { dimensions }
	}
}

#[derive(Debug, Copy, Clone)]
pub(crate) struct Strides {
	pub total: usize,
	pub block: usize,
	pub stride: usize,
	pub first: usize,
}

/// Walks `dims` innermost-to-outermost, freezing `block`/`stride` at the
/// first dimension whose range doesn't cover the whole dimension. Every
/// dimension outside that point is known to be copied as one contiguous
/// run, so the rest of the walk only needs to track the flat offset of the
/// first selected element.
pub(crate) fn compute_strides(dims: &[u32], range: &NumericRange) -> Result<Strides, StatusCode> {
	if range.dimensions.len() != dims.len() {
		return Err(StatusCode::BAD_INDEX_RANGE_NO_DATA);
	}

	let mut count: usize = 1;
	for (i, d) in range.dimensions.iter().enumerate() {
		if d.min > d.max {
			return Err(StatusCode::BAD_INDEX_RANGE_INVALID);
		}
		if d.max as usize >= dims[i] as usize {
			return Err(StatusCode::BAD_INDEX_RANGE_NO_DATA);
		}
		count *= (d.max - d.min + 1) as usize;
	}

	let mut block = count;
	let mut stride: usize = dims.iter().map(|&d| d as usize).product();
	let mut first: usize = 0;
	let mut running: usize = 1;
	let mut found_contiguous = false;

	for k in (0..dims.len()).rev() {
		let dimrange = (1 + range.dimensions[k].max - range.dimensions[k].min) as usize;
		if !found_contiguous && dimrange != dims[k] as usize {
			found_contiguous = true;
			block = running * dimrange;
			stride = running * dims[k] as usize;
		}
		first += running * range.dimensions[k].min as usize;
		running *= dims[k] as usize;
	}

	Ok(Strides { total: count, block, stride, first })
}

fn is_string_like(descriptor: Descriptor) -> bool {
	match descriptor {
		Descriptor::Builtin(BuiltInKind::String | BuiltInKind::ByteString | BuiltInKind::XmlElement) => true,
		Descriptor::Composite(d) => d.is_string_like(),
		Descriptor::Builtin(_) => false,
	}
}

fn as_byte_buffer(value: &Value) -> Option<&crate::leaf::string::ByteBuffer> {
	match value {
		Value::String(b) | Value::ByteString(b) | Value::XmlElement(b) => Some(b),
		_ => None,
	}
}

fn rewrap_byte_buffer(descriptor: Descriptor, buffer: crate::leaf::string::ByteBuffer) -> Value {
	match descriptor {
		Descriptor::Builtin(BuiltInKind::ByteString) => Value::ByteString(buffer),
		Descriptor::Builtin(BuiltInKind::XmlElement) => Value::XmlElement(buffer),
		_ => Value::String(buffer),
	}
}

/// Continues a range descent one level inside a single element: either a
/// nested Variant (`remaining` applies to its own shape) or a string-like
/// scalar — a builtin String/ByteString/XmlElement, or a composite whose
/// sole member is a Byte array — the cases the original allowed a
/// multi-level NumericRange to reach into.
fn descend(value: &Value, descriptor: Descriptor, remaining: &NumericRange) -> Result<Value, StatusCode> {
	if let Descriptor::Builtin(BuiltInKind::Variant) = descriptor {
		let Value::Variant(inner) = value else { return Err(StatusCode::BAD_INTERNAL_ERROR) };
		return Ok(Value::Variant(Box::new(inner.copy_range(remaining)?)));
	}

	if !is_string_like(descriptor) {
		return Err(StatusCode::BAD_INDEX_RANGE_NO_DATA);
	}
	if remaining.dimensions.len() != 1 {
		return Err(StatusCode::BAD_INDEX_RANGE_NO_DATA);
	}
	let dim = remaining.dimensions[0];

	match descriptor {
		Descriptor::Composite(d) => {
			let Value::Structure(s) = value else { return Err(StatusCode::BAD_INTERNAL_ERROR) };
			let Field::Array(bytes) = &s.fields[0] else { return Err(StatusCode::BAD_INTERNAL_ERROR) };
			let elements = bytes.as_slice();
			if dim.min > dim.max {
				return Err(StatusCode::BAD_INDEX_RANGE_INVALID);
			}
			if dim.max as usize >= elements.len() {
				return Err(StatusCode::BAD_INDEX_RANGE_NO_DATA);
			}
			let sliced = elements[dim.min as usize..=dim.max as usize].to_vec();
			Ok(Value::Structure(Structure { descriptor: d, fields: vec![Field::Array(Buffer::from_vec(sliced))] }))
		}
		_ => {
			let buffer = as_byte_buffer(value).ok_or(StatusCode::BAD_INTERNAL_ERROR)?;
			let sliced = buffer.copy_sub_range(dim.min, dim.max)?;
			Ok(rewrap_byte_buffer(descriptor, sliced))
		}
	}
}

impl Variant {
	fn as_elements(&self) -> &[Value] {
		match &self.content {
			VariantContent::Empty => &[],
			VariantContent::Scalar(v) => std::slice::from_ref(v),
			VariantContent::SharedScalar(v) => std::slice::from_ref(v),
			VariantContent::Array(b) => b.as_slice(),
			VariantContent::SharedArray(a) => a,
		}
	}

	/// Deep-copies a rectangular subregion of this Variant, recursing into
	/// nested Variants or string-like scalars for any range dimensions left
	/// over after this level's own shape is consumed.
	#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
	pub fn copy_range(&self, range: &NumericRange) -> Result<Variant, StatusCode> {
		let descriptor = self.descriptor.ok_or(StatusCode::BAD_INTERNAL_ERROR)?;
		let is_scalar = self.is_scalar();

		let (this_dims, this_range, next_range) = if is_scalar {
			(
				vec![1u32],
				NumericRange::new(vec![RangeDimension { min: 0, max: 0 }]),
				range.clone(),
			)
		} else {
			let own_dims = self.own_dimensions();
			let dims_count = own_dims.len();
			if dims_count > range.dimensions.len() {
				return Err(StatusCode::BAD_INDEX_RANGE_NO_DATA);
			}
			(
				own_dims,
				NumericRange::new(range.dimensions[..dims_count].to_vec()),
				NumericRange::new(range.dimensions[dims_count..].to_vec()),
			)
		};

		let strides = compute_strides(&this_dims, &this_range)?;
		let elements = self.as_elements();
		let block_count = strides.total / strides.block.max(1);

		let mut out = Vec::with_capacity(strides.total);
		for i in 0..block_count {
			let base = strides.first + i * strides.stride;
			for j in 0..strides.block {
				let element = &elements[base + j];
				let copied = if next_range.dimensions.is_empty() {
					crate::traversal::copy(element)?
				} else {
					descend(element, descriptor, &next_range)?
				};
				out.push(copied);
			}
		}

		if is_scalar {
			return Ok(Variant {
				descriptor: Some(descriptor),
				content: VariantContent::Scalar(Box::new(
					out.into_iter().next().ok_or(StatusCode::BAD_INTERNAL_ERROR)?,
				)),
				array_dimensions: None,
			});
		}

		// The sliced result always records its own shape, even when `self`
		// carried no explicit dimensions.
		let array_dimensions: Option<Vec<u32>> =
			Some(this_range.dimensions.iter().map(|d| d.max - d.min + 1).collect());

		Ok(Variant {
			descriptor: Some(descriptor),
			content: VariantContent::Array(Buffer::from_vec(out)),
			array_dimensions,
		})
	}

	/// Moves `incoming` into the sliced positions described by `range`,
	/// dropping whatever value previously occupied each position. `incoming`
	/// is left empty: ownership of every element has been moved out of it,
	/// the safe-Rust equivalent of the original zeroing the source buffer.
	#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
	pub fn set_range(&mut self, incoming: Vec<Value>, range: &NumericRange) -> Result<(), StatusCode> {
		self.set_range_impl(incoming, range)
	}

	/// Deep-copies `incoming` into the sliced positions described by `range`,
	/// leaving the source untouched.
	pub fn set_range_copy(&mut self, incoming: &[Value], range: &NumericRange) -> Result<(), StatusCode> {
		let descriptor = self.descriptor.ok_or(StatusCode::BAD_INTERNAL_ERROR)?;
		let mut cloned = Vec::with_capacity(incoming.len());
		for item in incoming {
			cloned.push(crate::traversal::copy(item)?);
		}
		self.set_range_impl(cloned, range)
	}

	fn set_range_impl(&mut self, mut incoming: Vec<Value>, range: &NumericRange) -> Result<(), StatusCode> {
		let dims = self.own_dimensions();
		let strides = compute_strides(&dims, range)?;
		if strides.total != incoming.len() {
			return Err(StatusCode::BAD_INDEX_RANGE_INVALID);
		}

		let dest = match &mut self.content {
			VariantContent::Array(Buffer::Owned(values)) => values,
			_ => return Err(StatusCode::BAD_INTERNAL_ERROR),
		};

		let mut drained = incoming.drain(..);
		let block_count = strides.total / strides.block.max(1);
		for i in 0..block_count {
			let base = strides.first + i * strides.stride;
			for j in 0..strides.block {
				dest[base + j] = drained.next().expect("strides.total == incoming.len()");
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn array_variant(values: Vec<u32>, dims: Vec<u32>) -> Variant {
		let mut v = Variant::set_array(
			Descriptor::Builtin(BuiltInKind::UInt32),
			Buffer::Owned(values.into_iter().map(Value::UInt32).collect()),
		);
		v.array_dimensions = Some(dims);
		v
	}

	fn dim(min: u32, max: u32) -> RangeDimension {
		RangeDimension { min, max }
	}

	#[test]
	fn strides_for_a_whole_contiguous_row() {
		let dims = [2u32, 3];
		let range = NumericRange::new(vec![dim(0, 0), dim(0, 2)]);
		let s = compute_strides(&dims, &range).unwrap();
		assert_eq!((s.total, s.block, s.stride, s.first), (3, 3, 6, 0));
	}

	#[test]
	fn strides_for_a_single_column() {
		let dims = [2u32, 3];
		let range = NumericRange::new(vec![dim(0, 1), dim(0, 0)]);
		let s = compute_strides(&dims, &range).unwrap();
		assert_eq!((s.total, s.block, s.stride, s.first), (2, 1, 3, 0));
	}

	#[test]
	fn copy_range_extracts_a_whole_row() {
		let src = array_variant(vec![10, 20, 30, 40, 50, 60], vec![2, 3]);
		let range = NumericRange::new(vec![dim(0, 0), dim(0, 2)]);
		let dst = src.copy_range(&range).unwrap();
		let values: Vec<u32> = dst.as_elements().iter().map(|v| match v {
			Value::UInt32(n) => *n,
			_ => unreachable!(),
		}).collect();
		assert_eq!(values, vec![10, 20, 30]);
		assert_eq!(dst.array_dimensions, Some(vec![1, 3]));
	}

	#[test]
	fn copy_range_extracts_a_single_column() {
		let src = array_variant(vec![10, 20, 30, 40, 50, 60], vec![2, 3]);
		let range = NumericRange::new(vec![dim(0, 1), dim(0, 0)]);
		let dst = src.copy_range(&range).unwrap();
		let values: Vec<u32> = dst.as_elements().iter().map(|v| match v {
			Value::UInt32(n) => *n,
			_ => unreachable!(),
		}).collect();
		assert_eq!(values, vec![10, 40]);
		assert_eq!(dst.array_dimensions, Some(vec![2, 1]));
	}

	#[test]
	fn copy_range_descends_into_a_string_like_scalar() {
		let text = crate::leaf::string::ByteBuffer::from_chars("abcdefg");
		let v = Variant::set_scalar(Descriptor::Builtin(BuiltInKind::String), Value::String(text));
		let range = NumericRange::new(vec![dim(2, 4)]);
		let dst = v.copy_range(&range).unwrap();
		match &dst.content {
			VariantContent::Scalar(boxed) => match boxed.as_ref() {
				Value::String(b) => assert_eq!(b.as_str().unwrap(), "cde"),
				_ => panic!("expected a String value"),
			},
			_ => panic!("expected a scalar Variant"),
		}
	}

	#[test]
	fn copy_range_records_shape_even_without_explicit_dimensions() {
		let src = Variant::set_array(
			Descriptor::Builtin(BuiltInKind::UInt32),
			Buffer::Owned(vec![10, 20, 30, 40, 50, 60].into_iter().map(Value::UInt32).collect()),
		);
		assert!(src.array_dimensions.is_none());
		let range = NumericRange::new(vec![dim(2, 4)]);
		let dst = src.copy_range(&range).unwrap();
		let values: Vec<u32> = dst.as_elements().iter().map(|v| match v {
			Value::UInt32(n) => *n,
			_ => unreachable!(),
		}).collect();
		assert_eq!(values, vec![30, 40, 50]);
		assert_eq!(dst.array_dimensions, Some(vec![3]));
	}

	#[test]
	fn copy_range_descends_into_a_string_like_composite_scalar() {
		let registry = crate::descriptor::DescriptorRegistry::leaked();
		let blob = registry.declare("Blob", &[
			crate::descriptor::Member {
				name: "data",
				descriptor: Descriptor::Builtin(BuiltInKind::Byte),
				is_array: true,
			},
		]);
		let bytes: Buffer<Value> = Buffer::Owned(b"abcdefg".iter().map(|&b| Value::Byte(b)).collect());
		let structure = Value::Structure(Structure { descriptor: blob, fields: vec![Field::Array(bytes)] });
		let v = Variant::set_scalar(Descriptor::Composite(blob), structure);

		let range = NumericRange::new(vec![dim(2, 4)]);
		let dst = v.copy_range(&range).unwrap();
		match &dst.content {
			VariantContent::Scalar(boxed) => match boxed.as_ref() {
				Value::Structure(s) => match &s.fields[0] {
					Field::Array(b) => {
						let chars: Vec<u8> = b.as_slice().iter().map(|v| match v {
							Value::Byte(x) => *x,
							_ => unreachable!(),
						}).collect();
						assert_eq!(chars, b"cde".to_vec());
					}
					_ => panic!("expected an array field"),
				},
				_ => panic!("expected a Structure value"),
			},
			_ => panic!("expected a scalar Variant"),
		}
	}

	#[test]
	fn set_range_copy_then_copy_range_round_trips() {
		let mut v = array_variant(vec![0, 0, 0, 0, 0, 0], vec![2, 3]);
		let range = NumericRange::new(vec![dim(0, 0), dim(0, 2)]);
		let incoming = vec![Value::UInt32(10), Value::UInt32(20), Value::UInt32(30)];
		v.set_range_copy(&incoming, &range).unwrap();
		let dst = v.copy_range(&range).unwrap();
		let values: Vec<u32> = dst.as_elements().iter().map(|v| match v {
			Value::UInt32(n) => *n,
			_ => unreachable!(),
		}).collect();
		assert_eq!(values, vec![10, 20, 30]);
	}

	#[test]
	fn set_range_move_empties_the_source_vec() {
		let mut v = array_variant(vec![0, 0, 0, 0, 0, 0], vec![2, 3]);
		let range = NumericRange::new(vec![dim(0, 0), dim(0, 2)]);
		let incoming = vec![Value::UInt32(10), Value::UInt32(20), Value::UInt32(30)];
		v.set_range(incoming, &range).unwrap();
		let values: Vec<u32> = v.as_elements().iter().map(|v| match v {
			Value::UInt32(n) => *n,
			_ => unreachable!(),
		}).collect();
		assert_eq!(values, vec![10, 20, 30, 0, 0, 0]);
	}
}
