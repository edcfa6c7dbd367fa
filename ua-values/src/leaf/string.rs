use crate::value::Buffer;

/// Backing storage shared by `String`, `ByteString` and `XmlElement`: all
/// three are length-prefixed byte sequences with identical copy/delete
/// semantics, distinguished only by the `BuiltInKind` tag on the `Value`
/// that wraps them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer(pub Buffer<u8>);

pub type UaString = ByteBuffer;
pub type ByteString = ByteBuffer;
pub type XmlElement = ByteBuffer;

impl ByteBuffer {
	pub const NULL: ByteBuffer = ByteBuffer(Buffer::Null);

	pub fn from_chars(src: &str) -> Self {
		if src.is_empty() {
			ByteBuffer(Buffer::Empty)
		} else {
			ByteBuffer(Buffer::Owned(src.as_bytes().to_vec()))
		}
	}

	pub fn alloc_buffer(length: usize) -> Self {
		if length == 0 {
			ByteBuffer(Buffer::Empty)
		} else {
			ByteBuffer(Buffer::Owned(vec![0u8; length]))
		}
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn is_null(&self) -> bool {
		self.0.is_null()
	}

	pub fn as_bytes(&self) -> &[u8] {
		self.0.as_slice()
	}

	pub fn as_str(&self) -> Result<&str, std::str::Utf8Error> {
		std::str::from_utf8(self.as_bytes())
	}

	pub fn equal(&self, other: &ByteBuffer) -> bool {
		self.as_bytes() == other.as_bytes()
	}

	/// Slices out `[min, max]` (inclusive) into a freshly allocated buffer,
	/// the leaf case of a NumericRange descending into a string-like scalar.
	pub fn copy_sub_range(&self, min: u32, max: u32) -> Result<ByteBuffer, crate::error::StatusCode> {
		use crate::error::StatusCode;
		if min > max {
			return Err(StatusCode::BAD_INDEX_RANGE_INVALID);
		}
		if max as usize >= self.len() {
			return Err(StatusCode::BAD_INDEX_RANGE_NO_DATA);
		}
		let length = (max - min + 1) as usize;
		let mut dst = ByteBuffer::alloc_buffer(length);
		if let Buffer::Owned(dst_bytes) = &mut dst.0 {
			dst_bytes.copy_from_slice(&self.as_bytes()[min as usize..min as usize + length]);
		}
		Ok(dst)
	}
}
