use bitflags::bitflags;

bitflags! {
	/// Status bits accumulated across nested copy/range operations.
	///
	/// `GOOD` is the empty set; every failure mode is a distinct bit so that
	/// callers can fold several partial results together with `|=` the same
	/// way the rest of this crate's traversal code does.
	#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
	pub struct StatusCode: u32 {
		const GOOD = 0;
		const BAD_OUT_OF_MEMORY = 1 << 0;
		const BAD_INTERNAL_ERROR = 1 << 1;
		const BAD_INDEX_RANGE_INVALID = 1 << 2;
		const BAD_INDEX_RANGE_NO_DATA = 1 << 3;
	}
}

impl StatusCode {
	pub fn is_good(self) -> bool {
		self.is_empty()
	}
}

impl Default for StatusCode {
	fn default() -> Self {
		StatusCode::GOOD
	}
}

impl std::fmt::Display for StatusCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		std::fmt::Debug::fmt(self, f)
	}
}

impl std::error::Error for StatusCode {}
