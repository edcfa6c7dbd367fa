use crate::leaf::string::ByteBuffer;

#[derive(Debug, Clone, Default)]
pub struct LocalizedText {
	pub locale: ByteBuffer,
	pub text: ByteBuffer,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_is_two_null_strings() {
		let t = LocalizedText::default();
		assert!(t.locale.is_null());
		assert!(t.text.is_null());
	}
}
