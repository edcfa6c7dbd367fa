use crate::error::StatusCode;
use crate::leaf::string::ByteBuffer;

/// Presence of each field is modelled as `Option`, replacing the original's
/// separate bitmask-of-flags-plus-always-present-fields layout. Recursion
/// into an `inner` `DiagnosticInfo` is ordinary owned recursion through a
/// `Box`, which `Drop` unwinds for free.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticInfo {
	pub symbolic_id: Option<i32>,
	pub namespace_uri: Option<i32>,
	pub locale: Option<i32>,
	pub localized_text: Option<i32>,
	pub additional_info: Option<ByteBuffer>,
	pub inner_status_code: Option<StatusCode>,
	pub inner: Option<Box<DiagnosticInfo>>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_has_nothing_present() {
		let d = DiagnosticInfo::default();
		assert!(d.symbolic_id.is_none());
		assert!(d.inner.is_none());
	}

	#[test]
	fn cloning_deep_copies_the_inner_chain() {
		let inner = DiagnosticInfo { symbolic_id: Some(1), ..Default::default() };
		let outer = DiagnosticInfo { symbolic_id: Some(2), inner: Some(Box::new(inner)), ..Default::default() };
		let cloned = outer.clone();
		assert_eq!(cloned.inner.as_ref().unwrap().symbolic_id, Some(1));
		assert!(!std::ptr::eq(
			outer.inner.as_ref().unwrap().as_ref(),
			cloned.inner.as_ref().unwrap().as_ref()
		));
	}
}
