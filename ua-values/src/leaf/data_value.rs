use crate::error::StatusCode;
use crate::leaf::date_time::DateTime;
use crate::variant::Variant;

/// Bundles a Variant with the timestamps and quality fields OPC UA attaches
/// to a read result. Each field's presence is its own `Option`, as for
/// [`crate::leaf::diagnostic_info::DiagnosticInfo`].
#[derive(Debug, Clone, Default)]
pub struct DataValue {
	pub value: Option<Variant>,
	pub status: Option<StatusCode>,
	pub source_timestamp: Option<DateTime>,
	pub source_picoseconds: Option<u16>,
	pub server_timestamp: Option<DateTime>,
	pub server_picoseconds: Option<u16>,
}

impl DataValue {
	pub fn copy(&self) -> Result<DataValue, StatusCode> {
		let value = match &self.value {
			Some(v) => Some(v.copy()?),
			None => None,
		};
		Ok(DataValue { value, ..self.clone() })
	}
}
