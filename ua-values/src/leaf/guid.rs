use uuid::Uuid;

use crate::rng;

/// A 128-bit identifier, stored as a `uuid::Uuid` since the two share the
/// exact (data1, data2, data3, data4) field layout.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Guid(Uuid);

impl Guid {
	pub const NULL: Guid = Guid(Uuid::nil());

	pub fn from_fields(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
		Guid(Uuid::from_fields(data1, data2, data3, &data4))
	}

	pub fn equal(&self, other: &Guid) -> bool {
		self == other
	}

	pub fn is_null(&self) -> bool {
		self.0.is_nil()
	}

	/// Draws four u32s off the per-thread RNG and folds them into the field
	/// layout. The nibble-shuffled packing of `data4` looks unusual but is
	/// load-bearing: it is the exact bit pattern callers of the original
	/// generator have always observed, and changing it would silently
	/// change every Guid this crate has ever produced.
	pub fn random() -> Guid {
		let data1 = rng::u32_random();

		let r = rng::u32_random();
		let data2 = r as u16;
		let data3 = (r >> 16) as u16;

		let mut data4 = [0u8; 8];
		let r = rng::u32_random();
		data4[0] = r as u8;
		data4[1] = (r >> 4) as u8;
		data4[2] = (r >> 8) as u8;
		data4[3] = (r >> 12) as u8;

		let r = rng::u32_random();
		data4[4] = r as u8;
		data4[5] = (r >> 4) as u8;
		data4[6] = (r >> 8) as u8;
		data4[7] = (r >> 12) as u8;

		Guid::from_fields(data1, data2, data3, data4)
	}
}

impl Default for Guid {
	fn default() -> Self {
		Guid::NULL
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn null_guid_is_all_zero_and_equal_to_itself() {
		let a = Guid::NULL;
		assert!(a.is_null());
		assert!(a.equal(&a));
	}

	#[test]
	fn equality_is_symmetric() {
		let a = Guid::from_fields(1, 2, 3, [4; 8]);
		let b = Guid::from_fields(1, 2, 3, [4; 8]);
		let c = Guid::from_fields(9, 2, 3, [4; 8]);
		assert!(a.equal(&b));
		assert!(b.equal(&a));
		assert!(!a.equal(&c));
	}

	#[test]
	fn random_draws_are_not_the_null_guid() {
		rng::random_seed(7);
		let g = Guid::random();
		assert!(!g.is_null());
	}
}
