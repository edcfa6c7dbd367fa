//! Per-thread PCG32 random number generator, used by `Guid::random` and
//! anything else in this crate that needs process-wide-looking randomness
//! without any shared, lockable state.

use std::cell::Cell;

use crate::leaf::date_time::DateTime;

const MULTIPLIER: u64 = 6364136223846793005;

#[derive(Copy, Clone)]
struct Pcg32 {
	state: u64,
	inc: u64,
}

impl Pcg32 {
	const fn zeroed() -> Self {
		Pcg32 { state: 0, inc: 1 }
	}

	fn seed(&mut self, init_state: u64, init_seq: u64) {
		self.state = 0;
		self.inc = (init_seq << 1) | 1;
		self.next_u32();
		self.state = self.state.wrapping_add(init_state);
		self.next_u32();
	}

	fn next_u32(&mut self) -> u32 {
		let old_state = self.state;
		self.state = old_state.wrapping_mul(MULTIPLIER).wrapping_add(self.inc);
		let xor_shifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
		let rot = (old_state >> 59) as u32;
		xor_shifted.rotate_right(rot)
	}
}

thread_local! {
	static RNG: Cell<Pcg32> = const { Cell::new(Pcg32::zeroed()) };
}

/// Reseeds this thread's generator, mixing the caller's seed with the
/// current time so two threads seeded with the same value still diverge.
pub fn random_seed(seed: u64) {
	RNG.with(|cell| {
		let mut rng = cell.get();
		rng.seed(seed, DateTime::now().ticks() as u64);
		cell.set(rng);
	});
}

pub fn u32_random() -> u32 {
	RNG.with(|cell| {
		let mut rng = cell.get();
		let value = rng.next_u32();
		cell.set(rng);
		value
	})
}
