//! The bookkeeping surface a subscription/monitored-item layer needs from
//! this crate, kept at the thin, bounds-checked registry shape the system
//! this is modelled on uses for it: a table of subscriptions keyed by id,
//! with session-wide empirical limits. Sampling, publishing and
//! notification delivery belong to that outer layer, not here.

use std::collections::HashMap;

use nohash_hasher::BuildNoHashHasher;

use crate::rng;

type SubscriptionTable = HashMap<u32, Subscription, BuildNoHashHasher<u32>>;

/// Empirical bounds a session enforces on the subscriptions it accepts.
#[derive(Debug, Copy, Clone)]
pub struct SubscriptionLimits {
	pub max_publishing_interval: u32,
	pub max_lifetime_count: u32,
	pub max_keep_alive_count: u32,
	pub max_notifications_per_publish: u32,
	pub min_sampling_interval: u32,
	pub max_queue_size: u32,
}

impl Default for SubscriptionLimits {
	fn default() -> Self {
		SubscriptionLimits {
			max_publishing_interval: 100,
			max_lifetime_count: 15_000,
			max_keep_alive_count: 100,
			max_notifications_per_publish: 1000,
			min_sampling_interval: 100,
			max_queue_size: 100,
		}
	}
}

#[derive(Debug, Clone)]
pub struct Subscription {
	pub id: u32,
	pub publishing_interval: u32,
	pub lifetime_count: u32,
	pub keep_alive_count: u32,
	pub notifications_per_publish: u32,
}

#[derive(Debug, Clone)]
pub struct MonitoredItem {
	pub id: u32,
	pub subscription_id: u32,
	pub sampling_interval: u32,
	pub queue_size: u32,
}

#[derive(Debug)]
pub struct SubscriptionManager {
	limits: SubscriptionLimits,
	last_id: u32,
	subscriptions: SubscriptionTable,
}

impl SubscriptionManager {
	/// Seeds the id sequence from `seed` mixed with the current time, the
	/// same mixing `random_seed` uses for the RNG.
	pub fn new(seed: u64, limits: SubscriptionLimits) -> Self {
		rng::random_seed(seed);
		SubscriptionManager {
			limits,
			last_id: rng::u32_random(),
			subscriptions: SubscriptionTable::default(),
		}
	}

	pub fn limits(&self) -> SubscriptionLimits {
		self.limits
	}

	/// Assigns the next id in sequence, skipping over any id still held by a
	/// live subscription after the counter wraps around.
	pub fn add_subscription(&mut self, requested: Subscription) -> u32 {
		loop {
			self.last_id = self.last_id.wrapping_add(1).max(1);
			if !self.subscriptions.contains_key(&self.last_id) {
				break;
			}
		}
		let id = self.last_id;
		self.subscriptions.insert(id, Subscription { id, ..requested });
		id
	}

	pub fn get_subscription(&self, id: u32) -> Option<&Subscription> {
		self.subscriptions.get(&id)
	}

	pub fn delete_subscription(&mut self, id: u32) -> Option<Subscription> {
		self.subscriptions.remove(&id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample_subscription() -> Subscription {
		Subscription { id: 0, publishing_interval: 50, lifetime_count: 100, keep_alive_count: 10, notifications_per_publish: 10 }
	}

	#[test]
	fn default_limits_match_the_empirical_bounds() {
		let limits = SubscriptionLimits::default();
		assert_eq!(limits.max_publishing_interval, 100);
		assert_eq!(limits.max_lifetime_count, 15_000);
		assert_eq!(limits.max_queue_size, 100);
	}

	#[test]
	fn added_subscriptions_are_retrievable_and_deletable() {
		let mut manager = SubscriptionManager::new(1, SubscriptionLimits::default());
		let id = manager.add_subscription(sample_subscription());
		assert!(manager.get_subscription(id).is_some());
		assert!(manager.delete_subscription(id).is_some());
		assert!(manager.get_subscription(id).is_none());
	}

	#[test]
	fn ids_are_assigned_uniquely() {
		let mut manager = SubscriptionManager::new(1, SubscriptionLimits::default());
		let a = manager.add_subscription(sample_subscription());
		let b = manager.add_subscription(sample_subscription());
		assert_ne!(a, b);
	}
}
