use std::cell::RefCell;

use bumpalo::Bump;
use derivative::Derivative;
use fxhash::FxHashMap;

use crate::primitives::BuiltInKind;

/// A reference to the type of a value or a structure member: either one of
/// the closed built-in kinds, or a composite type registered in a
/// [`DescriptorRegistry`].
#[derive(Debug, Copy, Clone)]
pub enum Descriptor {
	Builtin(BuiltInKind),
	Composite(&'static StructureDescriptor),
}

impl Descriptor {
	pub fn is_fixed_size(&self) -> bool {
		match self {
			Descriptor::Builtin(kind) => kind.is_fixed_size(),
			Descriptor::Composite(_) => false,
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			Descriptor::Builtin(kind) => kind.name(),
			Descriptor::Composite(d) => d.name,
		}
	}
}

/// Description of a single field of a composite type: its own type, and
/// whether the field holds an array of that type rather than one scalar.
#[derive(Debug, Copy, Clone)]
pub struct Member {
	pub name: &'static str,
	pub descriptor: Descriptor,
	pub is_array: bool,
}

/// Descriptor for an open, user-registered composite type: an ordered list
/// of members, each resolved directly to another descriptor rather than by
/// namespace/index arithmetic into a shared table.
#[derive(Debug)]
pub struct StructureDescriptor {
	pub name: &'static str,
	pub members: &'static [Member],
}

impl StructureDescriptor {
	pub fn is_string_like(&self) -> bool {
		matches!(
			self.members,
			[Member { descriptor: Descriptor::Builtin(BuiltInKind::Byte), is_array: true, .. }]
		)
	}
}

/// Arena-backed registry of composite type descriptors, holding each
/// descriptor for the remaining lifetime of the process: the descriptor set
/// is immutable once a type is declared, so leaking the backing arena is the
/// correct expression of that invariant rather than a workaround.
///
/// Not `Sync` (the arena and its interning table use `Cell`/`RefCell`
/// internally): declare every type from a single thread during startup,
/// then share the resolved `&'static Descriptor`s it hands out — those are
/// plain `Copy` references, freely usable from any thread.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct DescriptorRegistry {
	#[derivative(Debug = "ignore")]
	bump: &'static Bump,
	interned: RefCell<FxHashMap<&'static str, &'static StructureDescriptor>>,
}

impl DescriptorRegistry {
	/// Allocates a fresh registry and leaks it for `'static` access. Intended
	/// to be called once, from a single thread, at process start.
	pub fn leaked() -> &'static DescriptorRegistry {
		let bump: &'static Bump = Box::leak(Box::new(Bump::new()));
		Box::leak(Box::new(DescriptorRegistry {
			bump,
			interned: RefCell::new(FxHashMap::default()),
		}))
	}

	/// Registers a composite type under `name`. Re-declaring the same name
	/// returns the existing descriptor rather than allocating a duplicate.
	pub fn declare(&'static self, name: &str, members: &[Member]) -> &'static StructureDescriptor {
		if let Some(descriptor) = self.interned.borrow().get(name) {
			return descriptor;
		}

		let name: &'static str = self.bump.alloc_str(name);
		let members: &'static [Member] = self.bump.alloc_slice_copy(members);
		let descriptor: &'static StructureDescriptor =
			self.bump.alloc(StructureDescriptor { name, members });

		self.interned.borrow_mut().insert(name, descriptor);
		descriptor
	}

	pub fn get(&self, name: &str) -> Option<&'static StructureDescriptor> {
		self.interned.borrow().get(name).copied()
	}
}
