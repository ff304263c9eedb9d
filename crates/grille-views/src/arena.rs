//! Session-wide arena of list domains
//!
//! One [`ViewArena`] per signed-in session holds every registered list
//! domain behind its key. Screens fetch their domain handle on render;
//! registration is get-or-create, so two screens sharing a domain share
//! its state. Domains never share mutable state with each other.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use grille_core::clock::{Clock, SystemClock};
use grille_core::error::{Result, ViewError};
use parking_lot::RwLock;

use crate::domain::{DomainProfile, DomainViews};
use crate::store::ViewStore;

/// Keyed collection of [`DomainViews`] handles
///
/// The arena owns the clock and the acting user's identity; both are handed
/// to every domain it creates, so saved views carry a consistent
/// `created_by` and timestamps across the session.
pub struct ViewArena<R> {
	domains: RwLock<HashMap<String, Arc<RwLock<DomainViews<R>>>>>,
	clock: Arc<dyn Clock>,
	actor: String,
}

impl<R> ViewArena<R> {
	/// Creates an arena on the wall clock
	pub fn new(actor: impl Into<String>) -> Self {
		Self::with_clock(actor, Arc::new(SystemClock))
	}

	/// Creates an arena with an injected clock
	pub fn with_clock(actor: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
		Self {
			domains: RwLock::new(HashMap::new()),
			clock,
			actor: actor.into(),
		}
	}

	/// Returns the domain for this profile, creating and seeding it first
	/// if the key is new
	///
	/// A key that is already registered keeps its existing state; the
	/// profile argument is only consumed for creation.
	pub fn register(&self, profile: DomainProfile<R>) -> Arc<RwLock<DomainViews<R>>> {
		{
			let domains = self.domains.read();
			if let Some(existing) = domains.get(&profile.key) {
				return existing.clone();
			}
		}

		let mut domains = self.domains.write();
		match domains.entry(profile.key.clone()) {
			Entry::Occupied(entry) => entry.get().clone(),
			Entry::Vacant(entry) => {
				tracing::debug!(domain = %profile.key, "registering list domain");
				let domain = Arc::new(RwLock::new(DomainViews::new(
					profile,
					self.clock.clone(),
					self.actor.clone(),
				)));
				entry.insert(domain.clone());
				domain
			}
		}
	}

	/// Looks up a registered domain
	pub fn domain(&self, key: &str) -> Result<Arc<RwLock<DomainViews<R>>>> {
		self.domains
			.read()
			.get(key)
			.cloned()
			.ok_or_else(|| ViewError::UnknownDomain {
				domain: key.to_string(),
			})
	}

	/// The registered domain keys, sorted
	pub fn domain_keys(&self) -> Vec<String> {
		let mut keys: Vec<String> = self.domains.read().keys().cloned().collect();
		keys.sort();
		keys
	}

	/// Registers a domain rebuilt from a snapshot store
	///
	/// Stored views are healed through the registry rules; a domain the
	/// store has never seen starts freshly seeded. An already registered
	/// key is replaced, since the store is the more authoritative source.
	pub fn load_domain_from(
		&self,
		store: &dyn ViewStore,
		profile: DomainProfile<R>,
	) -> Result<Arc<RwLock<DomainViews<R>>>> {
		let stored = store.load(&profile.key)?;
		let domain = match stored {
			Some(views) => {
				DomainViews::from_stored(profile, self.clock.clone(), self.actor.clone(), views)
			}
			None => DomainViews::new(profile, self.clock.clone(), self.actor.clone()),
		};
		let key = domain.key().to_string();
		let domain = Arc::new(RwLock::new(domain));
		self.domains.write().insert(key, domain.clone());
		Ok(domain)
	}

	/// Writes a domain's current view collection to a snapshot store
	pub fn persist_domain_to(&self, store: &dyn ViewStore, key: &str) -> Result<()> {
		let domain = self.domain(key)?;
		let domain = domain.read();
		store.save(key, domain.views())
	}
}
