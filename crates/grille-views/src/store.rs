//! Snapshot persistence backends
//!
//! A [`ViewStore`] keeps a domain's saved views between sessions. The
//! in-memory store backs tests and ephemeral sessions; the JSON file store
//! writes one document per domain under a base directory. Both round-trip
//! the `SavedView` wire shape unchanged, so what a registry is rebuilt from
//! is exactly what was written.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use grille_core::error::{Result, ViewError};
use grille_core::view::SavedView;
use parking_lot::RwLock;

/// Persistence seam for per-domain view collections
///
/// Implementations are synchronous; the engine never suspends, and view
/// documents are small enough that blocking reads are the simpler contract.
pub trait ViewStore: Send + Sync {
	/// Loads the stored views of a domain, `None` when nothing was stored
	fn load(&self, domain: &str) -> Result<Option<Vec<SavedView>>>;

	/// Stores a domain's views wholesale, replacing what was there
	fn save(&self, domain: &str, views: &[SavedView]) -> Result<()>;
}

/// In-memory [`ViewStore`]
///
/// Clones share the same underlying map, so a test can hand the store to
/// the code under test and inspect it afterwards through its own handle.
///
/// # Examples
///
/// ```rust
/// use grille_views::store::{MemoryStore, ViewStore};
///
/// let store = MemoryStore::new();
/// assert!(store.load("students").unwrap().is_none());
///
/// store.save("students", &[]).unwrap();
/// assert_eq!(store.load("students").unwrap(), Some(Vec::new()));
/// ```
#[derive(Clone)]
pub struct MemoryStore {
	views: Arc<RwLock<HashMap<String, Vec<SavedView>>>>,
}

impl MemoryStore {
	/// Creates an empty store
	pub fn new() -> Self {
		Self {
			views: Arc::new(RwLock::new(HashMap::new())),
		}
	}

	/// Number of domains with stored views
	pub fn len(&self) -> usize {
		self.views.read().len()
	}

	/// Whether no domain has stored views
	pub fn is_empty(&self) -> bool {
		self.views.read().is_empty()
	}

	/// Drops everything
	pub fn clear(&self) {
		self.views.write().clear();
	}
}

impl Default for MemoryStore {
	fn default() -> Self {
		Self::new()
	}
}

impl ViewStore for MemoryStore {
	fn load(&self, domain: &str) -> Result<Option<Vec<SavedView>>> {
		Ok(self.views.read().get(domain).cloned())
	}

	fn save(&self, domain: &str, views: &[SavedView]) -> Result<()> {
		self.views.write().insert(domain.to_string(), views.to_vec());
		Ok(())
	}
}

/// File-backed [`ViewStore`] writing one JSON document per domain
///
/// Documents live at `<base_dir>/<domain>.json`, pretty-printed with the
/// camelCase key casing of [`SavedView`]. The base directory is created on
/// first save. Only local files; syncing stores between machines is out of
/// scope.
pub struct JsonFileStore {
	base_dir: PathBuf,
}

impl JsonFileStore {
	/// Creates a store rooted at `base_dir`
	pub fn new(base_dir: impl Into<PathBuf>) -> Self {
		Self {
			base_dir: base_dir.into(),
		}
	}

	/// The directory domain documents are written under
	pub fn base_dir(&self) -> &Path {
		&self.base_dir
	}

	fn domain_path(&self, domain: &str) -> PathBuf {
		self.base_dir.join(format!("{domain}.json"))
	}
}

impl ViewStore for JsonFileStore {
	fn load(&self, domain: &str) -> Result<Option<Vec<SavedView>>> {
		let path = self.domain_path(domain);
		let text = match fs::read_to_string(&path) {
			Ok(text) => text,
			Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
			Err(error) => {
				return Err(ViewError::Store(format!(
					"failed to read {}: {error}",
					path.display()
				)));
			}
		};
		let views = serde_json::from_str(&text).map_err(|error| {
			ViewError::Store(format!("failed to parse {}: {error}", path.display()))
		})?;
		Ok(Some(views))
	}

	fn save(&self, domain: &str, views: &[SavedView]) -> Result<()> {
		fs::create_dir_all(&self.base_dir).map_err(|error| {
			ViewError::Store(format!(
				"failed to create {}: {error}",
				self.base_dir.display()
			))
		})?;
		let path = self.domain_path(domain);
		let text = serde_json::to_string_pretty(views).map_err(|error| {
			ViewError::Store(format!("failed to serialize views for {domain}: {error}"))
		})?;
		fs::write(&path, text).map_err(|error| {
			ViewError::Store(format!("failed to write {}: {error}", path.display()))
		})?;
		tracing::debug!(domain = %domain, path = %path.display(), "wrote view document");
		Ok(())
	}
}
