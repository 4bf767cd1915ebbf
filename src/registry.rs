use std::sync::OnceLock;

use crate::error::PathError;
use crate::model::path_set::PathSet;
use crate::source::ConfigSource;

static REGISTRY: OnceLock<PathSet> = OnceLock::new();

/// Process-wide access to the resolved client paths.
///
/// `Paths` has no values and cannot be constructed; it only groups the
/// functions that initialize and read the shared [`PathSet`].
///
/// ```compile_fail
/// let _paths = client_paths::Paths {};
/// ```
#[derive(Debug)]
pub enum Paths {}

impl Paths {
    /// Resolve the paths once for the whole process.
    ///
    /// Call this during startup so a broken host configuration fails
    /// immediately. Later calls return the set stored by the first successful
    /// call and do not read `source` again.
    pub fn init<S: ConfigSource + ?Sized>(source: &S) -> Result<&'static PathSet, PathError> {
        if let Some(paths) = REGISTRY.get() {
            tracing::debug!("path registry already initialized");
            return Ok(paths);
        }

        // Racing callers may all resolve, but only one value is stored.
        let resolved = PathSet::resolve(source)?;
        let mut stored = false;
        let paths = REGISTRY.get_or_init(|| {
            stored = true;
            resolved
        });

        if stored {
            tracing::info!(
                data = paths.data(),
                tileset = paths.tileset(),
                ws = paths.ws(),
                "path registry initialized"
            );
        } else {
            tracing::debug!("path registry initialized concurrently, keeping the stored set");
        }
        Ok(paths)
    }

    /// The stored set, or [`PathError::Uninitialized`] before a successful [`Paths::init`].
    pub fn get() -> Result<&'static PathSet, PathError> {
        REGISTRY.get().ok_or(PathError::Uninitialized)
    }

    /// Whether a successful [`Paths::init`] has run in this process.
    pub fn is_initialized() -> bool {
        REGISTRY.get().is_some()
    }
}
