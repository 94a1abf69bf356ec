//! Actor catalog loader.
//!
//! Loads the player and monster templates from a RON list of
//! `(key, ActorTemplate)` pairs.

use std::path::Path;

use tracing::info;

use crate::catalog::ActorTemplate;
use crate::loaders::{LoadResult, read_file};

/// Loader for actor catalog from RON files.
pub struct ActorLoader;

impl ActorLoader {
    /// Load actor catalog from a RON file.
    ///
    /// Keys must be unique; a repeated key is rejected rather than silently
    /// shadowing the earlier template.
    pub fn load(path: &Path) -> LoadResult<Vec<(String, ActorTemplate)>> {
        let content = read_file(path)?;
        let actors: Vec<(String, ActorTemplate)> = ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse actor catalog {}: {}", path.display(), e)
        })?;

        for (index, (key, _)) in actors.iter().enumerate() {
            if actors[..index].iter().any(|(seen, _)| seen == key) {
                anyhow::bail!("Duplicate actor '{}' in {}", key, path.display());
            }
        }

        info!(
            target: "corridor::content",
            path = %path.display(),
            count = actors.len(),
            "loaded actor catalog"
        );
        Ok(actors)
    }
}
