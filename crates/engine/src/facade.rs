//! Re-exported APIs for consumers of the engine crate.

pub use crate::engine::{Geometry, TrajectoryEngine, TrajectoryResult, cache_key};
pub use crate::join::{JoinError, join_ascent, nearest_index};
pub use crate::sites::{ResolvedSite, resolve_site};
pub use traj_cache::{CacheError, CacheRecord, FileCache, MemoryCache, NoCache, TrajectoryCache};
pub use traj_config::EngineConfig;

/// Engine whose store is picked at runtime.
pub type DynEngine = TrajectoryEngine<Box<dyn TrajectoryCache>>;

/// Build an engine with the store described by `config.cache`: a JSON file when
/// enabled, otherwise no caching at all.
pub fn open_engine(config: EngineConfig) -> DynEngine {
    let cache: Box<dyn TrajectoryCache> = if config.cache.enabled {
        Box::new(FileCache::open(&config.cache.path))
    } else {
        Box::new(NoCache)
    };
    TrajectoryEngine::new(config, cache)
}
