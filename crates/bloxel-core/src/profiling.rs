//! Profiling utilities based on the `puffin` crate.
//!
//! With the `profiling` feature disabled the macros expand to nothing, so the
//! GUI crates can annotate their per-frame paths unconditionally.

#[cfg(feature = "profiling")]
mod enabled {
    use std::sync::OnceLock;

    pub use puffin::{GlobalProfiler, profile_function, profile_scope};

    /// Profiling backend options.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ProfilingBackend {
        /// Send profiling data to puffin_viewer via HTTP.
        PuffinHttp,
    }

    /// Global profiling server instance.
    static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

    /// Initialize profiling with the specified backend.
    ///
    /// # Example
    /// ```no_run
    /// use bloxel_core::profiling::{init_profiling, ProfilingBackend};
    ///
    /// init_profiling(ProfilingBackend::PuffinHttp);
    /// ```
    pub fn init_profiling(backend: ProfilingBackend) {
        match backend {
            ProfilingBackend::PuffinHttp => {
                puffin::set_scopes_on(true);

                match puffin_http::Server::new("0.0.0.0:8585") {
                    Ok(server) => {
                        tracing::info!("Puffin profiler server started on http://0.0.0.0:8585");
                        let _ = PROFILING_SERVER.set(server);
                    }
                    Err(e) => {
                        tracing::error!("Failed to start puffin server: {}", e);
                    }
                }
            }
        }
    }

    /// Mark the start of a new frame for profiling.
    ///
    /// Call this once per host frame, before the GUI update pass.
    #[inline]
    pub fn new_frame() {
        puffin::GlobalProfiler::lock().new_frame();
    }
}

#[cfg(feature = "profiling")]
pub use enabled::*;

#[cfg(not(feature = "profiling"))]
mod disabled {
    #[macro_export]
    #[doc(hidden)]
    macro_rules! __bloxel_profile_noop {
        ($($arg:tt)*) => {};
    }

    pub use crate::__bloxel_profile_noop as profile_function;
    pub use crate::__bloxel_profile_noop as profile_scope;

    #[inline]
    pub fn new_frame() {}
}

#[cfg(not(feature = "profiling"))]
pub use disabled::*;
