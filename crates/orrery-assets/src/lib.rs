//! Best-effort remote asset loading.
//!
//! Surface textures come from plain HTTP URLs. Fetching is blocking,
//! bounded, and deliberately permissive: any failure logs a warning and
//! yields `None`, and the caller renders the body untextured. Nothing in
//! the program depends on a texture being available.

pub mod remote;

pub use remote::{FetchError, RemoteImage, fetch_rgba_image};
