//! Solar scene description and the click-to-spin animation state machine.
//!
//! The scene is a static arrangement of a sun, its glow shell, an orbit-path
//! line, and an earth body hanging off an invisible orbit pivot. The only
//! ongoing behavior is the [`SceneController`] state machine: a click that
//! hits the earth starts the orbit/spin animation, a double-click stops it.

pub mod builder;
pub mod controller;
pub mod lights;
pub mod orbit;

pub use builder::SolarScene;
pub use controller::{AnimationState, SceneController, SpinRates};
pub use lights::{AmbientLight, DirectionalLight, PointLight};
pub use orbit::OrbitAssembly;
