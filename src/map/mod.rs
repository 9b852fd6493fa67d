//! Headless map scene.
//!
//! Geometry arrives as geographic `[lon, lat]` pairs and is reprojected to
//! spherical-Mercator meters before any use. The scene owns two vector
//! layers — the static park boundary and the trail tracks, rebuilt
//! wholesale on every change — plus a tooltip overlay and the hover
//! hit-testing that links map features to the shared hover state. No
//! renderer lives here; a front-end draws from the scene's state.

pub mod boundary;
pub mod extent;
pub mod layers;
pub mod projection;
pub mod scene;
pub mod view;

pub use extent::Extent;
pub use projection::{Pixel, Point};
pub use scene::MapScene;
pub use view::MapView;
