pub mod clip;
pub mod handler;
pub mod tracks;
pub mod transformer;
pub mod values;

pub use clip::{NodeAnimation, SceneAnimation};
pub use handler::AnimationHandler;
pub use tracks::{Key, interpolate, sample};
pub use transformer::{SceneTransformer, resolve_local};
pub use values::Interpolatable;
