pub mod camera;
pub mod config;
pub mod connections;
pub mod constants;
pub mod formation;
pub mod gallery;
pub mod guides;
pub mod keyboard;
pub mod layout;
pub mod media;
pub mod node;
pub mod orbit;
pub mod picking;
pub mod transition;
pub mod view_mode;

pub use camera::*;
pub use config::*;
pub use formation::*;
pub use gallery::*;
pub use keyboard::*;
pub use layout::*;
pub use media::*;
pub use node::*;
pub use orbit::*;
pub use transition::*;
pub use view_mode::*;
