pub mod cart;
pub mod constants;
pub mod counter;
pub mod form;
pub mod motion;
pub mod pour;
pub mod timeline;
pub mod tween;
pub mod ux;

pub use cart::*;
pub use counter::*;
pub use form::*;
pub use motion::*;
pub use pour::*;
pub use timeline::*;
pub use tween::*;
pub use ux::*;
