pub mod io;
pub mod kernel;
pub mod traits;

pub use self::kernel::{KernelView, KernelViewMut};
pub use self::traits::{ImageView, ImageViewMut, Rows};
