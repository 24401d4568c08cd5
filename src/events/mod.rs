mod pointer;
mod resize;

pub use pointer::wire_pointer;
pub use resize::wire_resize;
