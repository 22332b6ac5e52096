pub mod assets;
pub mod object;
pub mod stream;

pub use assets::*;
pub use object::*;
pub use stream::*;
