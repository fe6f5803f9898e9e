mod bounds;
mod cursor;
mod emitter;
mod event;
mod options;
mod state;
mod stream;

pub use bounds::*;
pub use cursor::*;
pub use emitter::*;
pub use event::*;
pub use options::*;
pub use state::*;
pub use stream::*;
