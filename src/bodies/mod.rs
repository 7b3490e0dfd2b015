mod axes;
mod body;
mod system;
pub mod record;

pub use self::axes::Axes;
pub use self::body::Body;
pub use self::system::System;
