extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate bincode;
extern crate csv;
extern crate time;

pub mod constants;

mod error;
pub use self::error::{Error, Result};

mod bodies;
pub use self::bodies::Axes;
pub use self::bodies::Body;
pub use self::bodies::System;
pub use self::bodies::record;

mod gravity;
pub use self::gravity::Gravity;

mod integrator;
pub use self::integrator::*;

pub mod case;
pub mod tools;
