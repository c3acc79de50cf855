mod create;
mod of;
mod iter;

pub use self::create::*;
pub use self::of::*;
pub use self::iter::*;
