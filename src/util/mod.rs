mod clones;
mod recorder;

pub use self::clones::*;
pub use self::recorder::*;
