mod take_while;

pub use self::take_while::*;
