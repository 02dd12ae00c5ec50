mod enumeration;
mod member;
mod table;

pub use self::enumeration::*;
pub use self::member::*;
pub use self::table::*;
