pub mod enumeration;
pub mod table;
