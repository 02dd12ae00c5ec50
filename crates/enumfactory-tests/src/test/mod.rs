mod generated;
mod macros;
