//! Generic helpers, independent of any particular structure of the library.

pub mod bits;
