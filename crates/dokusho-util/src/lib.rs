#[cfg(feature = "host")]
#[macro_use]
extern crate log;

#[cfg(feature = "host")]
pub mod http;
