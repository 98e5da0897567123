//! Lookup tables generated by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/lut.rs"));
