//! Tax module containing GST rate structures and calculations

pub mod gst;

pub use gst::*;
