//! Cropping module

pub mod cropper;

pub use cropper::Cropper;
