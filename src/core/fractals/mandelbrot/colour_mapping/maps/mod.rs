pub mod blue_gradient;
pub mod default_hsb;
pub mod grayscale;
pub mod warm_tones;
