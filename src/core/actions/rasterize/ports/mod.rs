pub mod pixel_classifier;
