pub mod coverage;
pub mod global;
pub mod normalization;
pub mod ranking;
pub mod scoring;
