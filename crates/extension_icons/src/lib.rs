#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::must_use_candidate
)]

mod errors;
pub use errors::*;

mod font;
pub use font::*;

mod generator;
pub use generator::*;
