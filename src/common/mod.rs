//! 共通モジュール

pub mod colors;
pub mod constants;
pub mod error;
pub mod fractal;
pub mod grid;
pub mod mandelbrot;
