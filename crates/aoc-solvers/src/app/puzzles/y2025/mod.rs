//! Advent of Code 2025

pub mod d01;
pub mod d02;
