//! Advent of Code 2024

pub mod d05;
pub mod d06;
pub mod d07;
