// src/integer_math/mod.rs

pub mod perfect_square;
pub mod prime_table;
pub mod quadratic_residue;
