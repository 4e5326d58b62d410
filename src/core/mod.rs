pub mod alphabet;
pub mod alphabets;
pub mod config;
