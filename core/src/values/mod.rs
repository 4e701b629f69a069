pub mod value;

#[cfg(test)]
mod value_test;

pub use value::{Value, ValueError};
