pub mod core;
pub mod input;

#[cfg(test)]
mod tests;
