//! Vacation planner library exports for testing

pub mod core;
pub mod indicator;

#[cfg(test)]
pub mod test_support;
