// Test modules for all components
pub mod fixtures;
pub mod test_edge_cases;
pub mod test_policy;
