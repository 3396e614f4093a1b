pub mod traits;
pub mod value_iteration;

pub use traits::ValueEstimationAgent;
pub use value_iteration::ValueIterationAgent;
