pub mod diabetes;
pub mod inference;
pub mod insurance;
pub mod types;

pub use types::{DiabetesInput, DiabetesOutput, InsuranceInput, InsuranceOutput};
