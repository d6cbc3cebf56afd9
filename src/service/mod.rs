//! ApplicationService: storage operations over the applications table.

mod applications;
mod validation;
pub use applications::ApplicationService;
pub use validation::RequestValidator;
