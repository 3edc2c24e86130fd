//! HF repository domain - Tenant registrations of external model repositories

mod entity;
mod repository;
mod validation;

pub use entity::{HfModelRepo, HfRepoName};
#[cfg(test)]
pub use repository::MockHfModelRepoRepository;
pub use repository::HfModelRepoRepository;
pub use validation::{validate_hf_repo_name, HfRepoValidationError, MAX_HF_REPO_NAME_LENGTH};
