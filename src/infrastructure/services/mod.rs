//! Infrastructure services

mod hf_repo_registrar;
mod model_store;

pub use hf_repo_registrar::HfModelRepoRegistrar;
pub use model_store::ModelStore;
