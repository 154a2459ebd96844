use std::sync::Arc;

use tag_repository::TagRepository;

pub mod error;
pub mod tag_repository;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait DataRepository: Send + Sync {
    fn get_tag_repository(&self) -> Arc<dyn TagRepository>;
}
