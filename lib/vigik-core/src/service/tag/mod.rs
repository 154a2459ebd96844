use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use crate::model::tag::{Tag, TagConflictPolicy};
use crate::repository::tag_repository::TagRepository;

mod mapper;
pub mod service;

pub struct TagService {
    tag_repository: Arc<dyn TagRepository>,
    conflict_policy: TagConflictPolicy,
    tags: watch::Sender<Vec<Tag>>,
    // serialises reading the table and publishing it, so the newest read is sent last
    publish_lock: Mutex<()>,
}

impl TagService {
    pub fn new(tag_repository: Arc<dyn TagRepository>, conflict_policy: TagConflictPolicy) -> Self {
        let (tags, _) = watch::channel(vec![]);

        Self {
            tag_repository,
            conflict_policy,
            tags,
            publish_lock: Mutex::new(()),
        }
    }
}

#[cfg(test)]
mod test;
