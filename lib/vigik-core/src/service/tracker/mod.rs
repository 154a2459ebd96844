use std::sync::Arc;

use crate::provider::remote_api::tracker::TrackerApi;

pub mod service;

pub struct TrackerService {
    tracker_api: Arc<dyn TrackerApi>,
}

impl TrackerService {
    pub fn new(tracker_api: Arc<dyn TrackerApi>) -> Self {
        Self { tracker_api }
    }
}

#[cfg(test)]
mod test;
