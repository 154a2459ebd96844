pub mod device;
pub mod gallery;
pub mod tag;
pub mod tracker;
