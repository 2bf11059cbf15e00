pub mod category;
pub mod employment;
pub mod group;
pub mod record;
pub mod slot;
pub mod stats;
pub mod story;
