pub mod aggregator;
pub mod grouper;
pub mod rates;
pub mod slot_builder;
