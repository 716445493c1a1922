#![allow(dead_code)]

pub mod fixtures;
pub mod test_data_builder;
