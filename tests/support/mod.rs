#![allow(dead_code)]

pub mod builders;
pub mod capture;
pub mod fixtures;
