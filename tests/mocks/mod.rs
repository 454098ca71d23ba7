#![allow(dead_code)]

pub mod scorer;
