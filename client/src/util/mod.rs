//! Browser utility helpers.

pub mod storage;
