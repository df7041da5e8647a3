//! Core use-case services.
//!
//! # Responsibility
//! - Pair every tracker mutation with a persistence flush.
//! - Turn boolean model rejections into typed, user-presentable errors.

pub mod tracker_service;
