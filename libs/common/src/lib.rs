//! Common library for the hostel backend
//!
//! This crate provides infrastructure shared by the hostel services:
//! PostgreSQL connection pooling, Redis cache access, and the error
//! types for both.

pub mod cache;
pub mod database;
pub mod error;
