//! Infrastructure layer: CSV row formats and file backed repositories.

pub mod dto;
pub mod repository;
