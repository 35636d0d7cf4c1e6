//! Command implementations for digraph

pub mod demo;
pub mod dispatch;
pub mod export;
pub mod info;
pub mod path;
pub mod traverse;
pub mod tree;

mod helpers;
