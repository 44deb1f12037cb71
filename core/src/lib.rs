//! epfslip-core — EPF annual account slip calculation engine.
//!
//! Six input tables (wages, three opening balances, two withdrawal
//! series) go in; one 15-column statement row per employee comes out.
//! The pipeline is linear and pure: validate, extract, assemble.
//! Loading the workbook and writing artifacts live at the edges in
//! `loader` and `writer`.

pub mod contribution;
pub mod engine;
pub mod error;
pub mod extract;
pub mod interest;
pub mod loader;
pub mod sample;
pub mod statement;
pub mod table;
pub mod types;
pub mod validate;
pub mod writer;
