extern crate rand;
extern crate clap;
extern crate thiserror;

pub mod types;

pub mod error;
pub mod data_structures;
pub mod graph;
pub mod dijkstra;
pub mod pso;
pub mod utils;
