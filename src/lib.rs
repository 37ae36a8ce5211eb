//! The classical **P**erceptron **L**earning **A**lgorithm.
//!
//! [`crate::synthesizer::make_linear_separable_data`] draws a labelled dataset
//! whose labels are given by the side of a hyperplane through the origin each
//! point falls on. [`crate::perceptron::train`] then learns *a* separating
//! hyperplane for such a dataset by mistake-driven updates, restarting its scan
//! from the first row after every update.
//!
//! Plotting is optional, and goes through the [`crate::renderer::Renderer`]
//! trait. [`crate::svg_plotter::SvgPlotter`] renders to SVG files.

#![allow(unused_parens)]

#[macro_use] extern crate log;
pub mod params;
pub mod error;
pub mod linalg_utils;
pub mod rand_utils;
pub mod dataset;
pub mod synthesizer;
pub mod perceptron;
pub mod renderer;
pub mod svg_plotter;
pub mod test_utils;
