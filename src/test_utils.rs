extern crate ndarray;

use ndarray::*;
use crate::dataset::*;
use crate::params::*;
use crate::renderer::*;

pub fn assert_eps_equals(one : f32, two : f32) {
    assert_eps_equals_to_within(one, two, DEFAULT_TEST_THRESH);
}
pub fn assert_eps_equals_to_within(one : f32, two : f32, epsilon : f32) {
    let diff = (one - two).abs();
    if (diff > epsilon) {
        panic!("{} and {} differ by more than {}", one, two, epsilon);
    }
}

pub fn assert_equal_vectors(one : &Array1<f32>, two : &Array1<f32>) {
    assert_eq!(one.len(), two.len());
    let diff = one - two;
    let sq_norm = diff.dot(&diff);
    if (sq_norm > DEFAULT_TEST_THRESH) {
        panic!("vectors {} and {} differ", one, two);
    }
}

///Builds a [`Dataset`] from literal rows, panicking on malformed input.
pub fn dataset_from(rows : &[&[f32]]) -> Dataset {
    let num_lines = rows.len();
    let num_cols = if (num_lines > 0) { rows[0].len() } else { 0 };
    let flat : Vec<f32> = rows.iter().flat_map(|row| row.iter().cloned()).collect();
    let mat = Array::from_shape_vec((num_lines, num_cols), flat).unwrap();
    Dataset::from_rows(mat).unwrap()
}

#[derive(Clone, Debug, PartialEq)]
pub enum RenderCall {
    Data,
    Boundary(Array1<f32>)
}

///A [`Renderer`] which remembers what it was asked to draw.
pub struct RecordingRenderer {
    validate : bool,
    pub calls : Vec<RenderCall>
}

impl RecordingRenderer {
    pub fn new() -> RecordingRenderer {
        RecordingRenderer {
            validate : false,
            calls : Vec::new()
        }
    }

    ///Rejects whatever a real plotter would reject, before recording anything.
    pub fn validating() -> RecordingRenderer {
        RecordingRenderer {
            validate : true,
            calls : Vec::new()
        }
    }
}

impl Renderer for RecordingRenderer {
    fn render_data(&mut self, data : &Dataset) -> anyhow::Result<()> {
        if (self.validate) {
            check_plottable(data)?;
        }
        self.calls.push(RenderCall::Data);
        Ok(())
    }

    fn render_boundary(&mut self, data : &Dataset, weights : ArrayView1<f32>) -> anyhow::Result<()> {
        if (self.validate) {
            check_plottable(data)?;
            boundary_geometry(weights)?;
        }
        self.calls.push(RenderCall::Boundary(weights.to_owned()));
        Ok(())
    }
}
