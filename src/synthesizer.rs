extern crate ndarray;

use ndarray::*;

use rand::prelude::*;

use crate::dataset::*;
use crate::error::*;
use crate::linalg_utils::*;
use crate::params::*;
use crate::rand_utils::*;

///Labels a point from its inner product with the generating weights.
///A product of exactly zero counts as negative, so points lying on the
///hyperplane always land in the `-1` class.
pub fn label_for_inner_product(inner_product : f32) -> f32 {
    if (inner_product <= 0.0f32) {
        NEGATIVE_LABEL
    } else {
        POSITIVE_LABEL
    }
}

///Generates a linearly separable dataset of `num_lines` points on both sides
///of the hyperplane `weights . x = 0`.
///
///Each point has `weights.len()` coordinates drawn uniformly from
///`[COORD_LOW, COORD_HIGH)` using `rng`, followed by its label (see
///[`label_for_inner_product`]). The resulting dataset is separated by
///`weights` itself.
pub fn make_linear_separable_data<R : Rng + ?Sized>(rng : &mut R, weights : ArrayView1<f32>,
                                                    num_lines : usize) -> PlaResult<Dataset> {
    let num_features = weights.len();
    if (num_features == 0) {
        return Err(PlaError::invalid_shape("weights must have at least one component"));
    }
    if (num_lines == 0) {
        return Err(PlaError::invalid_shape("num_lines must be positive"));
    }

    let mut rows = Array::zeros((num_lines, num_features + 1));
    let mut num_positive : usize = 0;
    for i in 0..num_lines {
        let x = gen_uniform_random(rng, COORD_LOW, COORD_HIGH, num_features);
        let label = label_for_inner_product(inner(weights, x.view()));
        if (label > 0.0f32) {
            num_positive += 1;
        }

        let mut row = rows.row_mut(i);
        row.slice_mut(s![..num_features]).assign(&x);
        row[[num_features,]] = label;
    }
    trace!("Synthesized {} points in {} dimensions ({} positive)", num_lines, num_features, num_positive);

    Ok(Dataset::from_rows_unchecked(rows))
}
