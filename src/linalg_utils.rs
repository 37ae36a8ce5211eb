extern crate ndarray;

use ndarray::*;

///Computes the inner product of two vectors of the same length.
pub fn inner(one : ArrayView1<f32>, two : ArrayView1<f32>) -> f32 {
    one.dot(&two)
}

///Computes the squared Euclidean norm of a vector
pub fn sq_norm(v : ArrayView1<f32>) -> f32 {
    v.dot(&v)
}

///Computes the Euclidean norm of a vector
pub fn norm(v : ArrayView1<f32>) -> f32 {
    sq_norm(v).sqrt()
}

///Rescales `v` to unit Euclidean norm. Returns `None` for the zero vector.
pub fn normalized(v : ArrayView1<f32>) -> Option<Array1<f32>> {
    let v_norm = norm(v);
    if (v_norm > 0.0f32) {
        let scale = 1.0f32 / v_norm;
        Some(scale * &v)
    } else {
        None
    }
}
