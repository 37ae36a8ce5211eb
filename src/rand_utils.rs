extern crate ndarray;

use ndarray::*;
use ndarray_rand::RandomExt;

use rand::prelude::*;
use rand::distributions::Uniform;

///Generates a vector of `dims` independent coordinates drawn uniformly
///from the half-open interval `[low, high)`, consuming randomness from `rng`.
pub fn gen_uniform_random<R : Rng + ?Sized>(rng : &mut R, low : f32, high : f32, dims : usize) -> Array1<f32> {
    let dist = Uniform::new(low, high);
    Array::random_using((dims,), dist, rng)
}

///Creates a seeded random source, for reproducible synthesis runs.
pub fn seeded_rng(seed : u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
