extern crate ndarray;

use ndarray::*;

use crate::dataset::*;
use crate::error::*;
use crate::params::*;

///Something which can draw a labelled dataset, optionally with a learned decision
///boundary. Training only ever calls a [`Renderer`] after it has finished, and
///never reads anything back from it.
pub trait Renderer {
    ///Draws the points of `data`, distinguishing the two label classes.
    fn render_data(&mut self, data : &Dataset) -> anyhow::Result<()>;

    ///Draws the points of `data` together with the line `weights . x = 0` and an
    ///arrow along `weights`.
    fn render_boundary(&mut self, data : &Dataset, weights : ArrayView1<f32>) -> anyhow::Result<()>;
}

///Endpoints of the drawn decision boundary and weight arrow, in data coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryGeometry {
    pub line_start : (f32, f32),
    pub line_end : (f32, f32),
    ///The arrow runs from the origin to here
    pub arrow_tip : (f32, f32)
}

///Computes where the boundary line and weight arrow for 2D `weights` are drawn.
///
///The line spans `x` in `[-BOUNDARY_LINE_EXTENT, BOUNDARY_LINE_EXTENT]` along `w0 x + w1 y = 0`,
///and the arrow points along `weights`, scaled so its x-extent is `ARROW_LENGTH`.
///When `w1` is zero the line is the vertical `x = 0` over the same extent.
///The arrow is scaled by `1 / |w0|`, so a zero `w0` is reported as
///[`PlaError::DegenerateBoundary`].
pub fn boundary_geometry(weights : ArrayView1<f32>) -> PlaResult<BoundaryGeometry> {
    if (weights.len() != 2) {
        return Err(PlaError::invalid_shape(format!(
            "only 2D decision boundaries can be drawn, got {} weights", weights.len())));
    }
    let w0 = weights[[0,]];
    let w1 = weights[[1,]];
    if (w0 == 0.0f32) {
        return Err(PlaError::DegenerateBoundary { component : 0 });
    }

    let (line_start, line_end) = if (w1 == 0.0f32) {
        ((0.0f32, -BOUNDARY_LINE_EXTENT), (0.0f32, BOUNDARY_LINE_EXTENT))
    } else {
        let slope = -w0 / w1;
        ((-BOUNDARY_LINE_EXTENT, -BOUNDARY_LINE_EXTENT * slope),
         (BOUNDARY_LINE_EXTENT, BOUNDARY_LINE_EXTENT * slope))
    };
    let arrow_scale = ARROW_LENGTH / w0.abs();
    Ok(BoundaryGeometry {
        line_start,
        line_end,
        arrow_tip : (w0 * arrow_scale, w1 * arrow_scale)
    })
}

///Checks that `data` lives in the plane, which is all a scatter plot can show.
pub fn check_plottable(data : &Dataset) -> PlaResult<()> {
    if (data.num_features() == 2) {
        Ok(())
    } else {
        Err(PlaError::invalid_shape(format!(
            "only 2D datasets can be plotted, got {} features", data.num_features())))
    }
}

///Splits the points of a 2D `data` into `(positive, negative)` coordinate lists.
pub fn split_by_label(data : &Dataset) -> (Vec<(f32, f32)>, Vec<(f32, f32)>) {
    let mut positives = Vec::new();
    let mut negatives = Vec::new();
    for point in data.points() {
        let coords = (point.features[[0,]], point.features[[1,]]);
        if (point.label == POSITIVE_LABEL) {
            positives.push(coords);
        } else {
            negatives.push(coords);
        }
    }
    (positives, negatives)
}

///Draws `data` alone with `renderer`.
pub fn plot_data(data : &Dataset, renderer : &mut dyn Renderer) -> PlaResult<()> {
    renderer.render_data(data)?;
    Ok(())
}
