extern crate ndarray;

use ndarray::*;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

use crate::error::*;
use crate::params::*;

///A single labelled point of a [`Dataset`], borrowed from its row.
#[derive(Clone, Debug)]
pub struct DataPoint<'a> {
    pub features : ArrayView1<'a, f32>,
    pub label : f32
}

///A labelled dataset, stored as a matrix where each row is one point:
///`num_features` coordinates followed by a label of `-1` or `+1`.
///
///A [`Dataset`] is immutable once built. The only ways to obtain one are
///synthesis (see [`crate::synthesizer::make_linear_separable_data`]) and
///[`Dataset::from_rows`], which checks the shape and labels up front so that
///training never sees an inconsistent matrix.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<f32>", into = "Array2<f32>")]
pub struct Dataset {
    rows : Array2<f32>
}

impl Dataset {
    ///Validates `rows` and wraps it as a [`Dataset`]. There must be at least one
    ///row, at least one feature column before the label column, and every label
    ///must be exactly `-1` or `+1`.
    pub fn from_rows(rows : Array2<f32>) -> PlaResult<Dataset> {
        let num_lines = rows.shape()[0];
        let num_cols = rows.shape()[1];
        if (num_lines == 0) {
            return Err(PlaError::invalid_shape("dataset has no rows"));
        }
        if (num_cols < 2) {
            return Err(PlaError::invalid_shape(format!(
                "dataset rows need at least one feature and a label, got {} column(s)", num_cols)));
        }
        for (i, label) in rows.column(num_cols - 1).iter().enumerate() {
            if (*label != POSITIVE_LABEL && *label != NEGATIVE_LABEL) {
                return Err(PlaError::invalid_shape(format!(
                    "row {} has label {}, expected -1 or 1", i, label)));
            }
        }
        Ok(Dataset { rows })
    }

    ///Wraps rows already known to be well-formed
    pub(crate) fn from_rows_unchecked(rows : Array2<f32>) -> Dataset {
        Dataset { rows }
    }

    ///Gets the number of points (rows) in this [`Dataset`].
    pub fn num_points(&self) -> usize {
        self.rows.shape()[0]
    }

    ///Gets the number of feature coordinates per point, excluding the label.
    pub fn num_features(&self) -> usize {
        self.rows.shape()[1] - 1
    }

    pub fn features(&self, i : usize) -> ArrayView1<'_, f32> {
        let num_features = self.num_features();
        self.rows.slice(s![i, ..num_features])
    }

    pub fn label(&self, i : usize) -> f32 {
        self.rows[[i, self.num_features()]]
    }

    pub fn point(&self, i : usize) -> DataPoint<'_> {
        DataPoint {
            features : self.features(i),
            label : self.label(i)
        }
    }

    pub fn points(&self) -> impl Iterator<Item = DataPoint<'_>> + '_ {
        (0..self.num_points()).map(move |i| self.point(i))
    }

    ///All feature coordinates, one row per point
    pub fn feature_matrix(&self) -> ArrayView2<'_, f32> {
        let num_features = self.num_features();
        self.rows.slice(s![.., ..num_features])
    }

    pub fn labels(&self) -> ArrayView1<'_, f32> {
        self.rows.column(self.num_features())
    }
}

impl TryFrom<Array2<f32>> for Dataset {
    type Error = PlaError;

    fn try_from(rows : Array2<f32>) -> PlaResult<Dataset> {
        Dataset::from_rows(rows)
    }
}

impl From<Dataset> for Array2<f32> {
    fn from(data : Dataset) -> Array2<f32> {
        data.rows
    }
}
