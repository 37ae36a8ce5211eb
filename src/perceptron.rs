extern crate ndarray;

use ndarray::*;
use serde::{Deserialize, Serialize};

use std::convert::Infallible;

use crate::dataset::*;
use crate::error::*;
use crate::linalg_utils::*;
use crate::renderer::*;
use crate::synthesizer::*;

///Position of the training scan. Training starts at `Scanning(0)` and
///finishes in `Converged` once a full pass has made no updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrainerState {
    Scanning(usize),
    Converged
}

///The outcome of a training run, together with the exact sequence of
///updates which produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingRun {
    pub weights : Array1<f32>,
    ///Index of the row which triggered each update, in order
    pub update_rows : Vec<usize>,
    ///Number of margin evaluations performed
    pub num_inspections : usize
}

impl TrainingRun {
    pub fn num_updates(&self) -> usize {
        self.update_rows.len()
    }
}

///Configurable Perceptron Learning Algorithm trainer.
///
///By default there is no cap on the number of updates, and training on data
///which is not linearly separable never returns. [`PerceptronTrainer::with_max_updates`]
///gives a bounded variant which fails with [`PlaError::DidNotConverge`] instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PerceptronTrainer {
    max_updates : Option<usize>
}

impl PerceptronTrainer {
    ///Creates an unbounded [`PerceptronTrainer`].
    pub fn new() -> PerceptronTrainer {
        PerceptronTrainer {
            max_updates : None
        }
    }

    ///Creates a [`PerceptronTrainer`] which gives up once `max_updates` updates have been
    ///applied and yet another one is needed.
    pub fn with_max_updates(max_updates : usize) -> PerceptronTrainer {
        PerceptronTrainer {
            max_updates : Some(max_updates)
        }
    }

    pub fn get_max_updates(&self) -> Option<usize> {
        self.max_updates
    }

    ///Trains on `data`, recording the update sequence.
    pub fn run(&self, data : &Dataset) -> PlaResult<TrainingRun> {
        match (self.max_updates) {
            None => match scan(data, |_| Ok::<(), Infallible>(())) {
                Ok(run) => Ok(run),
                Err(never) => match never {}
            },
            Some(max_updates) => scan(data, |updates_so_far| {
                if (updates_so_far >= max_updates) {
                    warn!("Perceptron gave up after {} updates without converging", updates_so_far);
                    Err(PlaError::DidNotConverge { updates : updates_so_far })
                } else {
                    Ok(())
                }
            })
        }
    }
}

///Runs the Perceptron Learning Algorithm on `data`, starting from all-zero weights.
///
///Rows are scanned in order. Whenever a row has non-positive margin under the
///current weights, the weights move by `label * features` and the scan restarts
///from the first row. Training ends once every row has strictly positive margin.
///
///There is no iteration cap: if `data` is not linearly separable, this never
///returns. See [`PerceptronTrainer::with_max_updates`] for a bounded variant.
pub fn train(data : &Dataset) -> Array1<f32> {
    match scan(data, |_| Ok::<(), Infallible>(())) {
        Ok(run) => run.weights,
        Err(never) => match never {}
    }
}

///Trains on `data` exactly as [`train`] does, then hands the dataset and the
///learned weights to `renderer`.
///
///The weights are returned whether or not rendering succeeds. The second element
///is the rendering outcome, which is also logged when it is a failure.
pub fn train_and_render(data : &Dataset, renderer : &mut dyn Renderer) -> (Array1<f32>, PlaResult<()>) {
    let weights = train(data);
    let render_outcome = renderer.render_boundary(data, weights.view())
                                 .map_err(PlaError::from);
    if let Err(err) = &render_outcome {
        warn!("Could not render decision boundary for {}: {}", weights, err);
    }
    (weights, render_outcome)
}

//Drives the scan state machine. `may_update` is consulted with the number of
//updates applied so far before every update, and can abort the run.
fn scan<E, F>(data : &Dataset, mut may_update : F) -> Result<TrainingRun, E>
        where F : FnMut(usize) -> Result<(), E> {
    let num_lines = data.num_points();
    let mut weights : Array1<f32> = Array::zeros((data.num_features(),));
    let mut update_rows = Vec::new();
    let mut num_inspections : usize = 0;

    let mut state = TrainerState::Scanning(0);
    while let TrainerState::Scanning(i) = state {
        state = if (i == num_lines) {
            TrainerState::Converged
        } else {
            num_inspections += 1;
            let point = data.point(i);
            if (margin(weights.view(), &point) <= 0.0f32) {
                may_update(update_rows.len())?;
                weights.scaled_add(point.label, &point.features);
                update_rows.push(i);
                trace!("Update {} on row {}, weights now {}", update_rows.len(), i, weights);
                TrainerState::Scanning(0)
            } else {
                TrainerState::Scanning(i + 1)
            }
        };
    }
    info!("Perceptron converged after {} updates ({} inspections): {}",
          update_rows.len(), num_inspections, weights);

    Ok(TrainingRun {
        weights,
        update_rows,
        num_inspections
    })
}

///Computes the margin `label * (weights . features)` of `point`. Positive means
///correctly classified, zero or negative means misclassified or on the boundary.
pub fn margin(weights : ArrayView1<f32>, point : &DataPoint<'_>) -> f32 {
    point.label * inner(weights, point.features.view())
}

///Classifies `features` by the side of the hyperplane `weights . x = 0` it lies on,
///with the same tie-break as synthesis.
pub fn predict(weights : ArrayView1<f32>, features : ArrayView1<f32>) -> f32 {
    label_for_inner_product(inner(weights, features))
}

///Whether every point of `data` has strictly positive margin under `weights`.
pub fn is_separated_by(data : &Dataset, weights : ArrayView1<f32>) -> bool {
    data.points().all(|point| margin(weights, &point) > 0.0f32)
}

///Novikoff's upper bound `(R / gamma)^2` on the number of perceptron updates, where
///`R` is the largest feature norm in `data` and `gamma` is the smallest margin of
///the unit-normalised `witness`. Returns `None` if `witness` doesn't separate
///`data` with positive margin.
pub fn novikoff_bound(data : &Dataset, witness : ArrayView1<f32>) -> Option<f32> {
    let unit_witness = normalized(witness)?;
    let mut max_norm = 0.0f32;
    let mut min_margin = f32::INFINITY;
    for point in data.points() {
        max_norm = max_norm.max(norm(point.features.view()));
        min_margin = min_margin.min(margin(unit_witness.view(), &point));
    }
    if (min_margin > 0.0f32) {
        let ratio = max_norm / min_margin;
        Some(ratio * ratio)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand_utils::*;
    use crate::test_utils::*;

    #[test]
    fn two_point_example_converges_after_one_update() {
        let data = dataset_from(&[&[1.0, 1.0, 1.0], &[-1.0, -1.0, -1.0]]);
        let run = PerceptronTrainer::new().run(&data).unwrap();

        assert_equal_vectors(&run.weights, &array![1.0f32, 1.0f32]);
        assert_eq!(run.update_rows, vec![0]);
        //row 0 (update), row 0, row 1
        assert_eq!(run.num_inspections, 3);
        assert_eq!(train(&data), run.weights);
    }

    #[test]
    fn single_positive_point_is_learned_exactly() {
        let data = dataset_from(&[&[3.0, -4.0, 1.0]]);
        let run = PerceptronTrainer::new().run(&data).unwrap();
        assert_eq!(run.num_updates(), 1);
        assert_equal_vectors(&run.weights, &array![3.0f32, -4.0f32]);
        assert!(margin(run.weights.view(), &data.point(0)) > 0.0f32);
    }

    #[test]
    fn update_resets_scan_to_first_row() {
        //w = [1, 0] after row 0. Row 1 is then misclassified, which gives w = [1, 1],
        //and the scan must re-check row 0 before moving on.
        let data = dataset_from(&[&[1.0, 0.0, 1.0], &[0.0, 1.0, 1.0]]);
        let run = PerceptronTrainer::new().run(&data).unwrap();
        assert_eq!(run.update_rows, vec![0, 1]);
        assert_equal_vectors(&run.weights, &array![1.0f32, 1.0f32]);
        //row 0 (update), row 0, row 1 (update), row 0, row 1
        assert_eq!(run.num_inspections, 5);
    }

    #[test]
    fn training_separates_synthesized_data() {
        for seed in 0..10 {
            let mut rng = seeded_rng(seed);
            let ground_truth = array![2.0f32, 3.0f32];
            let data = make_linear_separable_data(&mut rng, ground_truth.view(), 40).unwrap();
            let weights = train(&data);
            assert!(is_separated_by(&data, weights.view()));
            for point in data.points() {
                assert_eps_equals(predict(weights.view(), point.features), point.label);
            }
        }
    }

    #[test]
    fn training_separates_higher_dimensional_data() {
        let mut rng = seeded_rng(2021);
        let ground_truth = array![4.0f32, 3.0f32, 2.0f32];
        let data = make_linear_separable_data(&mut rng, ground_truth.view(), 30).unwrap();
        let weights = train(&data);
        assert_eq!(weights.len(), 3);
        assert!(is_separated_by(&data, weights.view()));
    }

    #[test]
    fn training_is_deterministic() {
        let mut rng = seeded_rng(77);
        let ground_truth = array![-1.0f32, 2.5f32];
        let data = make_linear_separable_data(&mut rng, ground_truth.view(), 50).unwrap();

        let trainer = PerceptronTrainer::new();
        let one = trainer.run(&data).unwrap();
        let two = trainer.run(&data).unwrap();
        assert_eq!(one, two);
    }

    #[test]
    fn update_count_respects_novikoff_bound() {
        for seed in 10..20 {
            let mut rng = seeded_rng(seed);
            let ground_truth = array![1.0f32, -2.0f32];
            let data = make_linear_separable_data(&mut rng, ground_truth.view(), 40).unwrap();
            let run = PerceptronTrainer::new().run(&data).unwrap();
            match novikoff_bound(&data, ground_truth.view()) {
                Some(bound) => assert!((run.num_updates() as f32) <= bound),
                //A point landed exactly on the generating hyperplane
                None => assert!(!is_separated_by(&data, ground_truth.view()))
            }
        }
    }

    #[test]
    fn novikoff_bound_of_well_separated_data() {
        //R = sqrt(2), gamma = sqrt(2) for the unit witness [1, 1] / sqrt(2)
        let data = dataset_from(&[&[1.0, 1.0, 1.0], &[-1.0, -1.0, -1.0]]);
        let bound = novikoff_bound(&data, array![1.0f32, 1.0f32].view()).unwrap();
        assert_eps_equals(bound, 1.0f32);

        assert!(novikoff_bound(&data, array![1.0f32, -1.0f32].view()).is_none());
        assert!(novikoff_bound(&data, array![0.0f32, 0.0f32].view()).is_none());
    }

    #[test]
    fn bounded_trainer_reports_non_separable_data() {
        //Same point carrying both labels
        let data = dataset_from(&[&[1.0, 1.0, 1.0], &[1.0, 1.0, -1.0]]);
        let trainer = PerceptronTrainer::with_max_updates(10);
        assert_eq!(trainer.get_max_updates(), Some(10));
        match trainer.run(&data) {
            Err(PlaError::DidNotConverge { updates }) => assert_eq!(updates, 10),
            other => panic!("expected DidNotConverge, got {:?}", other)
        }
    }

    #[test]
    fn bounded_trainer_matches_unbounded_when_converging() {
        let mut rng = seeded_rng(8);
        let data = make_linear_separable_data(&mut rng, array![3.0f32, -1.0f32].view(), 25).unwrap();
        let unbounded = PerceptronTrainer::new().run(&data).unwrap();
        let bounded = PerceptronTrainer::with_max_updates(unbounded.num_updates()).run(&data).unwrap();
        assert_eq!(bounded, unbounded);

        if (unbounded.num_updates() > 0) {
            let too_tight = PerceptronTrainer::with_max_updates(unbounded.num_updates() - 1);
            assert!(too_tight.run(&data).is_err());
        }
    }

    #[test]
    fn points_on_the_boundary_count_as_misclassified() {
        let weights = array![1.0f32, -1.0f32];
        let data = dataset_from(&[&[2.0, 2.0, -1.0]]);
        assert_eps_equals(margin(weights.view(), &data.point(0)), 0.0f32);
        assert!(!is_separated_by(&data, weights.view()));
        assert_eps_equals(predict(weights.view(), data.features(0)), -1.0f32);
    }

    #[test]
    fn rendering_sees_trained_weights() {
        let data = dataset_from(&[&[1.0, 1.0, 1.0], &[-1.0, -1.0, -1.0]]);
        let mut renderer = RecordingRenderer::new();
        let (weights, render_outcome) = train_and_render(&data, &mut renderer);

        assert!(render_outcome.is_ok());
        assert_eq!(weights, train(&data));
        assert_eq!(renderer.calls, vec![RenderCall::Boundary(weights.clone())]);
    }

    #[test]
    fn weights_survive_a_failed_render() {
        //Learned weights are [0, 2], which leaves the weight arrow undefined
        let data = dataset_from(&[&[0.0, 2.0, 1.0]]);
        let mut renderer = RecordingRenderer::validating();
        let (weights, render_outcome) = train_and_render(&data, &mut renderer);

        assert_equal_vectors(&weights, &array![0.0f32, 2.0f32]);
        assert_eq!(weights, train(&data));
        assert_eq!(render_outcome, Err(PlaError::DegenerateBoundary { component : 0 }));
        assert!(renderer.calls.is_empty());
    }
}
