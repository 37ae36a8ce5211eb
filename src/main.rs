#![allow(unused_parens)]

extern crate ndarray;
extern crate pretty_env_logger;
#[macro_use] extern crate log;

use ndarray::*;

use pla::perceptron::*;
use pla::rand_utils::*;
use pla::renderer::*;
use pla::svg_plotter::*;
use pla::synthesizer::*;

use std::fs::File;

const SEED : u64 = 1337;
const NUM_LINES : usize = 100;
const MAX_UPDATES : usize = 100_000;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let ground_truth = array![2.0f32, 3.0f32];
    let mut rng = seeded_rng(SEED);

    info!("Synthesizing {} points around {}", NUM_LINES, ground_truth);
    let data = make_linear_separable_data(&mut rng, ground_truth.view(), NUM_LINES)?;
    plot_data(&data, &mut SvgPlotter::new("pla_data.svg"))?;

    info!("Training");
    let run = PerceptronTrainer::with_max_updates(MAX_UPDATES).run(&data)?;
    info!("Learned {} after {} updates", run.weights, run.num_updates());
    if (!is_separated_by(&data, run.weights.view())) {
        warn!("Learned weights do not separate the training data");
    }

    let mut plotter = SvgPlotter::new("pla_boundary.svg");
    if let Err(err) = plotter.render_boundary(&data, run.weights.view()) {
        warn!("Skipping boundary plot: {}", err);
    }

    let summary = File::create("pla_run.json")?;
    serde_json::to_writer_pretty(summary, &run)?;
    info!("Wrote pla_data.svg, pla_boundary.svg and pla_run.json");
    Ok(())
}
