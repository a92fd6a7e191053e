//! Statistical checks of the models driven by the seeded production sampler.

use synth_core::rng::SynthRng;
use synth_models::models::{
    GbmModel, GbmParams, JumpDiffusionModel, JumpDiffusionParams, OuModel, OuParams, PricingModel,
};

fn terminal_prices<M: PricingModel>(
    mut build: impl FnMut(u64) -> M,
    paths: u64,
    steps: usize,
) -> Vec<f64> {
    (0..paths)
        .map(|seed| {
            let mut model = build(seed);
            for _ in 0..steps {
                model.advance();
            }
            model.current_price()
        })
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[test]
fn gbm_terminal_mean_matches_drift() {
    // E[S_T] = S_0 * (1 + mu*dt)^n for the Euler scheme
    let params = GbmParams::new(0.05, 0.2).unwrap();
    let prices = terminal_prices(
        |seed| GbmModel::new(100.0, 0.01, params, SynthRng::from_seed(seed)).unwrap(),
        4_000,
        100,
    );
    let expected = 100.0 * (1.0_f64 + 0.05 * 0.01).powi(100);
    let m = mean(&prices);
    assert!((m - expected).abs() < 1.0, "mean {} vs {}", m, expected);
}

#[test]
fn ou_converges_towards_long_run_mean() {
    let params = OuParams::new(50.0, 2.0, 1.0).unwrap();
    let prices = terminal_prices(
        |seed| OuModel::new(100.0, 0.01, params, SynthRng::from_seed(seed)).unwrap(),
        2_000,
        500,
    );
    // 5 time units at rate 2: the initial gap has decayed by about e^-10
    let m = mean(&prices);
    assert!((m - 50.0).abs() < 0.1, "mean {}", m);
}

#[test]
fn jump_frequency_tracks_intensity() {
    let params = JumpDiffusionParams::new(0.0, 0.0, 10.0, 0.0, 0.05).unwrap();
    let mut model =
        JumpDiffusionModel::new(100.0, 0.001, params, SynthRng::from_seed(11)).unwrap();
    let steps = 200_000;
    for _ in 0..steps {
        model.advance();
    }
    // Expected 0.01 * 200_000 = 2_000 jumps
    let jumps = model.jump_count() as f64;
    assert!((jumps - 2_000.0).abs() < 150.0, "jumps {}", jumps);
}

#[test]
fn same_seed_reproduces_path() {
    let params = JumpDiffusionParams::new(0.01, 0.01, 0.05, 0.1, 0.01).unwrap();
    let path = |seed| {
        let mut model =
            JumpDiffusionModel::new(100.0, 0.001, params, SynthRng::from_seed(seed)).unwrap();
        (0..50).map(|_| model.advance()).collect::<Vec<_>>()
    };
    assert_eq!(path(5), path(5));
    assert_ne!(path(5), path(6));
}
