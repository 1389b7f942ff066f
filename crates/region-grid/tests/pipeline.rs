//! Whole-pipeline checks across several axis pairs of one dataset

use rand::prelude::*;
use rand_distr::Normal;
use region_core::{BinningMode, Point};
use region_grid::{aggregate_partition, analyze, compute_dynamics, partition, OutOfRangePolicy};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Four correlated measurements per observation
fn measurements(n: usize, seed: u64) -> Vec<[f64; 4]> {
    let mut rng = StdRng::seed_from_u64(seed);
    let base = Normal::new(5.8, 0.8).unwrap();
    let noise = Normal::new(0.0, 0.3).unwrap();
    (0..n)
        .map(|_| {
            let b: f64 = base.sample(&mut rng);
            [
                b,
                (0.5 * b + noise.sample(&mut rng)).max(0.0),
                (0.9 * b - 1.5 + noise.sample(&mut rng)).max(0.0),
                (0.4 * b - 1.0 + noise.sample(&mut rng)).max(0.0),
            ]
        })
        .collect()
}

#[test]
fn test_axis_pairs_are_independent() -> anyhow::Result<()> {
    init_tracing();
    let rows = measurements(150, 11);

    let pairs = [(0, 1), (2, 3), (0, 2)];
    let mut analyses = Vec::new();
    for (x, y) in pairs {
        let points: Vec<Point> = rows.iter().map(|r| Point::new(r[x], r[y])).collect();
        analyses.push(analyze(&points, 4, OutOfRangePolicy::Reject)?);
    }

    for analysis in &analyses {
        assert_eq!(analysis.absolute.len(), 16);
        assert_eq!(analysis.normalized.len(), 16);
        assert_eq!(analysis.absolute.total(), 150);
        assert_eq!(analysis.dynamics.summary().net_flow_sum, 0);
    }

    // Re-running one pair gives the same table
    let points: Vec<Point> = rows.iter().map(|r| Point::new(r[2], r[3])).collect();
    let again = analyze(&points, 4, OutOfRangePolicy::Reject)?;
    assert_eq!(again.dynamics, analyses[1].dynamics);
    Ok(())
}

#[test]
fn test_manual_pipeline_matches_analyze() -> anyhow::Result<()> {
    init_tracing();
    let rows = measurements(80, 5);
    let points: Vec<Point> = rows.iter().map(|r| Point::new(r[0], r[2])).collect();

    let absolute = aggregate_partition(&partition(&points, 3, BinningMode::Absolute)?)?;
    let normalized = aggregate_partition(&partition(&points, 3, BinningMode::Normalized)?)?;
    let dynamics = compute_dynamics(&absolute, &normalized, points.len())?;

    let analysis = analyze(&points, 3, OutOfRangePolicy::Reject)?;
    assert_eq!(analysis.absolute, absolute);
    assert_eq!(analysis.normalized, normalized);
    assert_eq!(analysis.dynamics, dynamics);
    Ok(())
}
