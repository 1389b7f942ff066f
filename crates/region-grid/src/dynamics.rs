//! Region dynamics: how density mass moves between absolute and normalized
//! partitions of the same scatter
//!
//! For each region, with `a = freq_absolute` and `n = freq_normalized`:
//!
//! - `net_flow = n - a`
//! - `relative_change_ratio = (n - a) / (a + 1)`
//! - `redistribution_index = |n - a| / (a + n + 1)`
//!
//! The `+1` terms keep empty regions well defined. They also mean the ratio
//! is not a percentage change: a region going from 0 to 4 points has ratio 4,
//! and one going from 9 to 10 has ratio 0.1. The redistribution index always
//! lies in `[0, 1)`.

use crate::density::DensityTable;
use region_core::{BinningMode, Error, RegionId, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::{debug, instrument};

/// Derived metrics for one region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionDynamics {
    #[serde(serialize_with = "serialize_label", deserialize_with = "deserialize_label")]
    pub region: RegionId,
    pub freq_absolute: u64,
    pub freq_normalized: u64,
    pub density_absolute: f64,
    pub density_normalized: f64,
    pub net_flow: i64,
    pub relative_change_ratio: f64,
    pub redistribution_index: f64,
}

impl RegionDynamics {
    /// Derive every metric from the two counts of a region
    pub fn from_counts(
        region: RegionId,
        freq_absolute: u64,
        freq_normalized: u64,
        total_points: u64,
    ) -> Self {
        let a = freq_absolute as f64;
        let n = freq_normalized as f64;
        let total = total_points as f64;
        let net_flow = freq_normalized as i64 - freq_absolute as i64;

        Self {
            region,
            freq_absolute,
            freq_normalized,
            density_absolute: a / total,
            density_normalized: n / total,
            net_flow,
            relative_change_ratio: net_flow as f64 / (a + 1.0),
            redistribution_index: net_flow.unsigned_abs() as f64 / (a + n + 1.0),
        }
    }

    /// True if normalization moved points into this region
    pub fn gained(&self) -> bool {
        self.net_flow > 0
    }

    /// True if normalization moved points out of this region
    pub fn lost(&self) -> bool {
        self.net_flow < 0
    }
}

impl fmt::Display for RegionDynamics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {} (flow={:+}, ratio={:.3}, index={:.3})",
            self.region,
            self.freq_absolute,
            self.freq_normalized,
            self.net_flow,
            self.relative_change_ratio,
            self.redistribution_index
        )
    }
}

/// Per-region dynamics over a whole grid, in canonical region order
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicsTable {
    k: usize,
    total_points: u64,
    rows: Vec<RegionDynamics>,
}

impl DynamicsTable {
    /// Bins per axis
    pub fn k(&self) -> usize {
        self.k
    }

    /// Denominator used for the densities
    pub fn total_points(&self) -> u64 {
        self.total_points
    }

    pub fn rows(&self) -> &[RegionDynamics] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RegionDynamics> {
        self.rows.iter()
    }

    /// Row for a region
    pub fn get(&self, region: RegionId) -> Option<&RegionDynamics> {
        self.rows
            .binary_search_by(|row| row.region.cmp(&region))
            .ok()
            .map(|pos| &self.rows[pos])
    }

    /// Rows ordered by decreasing redistribution index; ties keep region order
    pub fn ranked_by_redistribution(&self) -> Vec<&RegionDynamics> {
        let mut ranked: Vec<_> = self.rows.iter().collect();
        ranked.sort_by(|a, b| b.redistribution_index.total_cmp(&a.redistribution_index));
        ranked
    }

    /// Aggregate view of the table
    pub fn summary(&self) -> DynamicsSummary {
        let mut summary = DynamicsSummary {
            regions: self.rows.len(),
            ..DynamicsSummary::default()
        };

        let mut best: Option<&RegionDynamics> = None;
        let mut index_sum = 0.0;
        for row in &self.rows {
            if row.gained() {
                summary.gaining += 1;
            } else if row.lost() {
                summary.losing += 1;
            } else {
                summary.unchanged += 1;
            }
            summary.net_flow_sum += row.net_flow;
            summary.total_abs_flow += row.net_flow.unsigned_abs();
            index_sum += row.redistribution_index;

            if row.redistribution_index > best.map_or(0.0, |b| b.redistribution_index) {
                best = Some(row);
            }
        }

        summary.relocated_points = summary.total_abs_flow as f64 / 2.0;
        if !self.rows.is_empty() {
            summary.mean_redistribution_index = index_sum / self.rows.len() as f64;
        }
        summary.most_redistributed = best.map(|row| row.region);
        summary
    }
}

impl<'a> IntoIterator for &'a DynamicsTable {
    type Item = &'a RegionDynamics;
    type IntoIter = std::slice::Iter<'a, RegionDynamics>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Grid-wide summary of a [`DynamicsTable`]
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DynamicsSummary {
    pub regions: usize,
    /// Regions with positive net flow
    pub gaining: usize,
    /// Regions with negative net flow
    pub losing: usize,
    pub unchanged: usize,
    /// Sum of signed net flow (0 unless points were dropped)
    pub net_flow_sum: i64,
    /// Sum of |net flow| over all regions
    pub total_abs_flow: u64,
    /// Half the total absolute flow: points that changed region on balance
    pub relocated_points: f64,
    pub mean_redistribution_index: f64,
    /// Region with the largest redistribution index, if any moved at all
    #[serde(serialize_with = "serialize_optional_label")]
    pub most_redistributed: Option<RegionId>,
}

/// Join an absolute and a normalized density table region by region
///
/// Both tables must cover the same k×k grid; `total_points` is the number of
/// points in the scatter and must be positive and at least each table's total.
///
/// # Panics
///
/// Panics if the two tables were built for different grid resolutions. The
/// aggregator always completes tables over the full grid, so this only
/// happens when the caller mixes tables from different configurations.
#[instrument(skip(absolute, normalized), fields(k = absolute.k()))]
pub fn compute_dynamics(
    absolute: &DensityTable,
    normalized: &DensityTable,
    total_points: usize,
) -> Result<DynamicsTable> {
    assert_eq!(
        absolute.k(),
        normalized.k(),
        "density tables cover different grids"
    );
    debug_assert!(
        absolute.mode() == BinningMode::Absolute && normalized.mode() == BinningMode::Normalized,
        "expected (absolute, normalized) density tables, got ({}, {})",
        absolute.mode(),
        normalized.mode()
    );

    if total_points == 0 {
        return Err(Error::InvalidInput(
            "total_points must be positive to compute densities".to_string(),
        ));
    }
    let total = total_points as u64;
    for table in [absolute, normalized] {
        if table.total() > total {
            return Err(Error::InvalidInput(format!(
                "{} density table holds {} points but total_points is {}",
                table.mode(),
                table.total(),
                total
            )));
        }
    }

    let rows: Vec<RegionDynamics> = absolute
        .iter()
        .zip(normalized.iter())
        .map(|((region, a), (other, n))| {
            debug_assert_eq!(region, other);
            RegionDynamics::from_counts(region, a, n, total)
        })
        .collect();

    debug!(
        regions = rows.len(),
        moved = rows.iter().filter(|r| r.net_flow != 0).count(),
        "computed region dynamics"
    );

    Ok(DynamicsTable {
        k: absolute.k(),
        total_points: total,
        rows,
    })
}

fn serialize_label<S: Serializer>(
    region: &RegionId,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(region)
}

fn serialize_optional_label<S: Serializer>(
    region: &Option<RegionId>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match region {
        Some(region) => serializer.collect_str(region),
        None => serializer.serialize_none(),
    }
}

fn deserialize_label<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<RegionId, D::Error> {
    let label = String::deserialize(deserializer)?;
    label.parse().map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::aggregate;
    use crate::types::RegionAssignment;
    use approx::assert_relative_eq;
    use region_core::Grid;

    fn region(i: usize, j: usize) -> RegionId {
        RegionId::new(i, j).unwrap()
    }

    fn table(k: usize, mode: BinningMode, regions: &[(usize, usize)]) -> DensityTable {
        let assignments: Vec<_> = regions
            .iter()
            .enumerate()
            .map(|(index, &(i, j))| RegionAssignment {
                index,
                region: region(i, j),
            })
            .collect();
        aggregate(&assignments, Grid::new(k, mode).unwrap()).unwrap()
    }

    #[test]
    fn test_empty_to_four() {
        let row = RegionDynamics::from_counts(region(1, 1), 0, 4, 10);
        assert_eq!(row.net_flow, 4);
        assert_eq!(row.relative_change_ratio, 4.0);
        assert_eq!(row.redistribution_index, 0.8);
        assert_eq!(row.density_absolute, 0.0);
        assert_relative_eq!(row.density_normalized, 0.4);
    }

    #[test]
    fn test_both_empty_is_all_zero() {
        let row = RegionDynamics::from_counts(region(2, 3), 0, 0, 7);
        assert_eq!(row.net_flow, 0);
        assert_eq!(row.density_absolute, 0.0);
        assert_eq!(row.density_normalized, 0.0);
        assert_eq!(row.relative_change_ratio, 0.0);
        assert_eq!(row.redistribution_index, 0.0);
    }

    #[test]
    fn test_loss_is_negative() {
        let row = RegionDynamics::from_counts(region(1, 1), 9, 3, 20);
        assert_eq!(row.net_flow, -6);
        assert_relative_eq!(row.relative_change_ratio, -0.6);
        assert_relative_eq!(row.redistribution_index, 6.0 / 13.0);
        assert!(row.lost());
    }

    #[test]
    fn test_join_preserves_canonical_order() {
        let abs = table(2, BinningMode::Absolute, &[(2, 2), (2, 2), (2, 2), (1, 1)]);
        let norm = table(2, BinningMode::Normalized, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let dynamics = compute_dynamics(&abs, &norm, 4).unwrap();

        let labels: Vec<_> = dynamics.iter().map(|r| r.region.label()).collect();
        assert_eq!(labels, ["R(1,1)", "R(1,2)", "R(2,1)", "R(2,2)"]);

        let flows: Vec<_> = dynamics.iter().map(|r| r.net_flow).collect();
        assert_eq!(flows, [0, 1, 1, -2]);

        let r22 = dynamics.get(region(2, 2)).unwrap();
        assert_relative_eq!(r22.density_absolute, 0.75);
        assert_relative_eq!(r22.density_normalized, 0.25);
        assert_relative_eq!(r22.relative_change_ratio, -0.5);
        assert_relative_eq!(r22.redistribution_index, 2.0 / 5.0);
    }

    #[test]
    fn test_summary() {
        let abs = table(2, BinningMode::Absolute, &[(2, 2), (2, 2), (2, 2), (1, 1)]);
        let norm = table(2, BinningMode::Normalized, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let summary = compute_dynamics(&abs, &norm, 4).unwrap().summary();

        assert_eq!(summary.regions, 4);
        assert_eq!(summary.gaining, 2);
        assert_eq!(summary.losing, 1);
        assert_eq!(summary.unchanged, 1);
        assert_eq!(summary.net_flow_sum, 0);
        assert_eq!(summary.total_abs_flow, 4);
        assert_eq!(summary.relocated_points, 2.0);
        assert_eq!(summary.most_redistributed, Some(region(1, 2)));
    }

    #[test]
    fn test_ranking_keeps_ties_in_region_order() {
        let abs = table(2, BinningMode::Absolute, &[(1, 1), (1, 1)]);
        let norm = table(2, BinningMode::Normalized, &[(1, 2), (2, 1)]);
        let dynamics = compute_dynamics(&abs, &norm, 2).unwrap();

        let ranked: Vec<_> = dynamics
            .ranked_by_redistribution()
            .iter()
            .map(|r| r.region.label())
            .collect();
        // R(1,1): 2/3, R(1,2) and R(2,1): 1/2 each, R(2,2): 0
        assert_eq!(ranked, ["R(1,1)", "R(1,2)", "R(2,1)", "R(2,2)"]);
    }

    #[test]
    fn test_zero_total_rejected() {
        let abs = table(2, BinningMode::Absolute, &[]);
        let norm = table(2, BinningMode::Normalized, &[]);
        assert!(matches!(
            compute_dynamics(&abs, &norm, 0),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_total_smaller_than_table_rejected() {
        let abs = table(2, BinningMode::Absolute, &[(1, 1), (1, 1), (2, 2)]);
        let norm = table(2, BinningMode::Normalized, &[(1, 1), (1, 1), (2, 2)]);
        let err = compute_dynamics(&abs, &norm, 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: absolute density table holds 3 points but total_points is 2"
        );
    }

    #[test]
    #[should_panic(expected = "density tables cover different grids")]
    fn test_mismatched_grids_panic() {
        let abs = table(2, BinningMode::Absolute, &[(1, 1)]);
        let norm = table(3, BinningMode::Normalized, &[(1, 1)]);
        let _ = compute_dynamics(&abs, &norm, 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "expected (absolute, normalized) density tables")]
    fn test_swapped_tables_panic() {
        let abs = table(2, BinningMode::Absolute, &[(1, 1)]);
        let norm = table(2, BinningMode::Normalized, &[(2, 2)]);
        let _ = compute_dynamics(&norm, &abs, 1);
    }

    #[test]
    fn test_row_serializes_region_label() {
        let row = RegionDynamics::from_counts(region(1, 2), 0, 4, 10);
        let json = serde_json::to_value(row).unwrap();
        assert_eq!(json["region"], "R(1,2)");
        assert_eq!(json["freq_normalized"], 4);
        assert_eq!(json["net_flow"], 4);

        let back: RegionDynamics = serde_json::from_value(json).unwrap();
        assert_eq!(back, row);
        assert_eq!(back.region, region(1, 2));
    }

    #[test]
    fn test_row_rejects_malformed_label() {
        let mut json = serde_json::to_value(RegionDynamics::from_counts(region(1, 1), 1, 1, 2)).unwrap();
        for bad in ["R(0,1)", "R(1,2", "region 1"] {
            json["region"] = serde_json::Value::from(bad);
            let err = serde_json::from_value::<RegionDynamics>(json.clone()).unwrap_err();
            assert!(err.to_string().contains("Invalid region label"), "{bad}: {err}");
        }
    }

    #[test]
    fn test_summary_serialization() {
        let abs = table(2, BinningMode::Absolute, &[(1, 1), (2, 2)]);
        let norm = table(2, BinningMode::Normalized, &[(1, 1), (2, 2)]);
        let still = compute_dynamics(&abs, &norm, 2).unwrap().summary();
        let json = serde_json::to_value(&still).unwrap();
        assert!(json["most_redistributed"].is_null());
        assert_eq!(json["unchanged"], 4);

        let moved = table(2, BinningMode::Normalized, &[(1, 2), (2, 2)]);
        let summary = compute_dynamics(&abs, &moved, 2).unwrap().summary();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["most_redistributed"], "R(1,1)");
    }

    #[test]
    fn test_display_row() {
        let row = RegionDynamics::from_counts(region(1, 2), 0, 4, 10);
        assert_eq!(
            row.to_string(),
            "R(1,2): 0 -> 4 (flow=+4, ratio=4.000, index=0.800)"
        );
    }
}
