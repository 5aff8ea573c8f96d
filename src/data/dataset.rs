//! Bundled sample dataset.
//!
//! A real observation series baked into the binary so `preg fit` works out
//! of the box with no input file. Pairs are stored as `[y, x]` JSON, the
//! dependent value first; the parser swaps them into column order.

use crate::domain::{Dataset, DatasetStats};
use crate::error::AppError;

/// Raw bundled observations as `[[y, x], ...]` pairs.
const RAW_PAIRS: &str = r#"[[46.22,324770300],[40.89,319110300],[46.52,314670300],[47.91,310030300],[45.24,304380300],[36.53,300310300],[46.73,291720300],[41.43,287400300],[38.22,279470300],[38.57,273060300],[41.99,269880300],[39.25,264230300],[42.96,258080300],[50.82,250790300],[49.37,243960300],[50.38,236600300],[62.46,227290300],[61.18,220670300],[62.76,212710300],[61.32,205910300],[54.12,199810300],[58.94,194880300],[48.15,189700300],[51.45,184530300],[67.71,177120300],[70.95,170740300],[48.5,164050300],[49.55,158440300],[44.76,153940300],[48.82,149540300],[37.89,145120300],[29.76,141240300],[24.91,138540300],[30.51,136070300],[25.34,133750300],[25.49,131220300],[24.84,126840300],[25.15,125944300],[31.9,125063300],[32.68,122433300],[34.08,117353300],[36.73,114533300],[49.88,104333300],[61.35,96523300],[57.9,88193300],[52.87,83973300],[51,77283300],[56.09,70823300],[44.58,66843300],[39.94,63063300],[34.3,60303300],[40.17,57193300],[36.53,53763300],[31.28,50943300],[30.11,47533300],[23.24,43903300],[20.54,40813300],[12.74,37493300],[10.24,35163300],[10.66,33303300],[9.18,31293300],[9.39,27613300],[5.76,25243300],[4.73,23893300],[4.87,22853300],[4.31,22137300],[4.52,21486300],[4.11,20386300],[4.11,19752300],[4.17,19632300],[3.8,18552300],[3.69,17957300],[3.47,17046300],[3.76,16563300],[3.76,16035300],[3.66,15756300],[3.41,15518300],[3.66,15251300],[3.61,14917300],[3.83,14549300],[3.59,14219300],[4.24,13615300],[3.48,13253300],[3.51,12937300],[3.51,12533300],[3.43,12127300],[3.48,11972300],[3.33,11483300],[3,11177300],[3.1,11002300],[3.06,10878300],[2.88,10758300],[2.95,10614300],[3.01,10492300],[2.87,10401800],[2.99,10257800],[2.87,10052800],[2.94,9378800],[2.8,8813800],[3.06,8289800],[2.9,7531800],[2.59,7094800],[2.61,6908800],[2.74,6691800],[2.45,6468800],[2.46,6206800],[2.06,5792800],[2.4,5193800],[2.64,4847800],[2.48,4475800],[2.66,4235800],[2.55,3841800],[2.25,3639800],[2.36,3473800],[2.35,3371800],[2.18,3170800],[2.17,3004800],[2.14,2929900],[2.16,2850000],[1.9,2780900],[1.74,2715200],[1.8,2618900],[1.45,2447900],[1.43,2251900],[1.38,2119900],[1.34,1990900],[1.41,1857900],[1.33,1674900],[1.36,1608800],[1.43,1504800],[1.3,1404900],[1.27,1140900],[1.29,1061100],[1.24,978900],[1.2,895300],[1.22,816400],[1.4,728900],[1.54,613900],[1.95,512900],[1.79,435000]]"#;

/// Parse the bundled dataset.
pub fn bundled_dataset() -> Result<Dataset, AppError> {
    parse_pairs(RAW_PAIRS)
}

/// Parse `[[y, x], ...]` JSON text into a dataset.
///
/// Every pair must have exactly two entries; serde rejects anything else.
pub fn parse_pairs(json: &str) -> Result<Dataset, AppError> {
    let pairs: Vec<[f64; 2]> = serde_json::from_str(json)
        .map_err(|e| AppError::new(2, format!("Failed to parse dataset JSON: {e}")))?;

    let mut x = Vec::with_capacity(pairs.len());
    let mut y = Vec::with_capacity(pairs.len());
    for pair in &pairs {
        y.push(pair[0]);
        x.push(pair[1]);
    }

    Ok(Dataset { x, y })
}

/// Summarize a dataset for display. Empty datasets have no extent.
pub fn compute_stats(dataset: &Dataset) -> Option<DatasetStats> {
    if dataset.is_empty() {
        return None;
    }

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for (&xv, &yv) in dataset.x.iter().zip(dataset.y.iter()) {
        x_min = x_min.min(xv);
        x_max = x_max.max(xv);
        y_min = y_min.min(yv);
        y_max = y_max.max(yv);
    }

    Some(DatasetStats {
        n_points: dataset.len(),
        x_min,
        x_max,
        y_min,
        y_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_has_expected_shape() {
        let dataset = bundled_dataset().unwrap();
        assert_eq!(dataset.len(), 140);
        assert_eq!(dataset.x.len(), dataset.y.len());

        // Pairs are [y, x]; spot-check both ends of the series.
        assert_eq!(dataset.y[0], 46.22);
        assert_eq!(dataset.x[0], 324770300.0);
        assert_eq!(dataset.y[139], 1.79);
        assert_eq!(dataset.x[139], 435000.0);
    }

    #[test]
    fn stats_cover_the_full_extent() {
        let dataset = bundled_dataset().unwrap();
        let stats = compute_stats(&dataset).unwrap();

        assert_eq!(stats.n_points, 140);
        assert_eq!(stats.x_min, 435000.0);
        assert_eq!(stats.x_max, 324770300.0);
        assert_eq!(stats.y_min, 1.2);
        assert_eq!(stats.y_max, 70.95);
    }

    #[test]
    fn empty_dataset_has_no_stats() {
        assert!(compute_stats(&Dataset::default()).is_none());
    }

    #[test]
    fn malformed_pairs_are_rejected() {
        let err = parse_pairs("[[1.0], [2.0, 3.0]]").unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let err = parse_pairs("not json").unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn pairs_swap_into_column_order() {
        let dataset = parse_pairs("[[10.0, 1.0], [20.0, 2.0]]").unwrap();
        assert_eq!(dataset.y, vec![10.0, 20.0]);
        assert_eq!(dataset.x, vec![1.0, 2.0]);
    }
}
