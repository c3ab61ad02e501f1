//! Statistics over indexed models

use super::ZooIndex;
use crate::core::ZooError;
use crate::stats::{compute_stats, DiagramStats};
use tracing::{info, span, Level};

/// Look up a model's `.yuml` source, parse it and compute its statistics
pub fn compute_model_stats(model: &str, index: &ZooIndex) -> Result<DiagramStats, ZooError> {
    let path = index.path_for(model)?;
    let graph = crate::parse_file(path)?;
    Ok(compute_stats(model, &graph))
}

/// Statistics for every `.yuml` model in the index, in index order
///
/// Stops at the first source that cannot be read.
pub fn collect_stats(index: &ZooIndex) -> Result<Vec<DiagramStats>, ZooError> {
    let collect_span = span!(Level::INFO, "collect_stats");
    let _enter = collect_span.enter();

    let records = index
        .yuml_models()
        .map(|(model, path)| -> Result<DiagramStats, ZooError> {
            let graph = crate::parse_file(path)?;
            Ok(compute_stats(model, &graph))
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(models = records.len(), "Collected diagram statistics");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::TreeDepth;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_compute_model_stats() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Zoo.yuml"), "[Animal]^[Cat]\n[Cat]->[Mouse]\n").unwrap();
        let index = ZooIndex::scan(dir.path()).unwrap();

        let stats = compute_model_stats("Zoo", &index).unwrap();
        assert_eq!(stats.model, "Zoo");
        assert_eq!(stats.num_classes, 3);
        assert_eq!(stats.tree_depth, TreeDepth::Depth(1));
    }

    #[test]
    fn test_unknown_model_is_not_found() {
        let dir = tempdir().unwrap();
        let index = ZooIndex::scan(dir.path()).unwrap();
        let err = compute_model_stats("Ghost", &index).unwrap_err();
        assert!(err.to_string().contains("Ghost"));
    }

    #[test]
    fn test_collect_stats_skips_non_yuml() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("A.yuml"), "[A]->[B]").unwrap();
        fs::write(dir.path().join("B.yuml"), "[X]").unwrap();
        fs::write(dir.path().join("A.png"), "not a diagram").unwrap();
        let index = ZooIndex::scan(dir.path()).unwrap();

        let records = collect_stats(&index).unwrap();
        let models: Vec<_> = records.iter().map(|r| r.model.as_str()).collect();
        assert_eq!(models, vec!["A", "B"]);
    }

    #[test]
    fn test_unreadable_source_propagates() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Bad.yuml"), [0xff, 0xfe, 0x00]).unwrap();
        let index = ZooIndex::scan(dir.path()).unwrap();
        assert!(matches!(collect_stats(&index), Err(ZooError::Io { .. })));
    }
}
