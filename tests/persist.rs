//! Round-trip tests for the persisted model artifact.
//!
//! The binding contract: a reloaded artifact classifies every record
//! identically to the in-memory tree it was exported from.

use dtree::data::{Dataset, Label};
use dtree::model::{TreeConfig, TreeModel};
use dtree::persist;
use dtree::testing::{noisy_threshold_labels, random_coarse_features};

fn trained_model() -> (TreeModel, Dataset) {
    let features = random_coarse_features(250, 4, 77, 0, 20, 2);
    let labels = noisy_threshold_labels(&features, 1, 8, 0.05, 78);
    let dataset = Dataset::new(features, labels).unwrap();
    let model = TreeModel::train(&dataset, TreeConfig::default())
        .with_attribute_names(vec!["a".into(), "b".into(), "c".into(), "d".into()]);
    (model, dataset)
}

#[test]
fn reloaded_model_classifies_training_set_identically() {
    let (model, dataset) = trained_model();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.dtree.json");
    persist::save_json(&model, &path).unwrap();
    let reloaded = persist::load_json(&path).unwrap();

    assert_eq!(
        reloaded.predict(dataset.features(), 1),
        model.predict(dataset.features(), 1)
    );
}

#[test]
fn reloaded_model_agrees_on_out_of_distribution_records() {
    let (model, _) = trained_model();

    let mut buffer = Vec::new();
    persist::write_json(&model, &mut buffer).unwrap();
    let reloaded = persist::read_json(buffer.as_slice()).unwrap();

    // Records far outside the training grid, including negatives and odd
    // values the coarsening would never produce.
    let ood = random_coarse_features(100, 4, 123, -50, 50, 1);
    assert_eq!(
        reloaded.predict(ood.view(), 1),
        model.predict(ood.view(), 1)
    );
}

#[test]
fn artifact_preserves_metadata_and_shape() {
    let (model, _) = trained_model();

    let mut buffer = Vec::new();
    persist::write_json(&model, &mut buffer).unwrap();
    let reloaded = persist::read_json(buffer.as_slice()).unwrap();

    assert_eq!(reloaded.meta(), model.meta());
    assert_eq!(reloaded.tree().n_nodes(), model.tree().n_nodes());
    assert_eq!(reloaded.tree().n_leaves(), model.tree().n_leaves());
    assert_eq!(reloaded.tree().max_depth(), model.tree().max_depth());
    assert_eq!(reloaded.tree().validate(), Ok(()));
}

#[test]
fn single_leaf_model_round_trips() {
    // A degenerate artifact: one unanimous leaf, no decision nodes.
    let features = random_coarse_features(5, 2, 9, 0, 10, 2);
    let dataset = Dataset::new(features, vec![Label::Pos; 5]).unwrap();
    let model = TreeModel::train(&dataset, TreeConfig::default());
    assert_eq!(model.tree().n_nodes(), 1);

    let mut buffer = Vec::new();
    persist::write_json(&model, &mut buffer).unwrap();
    let reloaded = persist::read_json(buffer.as_slice()).unwrap();

    let probe = random_coarse_features(20, 2, 10, -10, 30, 1);
    assert_eq!(
        reloaded.predict(probe.view(), 1),
        vec![Label::Pos; 20]
    );
}

#[test]
fn corrupted_artifact_is_rejected() {
    let (model, _) = trained_model();
    let mut schema = persist::to_schema(&model);
    schema.tree.children_right[0] = schema.tree.num_nodes + 100;

    let text = serde_json::to_string(&schema).unwrap();
    let err = persist::read_json(text.as_bytes()).unwrap_err();
    assert!(matches!(err, persist::PersistError::Structure(_)));
}
