use nfa_compiler::{Canvas, Converter, Snapshot};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

#[test]
fn should_serialize_empty_snapshot_for_renderer() {
    assert_eq!(
        json!({ "states": [], "transitions": [] }),
        serde_json::to_value(Snapshot::empty()).unwrap()
    );
}

#[test]
fn should_serialize_states_and_transitions_in_renderer_shape() {
    let mut converter = Converter::with_rng(Canvas::new(800.0, 500.0), StdRng::seed_from_u64(0));
    let snapshot = converter.convert("").unwrap();

    // the empty expression holds only the anchors, which are never jittered.
    assert_eq!(
        json!({
            "states": [
                { "id": "q0", "isInitial": true, "isFinal": false, "x": 80.0, "y": 250.0 },
                { "id": "q1", "isInitial": false, "isFinal": true, "x": 720.0, "y": 250.0 },
            ],
            "transitions": [
                { "from": "q0", "to": "q1", "symbol": "ε" },
            ],
        }),
        serde_json::to_value(&*snapshot).unwrap()
    );
}
