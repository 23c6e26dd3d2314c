//! Object gesture workflows: drag/pinch composition over full gestures.

use crate::helpers::{RecordingSink, SinkEvent, TestEngineBuilder, run_gesture};
use pinchboard::{Filter, GestureEvent, NoopSink};

#[test]
fn test_drag_deltas_sum() {
    let (mut engine, ids) = TestEngineBuilder::new().with_image(100.0, 100.0).build();
    let start = engine.transform_of(ids[0]).unwrap().position;

    let mut sink = RecordingSink::new();
    run_gesture(
        &mut engine,
        &mut sink,
        (120.0, 120.0),
        &[
            GestureEvent::Drag { dx: 5.0, dy: -2.0 },
            GestureEvent::Drag { dx: -1.5, dy: 4.0 },
            GestureEvent::Drag { dx: 10.0, dy: 0.0 },
        ],
    );

    let position = engine.transform_of(ids[0]).unwrap().position;
    assert_eq!(position.x, start.x + 13.5);
    assert_eq!(position.y, start.y + 2.0);
}

#[test]
fn test_pinch_deltas_multiply() {
    let (mut engine, ids) = TestEngineBuilder::new().with_image(100.0, 100.0).build();

    let mut sink = RecordingSink::new();
    run_gesture(
        &mut engine,
        &mut sink,
        (120.0, 120.0),
        &[
            GestureEvent::Pinch { ds: 0.5 },
            GestureEvent::Pinch { ds: -0.2 },
            GestureEvent::Pinch { ds: 0.1 },
        ],
    );

    let scale = engine.transform_of(ids[0]).unwrap().scale;
    let expected = 1.0 * 1.5 * 0.8 * 1.1;
    assert!((scale - expected).abs() < 1e-6, "scale {scale} != {expected}");
}

#[test]
fn test_interleaved_drag_and_pinch_compose() {
    let (mut engine, ids) = TestEngineBuilder::new().with_image(100.0, 100.0).build();

    let mut sink = RecordingSink::new();
    run_gesture(
        &mut engine,
        &mut sink,
        (120.0, 120.0),
        &[
            GestureEvent::Drag { dx: 10.0, dy: 0.0 },
            GestureEvent::Pinch { ds: 1.0 },
            GestureEvent::Drag { dx: 0.0, dy: 10.0 },
            GestureEvent::Pinch { ds: -0.5 },
        ],
    );

    let transform = engine.transform_of(ids[0]).unwrap();
    // Each event kind touches only its own field.
    assert_eq!(transform.position.x, 110.0);
    assert_eq!(transform.position.y, 110.0);
    assert!((transform.scale - 1.0).abs() < 1e-6);
}

#[test]
fn test_every_move_rerenders_immediately() {
    let (mut engine, ids) = TestEngineBuilder::new().with_image(100.0, 100.0).build();

    let mut sink = RecordingSink::new();
    run_gesture(
        &mut engine,
        &mut sink,
        (120.0, 120.0),
        &[
            GestureEvent::Drag { dx: 1.0, dy: 1.0 },
            GestureEvent::Drag { dx: 1.0, dy: 1.0 },
            GestureEvent::Pinch { ds: 0.1 },
        ],
    );

    // One instruction per move, no batching, all for the dragged object.
    let object_events: Vec<_> = sink
        .events
        .iter()
        .filter(|event| matches!(event, SinkEvent::Object(id, _) if *id == ids[0]))
        .collect();
    assert_eq!(object_events.len(), 3);
}

#[test]
fn test_object_scale_is_not_range_clamped() {
    let (mut engine, ids) = TestEngineBuilder::new().with_image(100.0, 100.0).build();

    let mut sink = RecordingSink::new();
    run_gesture(
        &mut engine,
        &mut sink,
        (120.0, 120.0),
        &[GestureEvent::Pinch { ds: 9.0 }],
    );

    // Canvas zoom would clamp at 3.0; a single object's scale does not.
    assert_eq!(engine.transform_of(ids[0]).unwrap().scale, 10.0);
}

#[test]
fn test_object_scale_is_floored_at_epsilon() {
    let (mut engine, ids) = TestEngineBuilder::new().with_image(100.0, 100.0).build();

    let mut sink = RecordingSink::new();
    run_gesture(
        &mut engine,
        &mut sink,
        (120.0, 120.0),
        &[GestureEvent::Pinch { ds: -1.5 }],
    );

    // A delta at or below -1.0 would zero or invert the scale; it is floored
    // to a small positive epsilon instead.
    let scale = engine.transform_of(ids[0]).unwrap().scale;
    assert!(scale > 0.0);
    assert_eq!(scale, pinchboard::constants::MIN_OBJECT_SCALE);
}

#[test]
fn test_routing_holds_for_gesture_duration() {
    // Two stacked objects; the gesture grabs the topmost and keeps it even
    // after dragging it off the other one.
    let (mut engine, ids) = TestEngineBuilder::new()
        .with_image(100.0, 100.0)
        .with_image(100.0, 100.0)
        .build();

    let mut sink = RecordingSink::new();
    run_gesture(
        &mut engine,
        &mut sink,
        (120.0, 120.0),
        &[
            GestureEvent::Drag { dx: 500.0, dy: 0.0 },
            GestureEvent::Drag { dx: 50.0, dy: 0.0 },
        ],
    );

    assert_eq!(engine.transform_of(ids[1]).unwrap().position.x, 650.0);
    // The bottom object never moved.
    assert_eq!(engine.transform_of(ids[0]).unwrap().position.x, 100.0);
}

#[test]
fn test_deltas_for_object_deleted_mid_gesture_are_dropped() {
    let (mut engine, ids) = TestEngineBuilder::new().with_image(100.0, 100.0).build();

    let mut sink = RecordingSink::new();
    engine.dispatch(GestureEvent::Start { x: 120.0, y: 120.0 }, &mut sink);
    engine.dispatch(GestureEvent::Drag { dx: 5.0, dy: 5.0 }, &mut sink);

    // Deleted out from under the active gesture (e.g. via context menu).
    engine.delete_one(ids[0], &mut sink);
    sink.clear();

    engine.dispatch(GestureEvent::Drag { dx: 5.0, dy: 5.0 }, &mut sink);
    engine.dispatch(GestureEvent::Pinch { ds: 0.5 }, &mut sink);
    engine.dispatch(GestureEvent::End, &mut sink);

    // Remaining deltas no-op: no instructions, no resurrection.
    assert!(sink.events.is_empty());
    assert!(!engine.contains(ids[0]));
}

#[test]
fn test_partial_progress_survives_gesture_end() {
    let (mut engine, ids) = TestEngineBuilder::new().with_image(100.0, 100.0).build();

    let mut sink = RecordingSink::new();
    run_gesture(
        &mut engine,
        &mut sink,
        (120.0, 120.0),
        &[GestureEvent::Drag { dx: 30.0, dy: 40.0 }],
    );

    // End stops further deltas; nothing rolls back.
    let transform = engine.transform_of(ids[0]).unwrap();
    assert_eq!(transform.position.x, 130.0);
    assert_eq!(transform.position.y, 140.0);
}

#[test]
fn test_render_instruction_reflects_full_state() {
    let (mut engine, ids) = TestEngineBuilder::new().with_image(100.0, 100.0).build();
    engine.flip_one(ids[0], &mut NoopSink);

    let mut sink = RecordingSink::new();
    run_gesture(
        &mut engine,
        &mut sink,
        (120.0, 120.0),
        &[GestureEvent::Pinch { ds: 1.0 }],
    );

    let instruction = sink.last_object(ids[0]).unwrap();
    assert_eq!(instruction.scale_x, -2.0);
    assert_eq!(instruction.scale_y, 2.0);
    assert_eq!(instruction.filter, Filter::None);
    assert_eq!(instruction.translate_x, 100.0);
}
