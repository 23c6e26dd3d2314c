//! Unit tests for gesture routing and hold resolution.

use crate::helpers::{RecordingSink, TestEngineBuilder, place_object, run_gesture};
use pinchboard::{CoordinateConverter, GestureEvent, GesturePhase, point};

#[test]
fn test_start_inside_object_routes_to_object() {
    // Object occupying [50,50]-[150,150].
    let (mut engine, ids) = TestEngineBuilder::new().with_image(100.0, 100.0).build();
    place_object(&mut engine, ids[0], 50.0, 50.0);

    let mut sink = RecordingSink::new();
    engine.dispatch(GestureEvent::Start { x: 100.0, y: 100.0 }, &mut sink);
    assert_eq!(
        engine.phase(),
        GesturePhase::ObjectGesture { object_id: ids[0] }
    );
}

#[test]
fn test_start_outside_objects_routes_to_canvas() {
    let (mut engine, ids) = TestEngineBuilder::new().with_image(100.0, 100.0).build();
    place_object(&mut engine, ids[0], 50.0, 50.0);

    let mut sink = RecordingSink::new();
    engine.dispatch(GestureEvent::Start { x: 10.0, y: 10.0 }, &mut sink);
    assert_eq!(engine.phase(), GesturePhase::CanvasGesture);
}

#[test]
fn test_routing_is_binary_on_the_boundary() {
    let (mut engine, ids) = TestEngineBuilder::new().with_image(100.0, 100.0).build();
    place_object(&mut engine, ids[0], 50.0, 50.0);

    // Edges count as inside.
    assert_eq!(engine.hit_test_topmost(50.0, 50.0), Some(ids[0]));
    assert_eq!(engine.hit_test_topmost(150.0, 150.0), Some(ids[0]));
    assert_eq!(engine.hit_test_topmost(150.1, 150.0), None);
}

#[test]
fn test_overlap_resolves_to_most_recently_added() {
    // Both images spawn at (100,100); the second is on top.
    let (mut engine, ids) = TestEngineBuilder::new()
        .with_image(100.0, 100.0)
        .with_image(100.0, 100.0)
        .build();

    let mut sink = RecordingSink::new();
    engine.dispatch(GestureEvent::Start { x: 120.0, y: 120.0 }, &mut sink);
    assert_eq!(
        engine.phase(),
        GesturePhase::ObjectGesture { object_id: ids[1] }
    );
}

#[test]
fn test_end_returns_to_idle() {
    let (mut engine, _ids) = TestEngineBuilder::new().with_image(100.0, 100.0).build();
    let mut sink = RecordingSink::new();

    engine.dispatch(GestureEvent::Start { x: 120.0, y: 120.0 }, &mut sink);
    engine.dispatch(GestureEvent::End, &mut sink);
    assert!(engine.phase().is_idle());
}

#[test]
fn test_moves_without_start_are_dropped() {
    let (mut engine, ids) = TestEngineBuilder::new().with_image(100.0, 100.0).build();
    let before = engine.transform_of(ids[0]).unwrap();

    let mut sink = RecordingSink::new();
    engine.dispatch(GestureEvent::Drag { dx: 10.0, dy: 10.0 }, &mut sink);
    engine.dispatch(GestureEvent::Pinch { ds: 0.5 }, &mut sink);

    assert_eq!(engine.transform_of(ids[0]).unwrap(), before);
    assert_eq!(engine.canvas_transform().scale, 1.0);
    assert!(sink.events.is_empty());
}

#[test]
fn test_hit_test_follows_scaled_bounds() {
    let (mut engine, ids) = TestEngineBuilder::new().with_image(100.0, 100.0).build();
    place_object(&mut engine, ids[0], 0.0, 0.0);

    // Point outside the unscaled box.
    assert_eq!(engine.hit_test_topmost(150.0, 150.0), None);

    // Pinch up to scale 2; box grows to [0,0]-[200,200].
    let mut sink = RecordingSink::new();
    run_gesture(
        &mut engine,
        &mut sink,
        (50.0, 50.0),
        &[GestureEvent::Pinch { ds: 1.0 }],
    );
    assert_eq!(engine.hit_test_topmost(150.0, 150.0), Some(ids[0]));
}

#[test]
fn test_screen_coordinates_route_after_pan_and_zoom() {
    // A host converts pointer positions through CoordinateConverter before
    // dispatching; routing must still find the object once the canvas has
    // been panned and zoomed away from identity.
    let (mut engine, ids) = TestEngineBuilder::new().with_image(100.0, 100.0).build();
    place_object(&mut engine, ids[0], 50.0, 50.0);

    let mut sink = RecordingSink::new();
    run_gesture(
        &mut engine,
        &mut sink,
        (10.0, 10.0),
        &[
            GestureEvent::Drag { dx: 200.0, dy: 80.0 },
            GestureEvent::Pinch { ds: 1.0 },
        ],
    );
    let canvas = engine.canvas_transform();

    // Object center (100,100) as the host's pointer sees it on screen.
    let screen = CoordinateConverter::canvas_to_screen(point(100.0, 100.0), &canvas);
    let on_canvas = CoordinateConverter::screen_to_canvas(screen, &canvas);

    engine.dispatch(
        GestureEvent::Start {
            x: on_canvas.x,
            y: on_canvas.y,
        },
        &mut sink,
    );
    assert_eq!(
        engine.phase(),
        GesturePhase::ObjectGesture { object_id: ids[0] }
    );
    engine.dispatch(GestureEvent::End, &mut sink);

    // Screen drag deltas shrink by the zoom factor on their way in.
    let (dx, dy) = CoordinateConverter::delta_screen_to_canvas(30.0, -10.0, canvas.scale);
    assert_eq!((dx, dy), (15.0, -5.0));
}

#[test]
fn test_hold_surfaces_identity_and_transform() {
    let (mut engine, ids) = TestEngineBuilder::new().with_image(100.0, 100.0).build();
    place_object(&mut engine, ids[0], 50.0, 50.0);

    let (id, transform) = engine.handle_hold(100.0, 100.0).expect("object under hold");
    assert_eq!(id, ids[0]);
    assert_eq!(transform, engine.transform_of(ids[0]).unwrap());

    // Hold does not start or mutate a gesture.
    assert!(engine.phase().is_idle());
}

#[test]
fn test_hold_over_empty_canvas_returns_none() {
    let (engine, _ids) = TestEngineBuilder::new().with_image(100.0, 100.0).build();
    assert!(engine.handle_hold(5.0, 5.0).is_none());
}
