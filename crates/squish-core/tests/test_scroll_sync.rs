mod common;

use approx::assert_relative_eq;
use squish_core::view::{Axis, DualViewport, Pane, SyncMode, Vec2};

use common::loaded_dual;

fn mismatched_dual() -> DualViewport {
    // Original 1000x800, compressed 600x400, both seen through 200x200.
    loaded_dual(
        Vec2::new(1000.0, 800.0),
        Vec2::new(600.0, 400.0),
        Vec2::new(200.0, 200.0),
    )
}

// ---------------------------------------------------------------------------
// Raw-unit synchronization
// ---------------------------------------------------------------------------

#[test]
fn test_compressed_bar_drives_original_in_raw_units() {
    let mut dual = mismatched_dual();
    assert_eq!(dual.compressed().bar(Axis::Horizontal).max(), 400.0);
    assert_eq!(dual.original().bar(Axis::Horizontal).max(), 800.0);

    assert!(dual.scroll(Pane::Compressed, Axis::Horizontal, 250.0));
    assert_eq!(dual.original().bar(Axis::Horizontal).value(), 250.0);
    // Not 500, which a proportional mapping would give.
    assert_ne!(dual.original().bar(Axis::Horizontal).value(), 500.0);
}

#[test]
fn test_vertical_bar_syncs_too() {
    let mut dual = mismatched_dual();
    dual.scroll(Pane::Compressed, Axis::Vertical, 120.0);
    assert_eq!(dual.original().bar(Axis::Vertical).value(), 120.0);
    assert_eq!(dual.original().bar(Axis::Horizontal).value(), 0.0);
}

#[test]
fn test_target_clamps_to_its_own_range() {
    let mut dual = loaded_dual(
        Vec2::new(300.0, 300.0),
        Vec2::new(1000.0, 1000.0),
        Vec2::new(200.0, 200.0),
    );
    dual.scroll(Pane::Compressed, Axis::Horizontal, 500.0);
    assert_eq!(dual.compressed().bar(Axis::Horizontal).value(), 500.0);
    assert_eq!(dual.original().bar(Axis::Horizontal).value(), 100.0);
}

#[test]
fn test_one_way_sync_ignores_original_scrolls() {
    let mut dual = mismatched_dual();
    dual.scroll(Pane::Original, Axis::Horizontal, 300.0);
    assert_eq!(dual.original().bar(Axis::Horizontal).value(), 300.0);
    assert_eq!(dual.compressed().bar(Axis::Horizontal).value(), 0.0);
}

#[test]
fn test_bidirectional_sync() {
    let mut dual = mismatched_dual();
    dual.set_sync_mode(SyncMode::Bidirectional);
    dual.scroll(Pane::Original, Axis::Vertical, 150.0);
    assert_eq!(dual.compressed().bar(Axis::Vertical).value(), 150.0);
    dual.scroll(Pane::Compressed, Axis::Vertical, 40.0);
    assert_eq!(dual.original().bar(Axis::Vertical).value(), 40.0);
}

#[test]
fn test_independent_panes() {
    let mut dual = mismatched_dual();
    dual.set_sync_mode(SyncMode::Independent);
    dual.scroll(Pane::Compressed, Axis::Horizontal, 100.0);
    assert_eq!(dual.original().bar(Axis::Horizontal).value(), 0.0);
}

#[test]
fn test_unchanged_scroll_does_not_propagate() {
    let mut dual = mismatched_dual();
    dual.scroll(Pane::Compressed, Axis::Horizontal, 50.0);
    // Move the original on its own, then repeat the same compressed value.
    dual.scroll(Pane::Original, Axis::Horizontal, 10.0);
    assert!(!dual.scroll(Pane::Compressed, Axis::Horizontal, 50.0));
    assert_eq!(dual.original().bar(Axis::Horizontal).value(), 10.0);
}

// ---------------------------------------------------------------------------
// Normalized positioning
// ---------------------------------------------------------------------------

#[test]
fn test_normalized_endpoints() {
    let mut dual = mismatched_dual();
    for axis in Axis::BOTH {
        dual.set_scroll_normalized(axis, 0.0);
        assert_eq!(dual.get_scroll_normalized(axis), 0.0);
        dual.set_scroll_normalized(axis, 1.0);
        assert_eq!(dual.get_scroll_normalized(axis), 1.0);
    }
}

#[test]
fn test_normalized_value_and_propagation() {
    let mut dual = mismatched_dual();
    dual.set_scroll_normalized(Axis::Horizontal, 0.5);
    assert_relative_eq!(dual.compressed().bar(Axis::Horizontal).value(), 200.0);
    assert_relative_eq!(dual.original().bar(Axis::Horizontal).value(), 200.0);

    dual.set_scroll_normalized(Axis::Vertical, 0.2);
    assert_relative_eq!(dual.compressed().bar(Axis::Vertical).value(), 40.0);
    assert_relative_eq!(dual.get_scroll_normalized(Axis::Vertical), 0.2);
}

#[test]
fn test_normalized_fraction_is_clamped() {
    let mut dual = mismatched_dual();
    dual.set_scroll_normalized(Axis::Horizontal, 3.0);
    assert_eq!(dual.get_scroll_normalized(Axis::Horizontal), 1.0);
    dual.set_scroll_normalized(Axis::Horizontal, -1.0);
    assert_eq!(dual.get_scroll_normalized(Axis::Horizontal), 0.0);
}

#[test]
fn test_normalized_without_scroll_range() {
    let mut dual = loaded_dual(
        Vec2::new(100.0, 100.0),
        Vec2::new(100.0, 100.0),
        Vec2::new(200.0, 200.0),
    );
    assert!(!dual.set_scroll_normalized(Axis::Vertical, 0.7));
    assert_eq!(dual.get_scroll_normalized(Axis::Vertical), 0.0);
}

// ---------------------------------------------------------------------------
// Relayout clamps
// ---------------------------------------------------------------------------

fn square_dual() -> DualViewport {
    let mut dual = loaded_dual(
        Vec2::new(400.0, 400.0),
        Vec2::new(400.0, 400.0),
        Vec2::new(100.0, 100.0),
    );
    dual.set_scroll_offset(Pane::Compressed, Vec2::new(300.0, 300.0));
    dual
}

#[test]
fn test_resize_clamp_carries_to_original() {
    let mut dual = square_dual();
    dual.set_viewport_size(Pane::Compressed, Vec2::new(200.0, 200.0));
    assert_eq!(dual.scroll_offset(Pane::Compressed), Vec2::new(200.0, 200.0));
    assert_eq!(dual.scroll_offset(Pane::Original), Vec2::new(200.0, 200.0));
}

#[test]
fn test_smaller_preview_clamp_carries_to_original() {
    let mut dual = square_dual();
    dual.set_compressed_content(Vec2::new(250.0, 250.0));
    assert_eq!(dual.scroll_offset(Pane::Compressed), Vec2::new(150.0, 150.0));
    assert_eq!(dual.scroll_offset(Pane::Original), Vec2::new(150.0, 150.0));
}

#[test]
fn test_resize_clamp_stays_local_when_independent() {
    let mut dual = square_dual();
    dual.set_sync_mode(SyncMode::Independent);
    dual.set_viewport_size(Pane::Compressed, Vec2::new(200.0, 200.0));
    assert_eq!(dual.scroll_offset(Pane::Compressed), Vec2::new(200.0, 200.0));
    assert_eq!(dual.scroll_offset(Pane::Original), Vec2::new(300.0, 300.0));
}

// ---------------------------------------------------------------------------
// Input before the first preview
// ---------------------------------------------------------------------------

fn original_only() -> DualViewport {
    let mut dual = DualViewport::default();
    dual.set_viewport_size(Pane::Original, Vec2::new(100.0, 100.0));
    dual.set_viewport_size(Pane::Compressed, Vec2::new(100.0, 100.0));
    dual.load_original(Vec2::new(400.0, 400.0));
    dual
}

#[test]
fn test_original_takes_input_until_preview_exists() {
    let mut dual = original_only();
    assert_eq!(dual.driver(Pane::Original), Pane::Original);

    let driver = dual.driver(Pane::Original);
    assert!(dual.set_scroll_offset(driver, Vec2::new(30.0, 30.0)));
    assert_eq!(dual.scroll_offset(Pane::Original), Vec2::new(30.0, 30.0));
    assert_eq!(dual.original().bar(Axis::Vertical).max(), 300.0);
}

#[test]
fn test_wheel_on_original_scrolls_without_preview() {
    use squish_core::view::WheelAction;

    let mut dual = original_only();
    let moved = dual.apply_wheel(
        Pane::Original,
        WheelAction::Scroll {
            axis: Axis::Vertical,
            amount: 50.0,
        },
    );
    assert!(moved);
    assert_eq!(dual.original().bar(Axis::Vertical).value(), 50.0);
}

#[test]
fn test_first_preview_adopts_original_offsets() {
    let mut dual = original_only();
    dual.set_scroll_offset(Pane::Original, Vec2::new(40.0, 60.0));

    dual.set_compressed_content(Vec2::new(400.0, 400.0));
    assert_eq!(dual.driver(Pane::Original), Pane::Compressed);
    assert_eq!(dual.scroll_offset(Pane::Compressed), Vec2::new(40.0, 60.0));
    assert_eq!(dual.scroll_offset(Pane::Original), Vec2::new(40.0, 60.0));
}
