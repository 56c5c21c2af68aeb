use tscroll::mapper::{map_delta, map_wheel};
use tscroll::Mapped;

#[test]
fn test_map_delta_drag_within_range() {
    let m = map_delta(100.0, 40.0, 0.25, 300.0);
    assert_eq!(
        m,
        Mapped {
            content_top_px: 260.0,
            knob_top_px: 65.0
        }
    );
}

#[test]
fn test_map_delta_clamps_to_bottom() {
    let m = map_delta(100.0, 1000.0, 0.25, 300.0);
    assert_eq!(m.content_top_px, 300.0);
    assert_eq!(m.knob_top_px, 75.0);
}

#[test]
fn test_map_delta_clamps_to_top() {
    let m = map_delta(10.0, -40.0, 0.25, 300.0);
    assert_eq!(m.content_top_px, 0.0);
    assert_eq!(m.knob_top_px, 0.0);
}

#[test]
fn test_map_delta_negative_max_pins_to_zero() {
    let m = map_delta(0.0, 50.0, 500.0 / 300.0, -200.0);
    assert_eq!(m.content_top_px, 0.0);
    assert_eq!(m.knob_top_px, 0.0);
}

#[test]
fn test_map_delta_zero_ratio_does_not_move() {
    let m = map_delta(20.0, 5.0, 0.0, 300.0);
    assert_eq!(m.content_top_px, 20.0);
    assert_eq!(m.knob_top_px, 0.0);

    let m = map_delta(20.0, 0.0, 0.0, 300.0);
    assert!(!m.content_top_px.is_nan());
}

#[test]
fn test_map_delta_zero_delta_reconciles_out_of_range_offset() {
    let m = map_delta(500.0, 0.0, 0.25, 300.0);
    assert_eq!(m.content_top_px, 300.0);
}

#[test]
fn test_map_wheel_up_at_top_stays_at_top() {
    let m = map_wheel(0.0, 1.0, 24.0, 0.25, 300.0);
    assert_eq!(m.content_top_px, 0.0);
    assert_eq!(m.knob_top_px, 0.0);
}

#[test]
fn test_map_wheel_down_moves_scroll_ratio_pixels() {
    let m = map_wheel(0.0, -1.0, 24.0, 0.25, 300.0);
    assert_eq!(m.content_top_px, 24.0);
    assert_eq!(m.knob_top_px, 6.0);

    let m = map_wheel(100.0, 2.0, 24.0, 0.25, 300.0);
    assert_eq!(m.content_top_px, 52.0);
}

#[test]
fn test_map_wheel_clamps() {
    assert_eq!(map_wheel(290.0, -1.0, 24.0, 0.25, 300.0).content_top_px, 300.0);
    assert_eq!(map_wheel(0.0, -3.0, 24.0, 2.0, -100.0).content_top_px, 0.0);
}

#[test]
fn test_map_delta_stays_in_range() {
    let ratios = [0.1, 0.25, 0.5, 1.0];
    let maxima = [0.0, 10.0, 300.0, 1234.5];
    let deltas = [-1e6, -100.0, -1.0, 0.0, 0.5, 40.0, 1e6];

    for ratio in ratios {
        for max in maxima {
            for current in [0.0, 5.0, max / 2.0, max] {
                for delta in deltas {
                    let m = map_delta(current, delta, ratio, max);
                    assert!(
                        (0.0..=max).contains(&m.content_top_px),
                        "content {} outside [0, {max}]",
                        m.content_top_px
                    );
                    assert!(
                        (0.0..=ratio * max).contains(&m.knob_top_px),
                        "knob {} outside [0, {}]",
                        m.knob_top_px,
                        ratio * max
                    );

                    let w = map_wheel(current, delta, 24.0, ratio, max);
                    assert!((0.0..=max).contains(&w.content_top_px));
                    assert!((0.0..=ratio * max).contains(&w.knob_top_px));
                }
            }
        }
    }
}
