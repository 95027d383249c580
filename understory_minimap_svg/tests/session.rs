// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives a `Minimap` over an `SvgSink` the way a host would: populate,
//! show the affordance, then click, drag and zoom while transitions run.

use std::time::Duration;

use kurbo::{BezPath, Point, Rect, Shape};
use understory_minimap::engine::primary_transform;
use understory_minimap::gesture::{ClickToCenter, WheelZoom};
use understory_minimap::{Minimap, MinimapConfig, Surface};
use understory_minimap_svg::SvgSink;

fn minimap() -> Minimap<SvgSink> {
    let config = MinimapConfig::new(500.0, 300.0, 5.0).with_padding(20.0);
    Minimap::new(config, SvgSink::new(config)).unwrap()
}

/// Stand-in projector: one outline per feature, fitted to the extent.
fn outlines(features: &[&str], extent: Rect) -> Vec<BezPath> {
    features.iter().map(|_| extent.to_path(0.1)).collect()
}

#[test]
fn populate_then_jaunty_renders_both_views() {
    let mut map = minimap();
    map.populate(&["north", "south"][..], &outlines).jaunty();

    let sink = map.sink();
    assert_eq!(sink.features(Surface::Primary).len(), 2);
    assert_eq!(sink.features(Surface::Overview).len(), 2);

    let primary = sink.primary_svg();
    assert_eq!(primary.matches("class=\"region\"").count(), 2);
    assert!(primary.contains("d=\"M20 20L480 20L480 280L20 280Z\""));
    assert!(primary.contains("transform=\"translate(-250 -150)scale(2)\""));

    let overview = sink.overview_svg();
    assert!(overview.contains("d=\"M4 4L96 4L96 56L4 56Z\""));
    assert!(overview.contains("class=\"viewport\" x=\"25\" y=\"15\" width=\"50\" height=\"30\""));
}

#[test]
fn click_animates_and_drag_retargets_mid_flight() {
    let mut map = minimap();
    map.jaunty();

    map.handle(&ClickToCenter {
        point: Point::new(75.0, 45.0),
    });
    let sink = map.sink_mut();
    assert!(sink.is_animating());
    assert_eq!(sink.indicator().x0, 25.0);
    sink.advance(Duration::from_millis(150));
    assert_eq!(sink.indicator().x0, 37.5);

    // A drag arrives before the click transition ends. It applies at once and
    // the running transition is dropped in favour of the new target.
    map.drag_start(Surface::Overview, Point::new(60.0, 40.0));
    map.drag_move(Point::new(59.0, 40.0));
    let sink = map.sink();
    assert!(!sink.is_animating());
    assert_eq!(sink.indicator().x0, 49.0);
    assert!(sink.is_selected());

    map.drag_end();
    assert!(!map.sink().is_selected());
}

#[test]
fn back_to_back_clicks_start_from_the_shown_position() {
    let mut map = minimap();
    map.jaunty();

    map.handle(&ClickToCenter {
        point: Point::new(75.0, 45.0),
    });
    map.sink_mut().advance(Duration::from_millis(150));
    map.handle(&ClickToCenter {
        point: Point::new(25.0, 15.0),
    });

    let transition = map.sink().indicator_transition().copied().unwrap();
    assert_eq!(transition.from.x0, 37.5);
    assert_eq!(transition.to.x0, 0.0);

    map.sink_mut().advance(Duration::from_millis(300));
    assert_eq!(map.sink().indicator(), Rect::new(0.0, 0.0, 50.0, 30.0));
    assert_eq!(
        map.sink().primary_transform(),
        primary_transform(map.state().config(), Point::ZERO, 0.5)
    );
}

#[test]
fn wheel_on_primary_updates_overview_indicator() {
    let mut map = minimap();
    map.jaunty();

    // Cursor at the primary centre maps to the window centre (50, 30).
    map.handle(&WheelZoom {
        delta_y: -1.0,
        cursor: Point::new(250.0, 150.0),
        surface: Surface::Primary,
    });
    let r = map.sink().indicator();
    assert!((r.width() - 40.0).abs() < 1e-9, "0.4 of 100, got {}", r.width());
    assert!((r.center().x - 50.0).abs() < 1e-9, "centre x {}", r.center().x);
    assert!((r.center().y - 30.0).abs() < 1e-9, "centre y {}", r.center().y);
}
