use photo_timeline::core::{Catalog, Geometry, TimelineEntry, Viewport};
use photo_timeline::interaction::{NavigationCommand, NavigationController, NavigationTuning};
use proptest::prelude::*;

fn controller() -> NavigationController {
    NavigationController::new(NavigationTuning::default()).expect("default tuning")
}

fn command(code: u8) -> NavigationCommand {
    match code % 4 {
        0 => NavigationCommand::ZoomIn,
        1 => NavigationCommand::ZoomOut,
        2 => NavigationCommand::PanEarlier,
        _ => NavigationCommand::PanLater,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn catalog_is_sorted_and_stable(timestamps in prop::collection::vec(0i64..50, 0..40)) {
        let entries: Vec<TimelineEntry> = timestamps
            .iter()
            .enumerate()
            .map(|(index, timestamp)| TimelineEntry::new(format!("{index:03}"), *timestamp))
            .collect();

        let catalog = Catalog::from_entries(entries);

        prop_assert_eq!(catalog.len(), timestamps.len());
        for pair in catalog.entries().windows(2) {
            prop_assert!(pair[0].timestamp <= pair[1].timestamp);
            if pair[0].timestamp == pair[1].timestamp {
                prop_assert!(pair[0].name < pair[1].name);
            }
        }
    }

    #[test]
    fn mapping_is_monotonic(
        time_min in -1.0e9f64..1.0e9,
        span in 1.0e-3f64..1.0e9,
        height in 50u32..4000,
        margin in 0.0f64..20.0,
        a in -2.0e9f64..2.0e9,
        b in -2.0e9f64..2.0e9,
    ) {
        let viewport = Viewport::new(time_min, time_min + span).expect("valid viewport");
        let geometry = Geometry::new(800, height, margin);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        let low_px = viewport.map_to_pixel(low, geometry);
        let high_px = viewport.map_to_pixel(high, geometry);
        prop_assert!(low_px.is_finite() && high_px.is_finite());
        prop_assert!(low_px <= high_px);
        prop_assert_eq!(viewport.map_to_pixel(viewport.time_min(), geometry), margin);
    }

    #[test]
    fn degenerate_window_is_always_finite(
        time in -1.0e12f64..1.0e12,
        probe in prop::num::f64::ANY,
        height in 1u32..4000,
    ) {
        let viewport = Viewport::new(time, time).expect("valid viewport");
        let geometry = Geometry::new(640, height, 10.0);

        let pixel = viewport.map_to_pixel(probe, geometry);
        prop_assert!(pixel.is_finite());
        prop_assert_eq!(pixel, f64::from(height) / 2.0);
    }

    #[test]
    fn pans_preserve_span(
        time_min in -1.0e9f64..1.0e9,
        span in 1.0f64..1.0e7,
        steps in prop::collection::vec(prop::bool::ANY, 1..30),
    ) {
        let controller = controller();
        let start = Viewport::new(time_min, time_min + span).expect("valid viewport");
        let mut viewport = start;
        for later in steps {
            let command = if later { NavigationCommand::PanLater } else { NavigationCommand::PanEarlier };
            viewport = controller.apply(viewport, command).expect("pan");
        }

        let tolerance = 1e-6 * (time_min.abs() + span);
        prop_assert!((viewport.span() - start.span()).abs() <= tolerance);
    }

    #[test]
    fn zoom_in_then_out_keeps_center_and_scales_span(
        time_min in -1.0e9f64..1.0e9,
        span in 1.0f64..1.0e7,
    ) {
        let controller = controller();
        let start = Viewport::new(time_min, time_min + span).expect("valid viewport");
        let zoomed = controller.apply(start, NavigationCommand::ZoomIn).expect("zoom in");
        let restored = controller.apply(zoomed, NavigationCommand::ZoomOut).expect("zoom out");

        let tolerance = 1e-6 * (time_min.abs() + span);
        prop_assert!((restored.span() - start.span() * 0.99).abs() <= tolerance);
        prop_assert!((restored.center() - start.center()).abs() <= tolerance);
    }

    #[test]
    fn any_command_sequence_keeps_ordered_bounds(codes in prop::collection::vec(0u8..4, 0..60)) {
        let controller = controller();
        let mut viewport = Viewport::new(1_600_000_000.0, 1_600_086_400.0).expect("valid viewport");
        for code in codes {
            viewport = controller.apply(viewport, command(code)).expect("step");
            prop_assert!(viewport.time_min() <= viewport.time_max());
        }
    }
}
