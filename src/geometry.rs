use eframe::egui::{pos2, vec2, Pos2, Vec2};

/// Named screen-relative placement rule for the window's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Center,
    TopLeft,
    BottomLeft,
    TopRight,
    BottomRight,
}

impl Anchor {
    /// Unrecognized values silently place the window in the center.
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "top_left" => Anchor::TopLeft,
            "bottom_left" => Anchor::BottomLeft,
            "top_right" => Anchor::TopRight,
            "bottom_right" => Anchor::BottomRight,
            _ => Anchor::Center,
        }
    }
}

/// Window size from the measured text extent and the configured scale
/// factors. The scale math runs in f64 so that e.g. `200 * 1.2` lands on
/// exactly 240 before the ceil.
pub fn window_size(measured: Vec2, width_scale: f64, height_scale: f64) -> Vec2 {
    vec2(
        (f64::from(measured.x) * width_scale).ceil() as f32,
        (f64::from(measured.y) * height_scale).ceil() as f32,
    )
}

/// Top-left position of the window on the primary screen.
pub fn window_position(anchor: Anchor, screen: Vec2, window: Vec2) -> Pos2 {
    match anchor {
        Anchor::Center => pos2((screen.x - window.x) / 2.0, (screen.y - window.y) / 2.0),
        Anchor::TopLeft => pos2(0.0, 0.0),
        Anchor::BottomLeft => pos2(0.0, screen.y - window.y),
        Anchor::TopRight => pos2(screen.x - window.x, 0.0),
        Anchor::BottomRight => pos2(screen.x - window.x, screen.y - window.y),
    }
}

/// Fill width of the minute-progress bar: sweeps from empty to the full
/// window width over one minute, resetting at the minute boundary.
pub fn seconds_bar_width(second_of_minute: u32, window_width: f32) -> f32 {
    (second_of_minute as f32 / 60.0) * window_width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_keys_map_to_variants() {
        assert_eq!(Anchor::from_key("center"), Anchor::Center);
        assert_eq!(Anchor::from_key("top_left"), Anchor::TopLeft);
        assert_eq!(Anchor::from_key("bottom_left"), Anchor::BottomLeft);
        assert_eq!(Anchor::from_key("top_right"), Anchor::TopRight);
        assert_eq!(Anchor::from_key("bottom_right"), Anchor::BottomRight);
        assert_eq!(Anchor::from_key(" bottom_right "), Anchor::BottomRight);
    }

    #[test]
    fn unknown_anchor_behaves_as_center() {
        let screen = vec2(1920.0, 1080.0);
        let window = vec2(240.0, 63.0);
        let center = window_position(Anchor::Center, screen, window);
        for key in ["", "middle", "TOP_LEFT", "bottom", "42"] {
            assert_eq!(window_position(Anchor::from_key(key), screen, window), center);
        }
    }

    #[test]
    fn placement_formulas() {
        let screen = vec2(1920.0, 1080.0);
        let window = vec2(240.0, 63.0);
        assert_eq!(
            window_position(Anchor::Center, screen, window),
            pos2(840.0, 508.5)
        );
        assert_eq!(
            window_position(Anchor::TopLeft, screen, window),
            pos2(0.0, 0.0)
        );
        assert_eq!(
            window_position(Anchor::BottomLeft, screen, window),
            pos2(0.0, 1017.0)
        );
        assert_eq!(
            window_position(Anchor::TopRight, screen, window),
            pos2(1680.0, 0.0)
        );
        assert_eq!(
            window_position(Anchor::BottomRight, screen, window),
            pos2(1680.0, 1017.0)
        );
    }

    #[test]
    fn placement_holds_for_arbitrary_dimensions() {
        let screen = vec2(2560.0, 1440.0);
        let window = vec2(301.0, 77.0);
        assert_eq!(
            window_position(Anchor::BottomRight, screen, window),
            pos2(2259.0, 1363.0)
        );
        assert_eq!(
            window_position(Anchor::TopRight, screen, window),
            pos2(2259.0, 0.0)
        );
        assert_eq!(
            window_position(Anchor::BottomLeft, screen, window),
            pos2(0.0, 1363.0)
        );
    }

    #[test]
    fn default_scales_round_up_to_expected_size() {
        // 200x60 natural size with the default 1.2/1.05 scales.
        assert_eq!(window_size(vec2(200.0, 60.0), 1.2, 1.05), vec2(240.0, 63.0));
    }

    #[test]
    fn window_size_ceils_fractional_results() {
        assert_eq!(
            window_size(vec2(101.0, 33.0), 1.1, 1.1),
            vec2(112.0, 37.0)
        );
    }

    #[test]
    fn window_size_grows_with_scale() {
        let measured = vec2(200.0, 60.0);
        let mut last = window_size(measured, 1.0, 1.0);
        for step in 1..=20 {
            let scale = 1.0 + step as f64 * 0.05;
            let next = window_size(measured, scale, scale);
            assert!(next.x >= last.x);
            assert!(next.y >= last.y);
            last = next;
        }
    }

    #[test]
    fn bar_width_is_a_nondecreasing_step_function() {
        let width = 240.0;
        let mut last = -1.0;
        for second in 0..60 {
            let bar = seconds_bar_width(second, width);
            assert!((bar - (second as f32 / 60.0) * width).abs() < f32::EPSILON);
            assert!(bar >= last);
            last = bar;
        }
        assert_eq!(seconds_bar_width(0, width), 0.0);
        assert_eq!(seconds_bar_width(30, width), 120.0);
        // Next minute starts over from empty.
        assert!(seconds_bar_width(59, width) < width);
    }
}
