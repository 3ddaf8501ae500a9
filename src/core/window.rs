pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Pads the raw trajectory maxima and widens the shorter side until the
/// chart window holds the fixed distance-to-height ratio, so arcs keep
/// their proportions across scenarios.
pub fn chart_axis_spans(raw_max_x: f64, raw_max_y: f64) -> (f64, f64) {
    let x_pad = raw_max_x.max(1.0) * X_PADDING_RATIO;
    let y_pad = raw_max_y.max(1.0) * Y_PADDING_RATIO;

    let mut x_span = (raw_max_x + x_pad).max(1.0);
    let mut y_span = (raw_max_y + y_pad).max(1.0);

    if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
        x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
    } else {
        y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
    }

    (x_span, y_span)
}
