// File: crates/chart-engine/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets decimation, generic over the
// value accessor so it can run directly on derived point records.

/// LTTB downsampling over an ordered slice. X coordinates are slice
/// positions; `value` extracts the Y metric. Returns the input unchanged
/// when `points.len() <= threshold` or `threshold <= 2`; otherwise the first
/// and last points are always kept and the output has exactly `threshold`
/// elements.
pub fn lttb_by<T, F>(points: &[T], threshold: usize, value: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    let n = points.len();
    if n <= threshold || threshold <= 2 {
        return points.to_vec();
    }

    let bucket_size = (n - 2) as f64 / (threshold - 2) as f64;
    let mut sampled = Vec::with_capacity(threshold);
    sampled.push(points[0].clone());

    // Slice position of the point selected from the previous bucket.
    let mut a = 0usize;

    for i in 0..(threshold - 2) {
        let start = ((i as f64 * bucket_size).floor() as usize + 1).min(n - 2);
        let end = (((i + 1) as f64 * bucket_size).floor() as usize + 1).min(n - 1);

        // Average of the *next* bucket, the forward reference of the triangle.
        let next_start = end;
        let next_end = (((i + 2) as f64 * bucket_size).floor() as usize + 1).min(n);
        let (mut avg_x, mut avg_y) = (0.0f64, 0.0f64);
        let count = next_end.saturating_sub(next_start).max(1);
        for k in next_start..next_end {
            avg_x += k as f64;
            avg_y += value(&points[k]);
        }
        if next_start >= next_end {
            avg_x = (n - 1) as f64;
            avg_y = value(&points[n - 1]);
        } else {
            avg_x /= count as f64;
            avg_y /= count as f64;
        }

        let a_x = a as f64;
        let a_y = value(&points[a]);
        let mut max_area = -1.0f64;
        let mut max_idx = start;
        for k in start..end.max(start + 1) {
            let b_y = value(&points[k]);
            let area =
                0.5 * ((a_x - avg_x) * (b_y - a_y) - (a_x - k as f64) * (avg_y - a_y)).abs();
            if area > max_area {
                max_area = area;
                max_idx = k;
            }
        }

        sampled.push(points[max_idx].clone());
        a = max_idx;
    }

    sampled.push(points[n - 1].clone());
    sampled
}
