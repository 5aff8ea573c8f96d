//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - observed points: `o`
//! - fitted curve: `-` line

use crate::domain::{FitFile, PointResidual, PolyModel};
use crate::math::eval_poly;

/// Render a plot for an in-memory fit result.
pub fn render_ascii_plot(
    residuals: &[PointResidual],
    model: &PolyModel,
    width: usize,
    height: usize,
) -> String {
    let (x_min, x_max) = x_range_from_residuals(residuals).unwrap_or((0.0, 1.0));
    let curve = sample_curve(model, x_min, x_max, width.max(2));
    render_plot(residuals, Some(&curve), x_min, x_max, width, height)
}

/// Render a plot from a saved fit JSON file (curve only, no overlay points).
pub fn render_ascii_plot_from_fit_file_only(fit: &FitFile, width: usize, height: usize) -> String {
    let (x_min, x_max) = grid_x_range(fit).unwrap_or((0.0, 1.0));
    let curve: Vec<(f64, f64)> = fit
        .grid
        .x
        .iter()
        .zip(fit.grid.y.iter())
        .map(|(&x, &y)| (x, y))
        .collect();

    render_plot(&[], Some(&curve), x_min, x_max, width, height)
}

fn render_plot(
    residuals: &[PointResidual],
    curve_points: Option<&[(f64, f64)]>,
    x_min: f64,
    x_max: f64,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    // Determine y-range from observed points and curve points.
    let (y_min, y_max) = y_range(residuals, curve_points).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw curve first (so points can overlay).
    if let Some(curve) = curve_points {
        draw_curve(&mut grid, curve, x_min, x_max, y_min, y_max);
    }

    for r in residuals {
        let x = map_x(r.x, x_min, x_max, width);
        let y = map_y(r.y_obs, y_min, y_max, height);
        grid[y][x] = 'o';
    }

    // Build final string. We include a small header with ranges.
    let mut out = String::new();
    out.push_str(&format!(
        "Plot: x=[{x_min:.3}, {x_max:.3}] | y=[{y_min:.2}, {y_max:.2}]\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn x_range_from_residuals(residuals: &[PointResidual]) -> Option<(f64, f64)> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for r in residuals {
        min_x = min_x.min(r.x);
        max_x = max_x.max(r.x);
    }
    if min_x.is_finite() && max_x.is_finite() && max_x > min_x {
        Some((min_x, max_x))
    } else {
        None
    }
}

fn grid_x_range(fit: &FitFile) -> Option<(f64, f64)> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for &x in &fit.grid.x {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
    }
    if min_x.is_finite() && max_x.is_finite() && max_x > min_x {
        Some((min_x, max_x))
    } else {
        None
    }
}

fn sample_curve(model: &PolyModel, x_min: f64, x_max: f64, n: usize) -> Vec<(f64, f64)> {
    let mut out = Vec::with_capacity(n);
    let n = n.max(2);
    for i in 0..n {
        let u = i as f64 / (n as f64 - 1.0);
        let x = x_min + u * (x_max - x_min);
        out.push((x, eval_poly(&model.coefficients, x)));
    }
    out
}

fn y_range(residuals: &[PointResidual], curve: Option<&[(f64, f64)]>) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for r in residuals {
        min_y = min_y.min(r.y_obs);
        max_y = max_y.max(r.y_obs);
    }
    if let Some(curve) = curve {
        for &(_, y) in curve {
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }

    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(
    grid: &mut [Vec<char>],
    curve: &[(f64, f64)],
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        let cx = map_x(x, x_min, x_max, width);
        let cy = map_y(y, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, cx, cy, '-');
        } else {
            grid[cy][cx] = '-';
        }
        prev = Some((cx, cy));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FitGrid, FitQuality};

    #[test]
    fn plot_golden_snapshot_small() {
        let points = vec![
            PointResidual {
                x: 1.0,
                y_obs: 100.0,
                y_fit: 100.0,
                residual: 0.0,
            },
            PointResidual {
                x: 10.0,
                y_obs: 110.0,
                y_fit: 100.0,
                residual: 10.0,
            },
        ];

        // Constant model: the curve is a flat line at y = 100.
        let model = PolyModel {
            degree: 0,
            coefficients: vec![100.0],
        };

        let txt = render_ascii_plot(&points, &model, 10, 5);
        let expected = concat!(
            "Plot: x=[1.000, 10.000] | y=[99.50, 110.50]\n",
            "         o\n",
            "          \n",
            "          \n",
            "          \n",
            "o---------\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn fit_file_plot_has_expected_shape() {
        let fit = FitFile {
            tool: "preg".to_string(),
            model: PolyModel {
                degree: 1,
                coefficients: vec![0.0, 1.0],
            },
            quality: FitQuality {
                ratio: 0.0,
                aicc: 0.0,
                bic: 0.0,
                sse: 0.0,
                sst: 1.0,
                ssr: 0.0,
                n: 2,
            },
            grid: FitGrid {
                x: vec![0.0, 1.0],
                y: vec![0.0, 1.0],
            },
        };

        let txt = render_ascii_plot_from_fit_file_only(&fit, 10, 5);
        let lines: Vec<&str> = txt.lines().collect();

        assert_eq!(lines.len(), 6, "header plus five grid rows:\n{txt}");
        assert!(lines[0].starts_with("Plot: x=[0.000, 1.000]"));
        for row in &lines[1..] {
            assert_eq!(row.chars().count(), 10);
        }
        assert!(txt.contains('-'), "curve missing from plot:\n{txt}");
    }
}
