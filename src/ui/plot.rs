use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points, Polygon};

use crate::color::PlatformColors;
use crate::data::compare::attributed_groups;
use crate::data::model::{Platform, ShowDataset, TARGET_AGE_ORDER};
use crate::data::stats::{self, HISTOGRAM_BINS};

const PLOT_HEIGHT: f32 = 420.0;
const DENSITY_POINTS: usize = 200;
/// Half the width of a full violin, in category units.
const VIOLIN_HALF_WIDTH: f64 = 0.4;

fn ratings(dataset: &ShowDataset, view: &[usize]) -> Vec<f64> {
    view.iter().filter_map(|&i| dataset.shows[i].rating).collect()
}

// ---------------------------------------------------------------------------
// Rating evolution (description page)
// ---------------------------------------------------------------------------

/// Scatter of rating against release year for every rated show.
pub fn rating_evolution(ui: &mut Ui, dataset: &ShowDataset, grid: bool) {
    let points: PlotPoints = dataset
        .shows
        .iter()
        .filter_map(|s| s.rating.map(|r| [s.year as f64, r]))
        .collect();

    Plot::new("rating_evolution")
        .height(PLOT_HEIGHT)
        .show_grid(grid)
        .x_axis_label("Released Year")
        .y_axis_label("Rating")
        .allow_drag(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(points)
                    .radius(2.5)
                    .color(Color32::LIGHT_BLUE.gamma_multiply(0.5))
                    .name("Rated shows"),
            );
        });
}

// ---------------------------------------------------------------------------
// Violin plot: rating distribution per target age
// ---------------------------------------------------------------------------

/// Rating distribution per target-age category. With two platforms each
/// category shows split halves, first platform on the left.
pub fn violin_plot(
    ui: &mut Ui,
    dataset: &ShowDataset,
    platforms: &[Platform],
    colors: &PlatformColors,
    grid: bool,
) {
    let groups = attributed_groups(dataset, platforms);
    let split = groups.len() == 2;

    Plot::new("violin_plot")
        .height(PLOT_HEIGHT)
        .show_grid(grid)
        .legend(Legend::default())
        .x_axis_label("Target Age")
        .y_axis_label("Rating")
        .x_axis_formatter(|mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            TARGET_AGE_ORDER
                .get(idx as usize)
                .map(|s| s.to_string())
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for (side, (platform, view)) in groups.iter().enumerate() {
                let color = colors.color_for(*platform);
                for (cat, label) in TARGET_AGE_ORDER.iter().enumerate() {
                    let values: Vec<f64> = view
                        .iter()
                        .map(|&i| &dataset.shows[i])
                        .filter(|s| s.target_age_display == *label)
                        .filter_map(|s| s.rating)
                        .collect();
                    if values.is_empty() {
                        continue;
                    }

                    let sides = match (split, side) {
                        (false, _) => (true, true),
                        (true, 0) => (true, false),
                        (true, _) => (false, true),
                    };
                    match violin_outline(&values, cat as f64, sides) {
                        Some(outline) => plot_ui.polygon(
                            Polygon::new(PlotPoints::new(outline))
                                .name(platform.name())
                                .fill_color(colors.fill_for(*platform))
                                .stroke(Stroke::new(1.0, color)),
                        ),
                        None => plot_ui.points(
                            Points::new(
                                values
                                    .iter()
                                    .map(|&r| [cat as f64, r])
                                    .collect::<PlotPoints>(),
                            )
                            .radius(3.0)
                            .color(color)
                            .name(platform.name()),
                        ),
                    }

                    if let Some(m) = stats::median(&values) {
                        let (lo, hi) = match sides {
                            (true, false) => (cat as f64 - 0.15, cat as f64),
                            (false, true) => (cat as f64, cat as f64 + 0.15),
                            _ => (cat as f64 - 0.1, cat as f64 + 0.1),
                        };
                        plot_ui.line(
                            Line::new(PlotPoints::new(vec![[lo, m], [hi, m]]))
                                .color(Color32::WHITE)
                                .width(2.0),
                        );
                    }
                }
            }
        });
}

/// Closed outline of a violin centred on `center`, drawing the left and/or
/// right half. `None` when the values have no spread to estimate from.
fn violin_outline(values: &[f64], center: f64, (left, right): (bool, bool)) -> Option<Vec<[f64; 2]>> {
    let curve = stats::kde(values, DENSITY_POINTS / 2);
    let peak = curve.iter().map(|p| p[1]).fold(0.0, f64::max);
    if curve.is_empty() || peak <= 0.0 {
        return None;
    }
    let scale = VIOLIN_HALF_WIDTH / peak;

    let mut outline = Vec::with_capacity(curve.len() * 2);
    for p in &curve {
        let dx = if right { p[1] * scale } else { 0.0 };
        outline.push([center + dx, p[0]]);
    }
    for p in curve.iter().rev() {
        let dx = if left { p[1] * scale } else { 0.0 };
        outline.push([center - dx, p[0]]);
    }
    Some(outline)
}

// ---------------------------------------------------------------------------
// Histogram and density of ratings per platform
// ---------------------------------------------------------------------------

/// Overlaid rating histograms, one per platform.
pub fn rating_histogram(
    ui: &mut Ui,
    dataset: &ShowDataset,
    platforms: &[Platform],
    colors: &PlatformColors,
    grid: bool,
) {
    Plot::new("rating_histogram")
        .height(PLOT_HEIGHT)
        .show_grid(grid)
        .legend(Legend::default())
        .x_axis_label("Rating")
        .y_axis_label("Number of TV Shows")
        .show(ui, |plot_ui| {
            for &platform in platforms {
                let values = ratings(dataset, &dataset.platform_indices(platform));
                let bars: Vec<Bar> = stats::histogram(&values, HISTOGRAM_BINS)
                    .iter()
                    .map(|bin| Bar::new(bin.center(), bin.count as f64).width(bin.width * 0.9))
                    .collect();
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .name(platform.name())
                        .color(colors.fill_for(platform)),
                );
            }
        });
}

/// Overlaid kernel density estimates of the rating, one per platform.
pub fn rating_density(
    ui: &mut Ui,
    dataset: &ShowDataset,
    platforms: &[Platform],
    colors: &PlatformColors,
    grid: bool,
) {
    Plot::new("rating_density")
        .height(PLOT_HEIGHT)
        .show_grid(grid)
        .legend(Legend::default())
        .x_axis_label("Rating")
        .y_axis_label("Density")
        .show(ui, |plot_ui| {
            for &platform in platforms {
                let values = ratings(dataset, &dataset.platform_indices(platform));
                let curve = stats::kde(&values, DENSITY_POINTS);
                if curve.is_empty() {
                    log::debug!("Not enough ratings on {platform} for a density estimate");
                    continue;
                }
                plot_ui.line(
                    Line::new(PlotPoints::new(curve))
                        .name(platform.name())
                        .color(colors.color_for(platform))
                        .fill(0.0_f32)
                        .width(2.0),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_violin_halves_stay_on_their_side() {
        let values = [6.0, 7.0, 7.5, 8.0, 9.0];
        let left = violin_outline(&values, 2.0, (true, false)).unwrap();
        assert!(left.iter().all(|p| p[0] <= 2.0));
        let right = violin_outline(&values, 2.0, (false, true)).unwrap();
        assert!(right.iter().all(|p| p[0] >= 2.0));
        let full = violin_outline(&values, 2.0, (true, true)).unwrap();
        let widest = full.iter().map(|p| (p[0] - 2.0).abs()).fold(0.0, f64::max);
        assert!((widest - VIOLIN_HALF_WIDTH).abs() < 1e-9);
    }

    #[test]
    fn test_violin_needs_spread() {
        assert!(violin_outline(&[7.0], 0.0, (true, true)).is_none());
    }
}
