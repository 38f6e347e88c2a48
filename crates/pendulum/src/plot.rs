//! Comparison window for finished runs.
//!
//! Shows the angle over time with the methods overlaid, once with forcing and
//! once without, above one phase portrait per method for the forced runs.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::{
    compare::{Comparison, Series},
    scenario::Scenario,
};

/// Opens a blocking egui window displaying `comparison`.
///
/// Blocks until the window is closed by the user.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show(comparison: &Comparison) -> Result<(), eframe::Error> {
    let app = ComparisonApp {
        forced: comparison.angle_series(Scenario::WithForce),
        free: comparison.angle_series(Scenario::NoForce),
        portraits: comparison.phase_portraits(Scenario::WithForce),
    };

    eframe::run_native(
        "Pendulum: Gauss vs Romberg vs Adaptive",
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}

struct ComparisonApp {
    forced: Vec<Series>,
    free: Vec<Series>,
    portraits: Vec<Series>,
}

impl eframe::App for ComparisonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let height = ui.available_height() / 3.0 - 24.0;

            for (title, id, series) in [
                ("Angle vs time (with forcing)", "angle_with_force", &self.forced),
                ("Angle vs time (no forcing)", "angle_no_force", &self.free),
            ] {
                ui.heading(title);
                Plot::new(id)
                    .height(height)
                    .legend(Legend::default())
                    .x_axis_label("t (s)")
                    .y_axis_label("θ (rad)")
                    .show(ui, |plot_ui| {
                        for Series { label, points } in series {
                            let plot_points: PlotPoints = points.iter().copied().collect();
                            plot_ui.line(Line::new(plot_points).name(label));
                        }
                    });
            }

            ui.columns(self.portraits.len().max(1), |columns| {
                for (column, Series { label, points }) in columns.iter_mut().zip(&self.portraits) {
                    column.label(label.as_str());
                    Plot::new(format!("phase_{label}"))
                        .height(height)
                        .x_axis_label("θ (rad)")
                        .y_axis_label("ω (rad/s)")
                        .show(column, |plot_ui| {
                            let plot_points: PlotPoints = points.iter().copied().collect();
                            plot_ui.line(Line::new(plot_points).name(label));
                        });
                }
            });
        });
    }
}
