// ui.rs - Control panel, canvas renderer and pointer input

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Rect, RichText, Stroke, Vec2};
use rps_core::board::MAX_DIMENSION;
use rps_core::config::{MAX_TICKS_PER_SECOND, MIN_TICKS_PER_SECOND};
use rps_core::patterns::PATTERNS;
use rps_core::{CellState, Simulation, Viewport};

/// Share of cells filled by the "Scatter" button.
const RANDOM_DENSITY: f64 = 0.05;

const GRID_COLOR: Color32 = Color32::from_rgb(0x12, 0x12, 0x12);

fn state_color(state: CellState) -> Color32 {
    match state {
        CellState::Blank    => Color32::BLACK,
        CellState::Rock     => Color32::from_rgb(0xff, 0x00, 0x00),
        CellState::Paper    => Color32::from_rgb(0x00, 0xff, 0x00),
        CellState::Scissors => Color32::from_rgb(0x00, 0x00, 0xff),
    }
}

pub struct RpsApp {
    sim: Simulation,
    selected_pattern: usize,
}

impl RpsApp {
    pub fn new(sim: Simulation) -> Self {
        Self {
            sim,
            selected_pattern: 0,
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let run_label = if self.sim.is_running() { "Pause" } else { "Run" };
            if ui.button(run_label).clicked() {
                self.sim.toggle_running();
            }
            if ui.button("Step").clicked() {
                self.sim.step();
            }
            if ui.button("Clear").clicked() {
                self.sim.reset();
            }

            ui.separator();

            ui.label("Seed:");
            egui::ComboBox::from_id_source("seed_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });
            if ui.button("Place").clicked() {
                self.sim.apply_pattern(&PATTERNS[self.selected_pattern]);
            }
            if ui.button("Scatter").clicked() {
                self.sim.randomize(RANDOM_DENSITY);
            }
        });

        ui.horizontal(|ui| {
            ui.label("Paint:");
            for state in CellState::PLAYABLE {
                let text = RichText::new(state.name()).color(state_color(state)).strong();
                if ui.selectable_label(self.sim.mode() == state, text).clicked() {
                    self.sim.set_mode(state);
                }
            }
            if ui.selectable_label(self.sim.mode().is_blank(), "Erase").clicked() {
                self.sim.set_mode(CellState::Blank);
            }

            ui.separator();

            let mut show_grid = self.sim.show_grid();
            if ui.checkbox(&mut show_grid, "Grid").changed() {
                self.sim.set_show_grid(show_grid);
            }
        });

        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut tps = self.sim.ticks_per_second();
            let slider = egui::Slider::new(&mut tps, MIN_TICKS_PER_SECOND..=MAX_TICKS_PER_SECOND)
                .suffix(" ticks/sec");
            if ui.add(slider).changed() {
                self.sim.set_ticks_per_second(tps);
            }

            ui.separator();

            // Changing either dimension rebuilds the board
            let mut rows = self.sim.board().rows();
            if ui.add(egui::DragValue::new(&mut rows).clamp_range(1..=MAX_DIMENSION).prefix("rows: ")).changed() {
                self.sim.set_rows(rows);
            }
            let mut cols = self.sim.board().cols();
            if ui.add(egui::DragValue::new(&mut cols).clamp_range(1..=MAX_DIMENSION).prefix("cols: ")).changed() {
                self.sim.set_cols(cols);
            }

            ui.label(format!("{} cells", self.sim.board().len()));
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let size = self.sim.config().display.canvas_size;
        let (response, painter) = ui.allocate_painter(Vec2::splat(size), egui::Sense::click_and_drag());
        let origin = response.rect.min;
        let viewport = Viewport::new(size, size, self.sim.board().rows(), self.sim.board().cols());

        // Paint with the pointer, both on click and while dragging
        if response.clicked() || response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - origin;
                if let Some((x, y)) = viewport.cell_at(local.x, local.y) {
                    self.sim.paint(x, y);
                }
            }
        }

        let (cell_w, cell_h) = viewport.cell_size();
        for cell in self.sim.board().iter() {
            let (x, y) = viewport.cell_origin(cell.x(), cell.y());
            let rect = Rect::from_min_size(origin + Vec2::new(x, y), Vec2::new(cell_w, cell_h));
            painter.rect_filled(rect, 0.0, state_color(cell.state));
        }

        if self.sim.show_grid() {
            let stroke = Stroke::new(1.0, GRID_COLOR);
            let (vertical, horizontal) = viewport.grid_lines();
            for x in vertical {
                painter.line_segment(
                    [origin + Vec2::new(x, 0.0), origin + Vec2::new(x, viewport.height())],
                    stroke,
                );
            }
            for y in horizontal {
                painter.line_segment(
                    [origin + Vec2::new(0.0, y), origin + Vec2::new(viewport.width(), y)],
                    stroke,
                );
            }
        }
    }

    fn statistics(&self, ui: &mut egui::Ui) {
        let pop = self.sim.board().population();
        ui.horizontal(|ui| {
            ui.label(status_line(&self.sim));
            ui.separator();
            for state in CellState::PLAYABLE {
                ui.label(RichText::new(format!("{} {}", state.name(), pop.count(state))).color(state_color(state)));
            }
        });
    }
}

/// One-line summary of the run: tick, run state and how much of the board is occupied.
fn status_line(sim: &Simulation) -> String {
    let pop = sim.board().population();
    let run_state = if sim.is_running() { "running" } else { "paused" };
    let share = pop.occupied() as f32 / sim.board().len() as f32 * 100.0;
    format!(
        "tick {} ({run_state}), {} of {} cells occupied ({share:.1}%)",
        sim.tick_count(),
        pop.occupied(),
        sim.board().len()
    )
}

impl eframe::App for RpsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Tick first, then draw what the tick produced
        self.sim.advance(Instant::now());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Rock Paper Scissors Automaton");

            self.controls(ui);

            ui.separator();

            self.canvas(ui);

            ui.separator();

            self.statistics(ui);
        });

        // Keep the animation loop going while running
        if self.sim.is_running() {
            ctx.request_repaint();
        }
    }
}
