use graphdraw::{CellKind, Grid};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub struct ConsoleRenderer {
    lines: Vec<String>,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(color: bool) -> Self {
        Self {
            lines: Vec::new(),
            color,
        }
    }

    pub fn draw_grid(&mut self, grid: &Grid) {
        self.lines.push(format!("    {}", grid.year()));
        for (label, row) in WEEKDAYS.iter().zip(grid.cells()) {
            let mut line = format!("{label} ");
            for cell in row {
                match (cell.kind(), self.color) {
                    (CellKind::Nil, _) => line.push(' '),
                    (CellKind::Empty, _) => line.push('·'),
                    (CellKind::Occupied, true) => line.push_str("\x1B[32m█\x1B[0m"),
                    (CellKind::Occupied, false) => line.push('█'),
                }
            }
            self.lines.push(line);
        }
    }

    pub fn into_string(self) -> String {
        self.lines.join("\n")
    }
}

/// Convenience: render a painted grid as terminal text.
pub fn render_to_console(grid: &Grid, color: bool) -> String {
    let mut renderer = ConsoleRenderer::new(color);
    renderer.draw_grid(grid);
    renderer.into_string()
}
