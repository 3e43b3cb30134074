use std::fmt::Write;

use colored::Colorize;
use hellotri_math::Mat4;
use serde::Serialize;

/// Matrix entries in the order they would be handed to the uniform upload.
#[derive(Debug, Serialize)]
pub(super) struct UploadLayout {
    pub(super) layout: &'static str,
    pub(super) data: [f32; 16],
}

impl UploadLayout {
    pub(super) fn new(mvp: &Mat4, column_major: bool) -> Self {
        if column_major {
            Self { layout: "column-major", data: mvp.to_column_major() }
        } else {
            Self { layout: "row-major", data: mvp.data }
        }
    }

    pub(super) fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Renders the entries as a bracketed 4x4 grid, one upload chunk of four
    /// per line; zero entries are dimmed.
    pub(super) fn render_grid(&self) -> String {
        let mut output = String::new();

        for (i, chunk) in self.data.chunks(4).enumerate() {
            let open = if i == 0 { "[" } else { " " };
            write!(&mut output, "{open}").ok();

            for (j, value) in chunk.iter().enumerate() {
                let cell = format!("{value:>11.6}");
                if *value == 0.0 {
                    write!(&mut output, "{}", cell.dimmed()).ok();
                } else {
                    write!(&mut output, "{}", cell.bold()).ok();
                }
                if j < 3 {
                    write!(&mut output, ",").ok();
                }
            }

            let close = if i == 3 { "]" } else { "," };
            writeln!(&mut output, "{close}").ok();
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_major_layout() {
        let m = Mat4::frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 3.0).unwrap();

        let row_major = UploadLayout::new(&m, false);
        let column_major = UploadLayout::new(&m, true);
        assert_eq!(row_major.data[14], -1.0);
        assert_eq!(column_major.data[11], -1.0);
        assert_eq!(column_major.layout, "column-major");
    }

    #[test]
    fn test_json_output() {
        let json = UploadLayout::new(&Mat4::new_identity(), false).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["layout"], "row-major");
        assert_eq!(value["data"].as_array().unwrap().len(), 16);
        assert_eq!(value["data"][5], 1.0);
        assert_eq!(value["data"][6], 0.0);
    }

    #[test]
    fn test_grid_shape() {
        colored::control::set_override(false);
        let grid = UploadLayout::new(&Mat4::new_identity(), false).render_grid();

        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with('['));
        assert!(lines[3].ends_with(']'));
        assert!(lines[1].contains("   1.000000"));
    }
}
