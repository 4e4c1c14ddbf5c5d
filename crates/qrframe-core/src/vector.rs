//! The vector image exchanged between a QR symbol provider and the exporter.

use std::fmt::Write;

use crate::types::Color;

/// A horizontal run of dark modules, in module units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleRun {
    pub x: u32,
    pub y: u32,
    pub len: u32,
}

impl ModuleRun {
    pub fn new(x: u32, y: u32, len: u32) -> Self {
        Self { x, y, len }
    }
}

/// A square vector image of a QR symbol.
///
/// The view box is measured in modules (quiet zone included); `size` is the pixel
/// width and height the image is rendered at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorImage {
    pub size: u32,
    pub view_box: u32,
    pub background: Color,
    pub foreground: Color,
    pub runs: Vec<ModuleRun>,
}

impl VectorImage {
    pub fn new(size: u32, view_box: u32, background: Color, foreground: Color) -> Self {
        Self {
            size,
            view_box,
            background,
            foreground,
            runs: Vec::new(),
        }
    }

    pub fn push_run(&mut self, run: ModuleRun) {
        self.runs.push(run);
    }

    /// Number of dark modules covered by all runs.
    pub fn dark_module_count(&self) -> u64 {
        self.runs.iter().map(|r| r.len as u64).sum()
    }

    /// Check the image can be rasterized.
    pub fn validate(&self) -> Result<(), String> {
        if self.size == 0 {
            return Err("image size is zero".to_string());
        }
        if self.view_box == 0 {
            return Err("view box is empty".to_string());
        }
        for run in &self.runs {
            if run.len == 0 {
                return Err(format!("empty run at ({}, {})", run.x, run.y));
            }
            let end = run.x.checked_add(run.len);
            if run.y >= self.view_box || end.map_or(true, |end| end > self.view_box) {
                return Err(format!(
                    "run at ({}, {}) of length {} exceeds the {}-module view box",
                    run.x, run.y, run.len, self.view_box
                ));
            }
        }
        Ok(())
    }

    /// Serialize to SVG. The output is a pure function of the image.
    pub fn to_svg(&self) -> String {
        let n = self.view_box;
        let mut svg = String::new();

        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" height="{size}" width="{size}" viewBox="0 0 {n} {n}" shape-rendering="crispEdges">"#,
            size = self.size,
            n = n
        );

        let _ = write!(
            svg,
            r#"<path fill="{}" d="M0,0 h{n}v{n}H0z"/>"#,
            svg_color(&self.background),
            n = n
        );

        let mut d = String::new();
        for run in &self.runs {
            let _ = write!(d, "M{} {}h{}v1H{}z", run.x, run.y, run.len, run.x);
        }
        let _ = write!(
            svg,
            r#"<path fill="{}" d="{}"/>"#,
            svg_color(&self.foreground),
            d
        );

        svg.push_str("</svg>");
        svg
    }
}

fn svg_color(color: &Color) -> String {
    // Alpha is expressed through the 8-digit hex form.
    color.to_hex()
}
