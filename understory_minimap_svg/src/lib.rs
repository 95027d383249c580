// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_minimap_svg --heading-base-level=0

//! SVG render sink for Understory minimaps.
//!
//! [`SvgSink`] implements [`RenderSink`] by keeping the latest feature paths,
//! primary transform and indicator rectangle, and exports each surface as a
//! standalone SVG document:
//! - The primary view: a `features` group carrying the pan/zoom transform.
//! - The overview: its own `features` group, a translucent `lamina` that
//!   receives clicks and wheel events, and the `viewport` indicator.
//!
//! Transitions are modelled rather than rendered: a move with a non-zero
//! duration starts a [`Transition`] from whatever is currently shown, and
//! [`SvgSink::advance`] steps it. A newer move replaces a running transition,
//! starting from the in-between value, so nothing jumps.
//!
//! ```rust
//! use kurbo::Point;
//! use understory_minimap::{Minimap, MinimapConfig};
//! use understory_minimap_svg::SvgSink;
//!
//! let config = MinimapConfig::new(500.0, 300.0, 5.0);
//! let mut map = Minimap::new(config, SvgSink::new(config)).unwrap();
//! map.jaunty();
//!
//! let primary = map.sink().primary_svg();
//! assert!(primary.contains("transform=\"translate(-250 -150)scale(2)\""));
//!
//! let overview = map.sink().overview_svg();
//! assert!(overview.contains("class=\"viewport\" x=\"25\" y=\"15\" width=\"50\" height=\"30\""));
//! ```

#![no_std]

extern crate alloc;

pub mod transition;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;
use core::time::Duration;

use kurbo::{BezPath, PathEl, Rect};
use peniko::Color;
use tracing::trace;
use understory_minimap::{MinimapConfig, PrimaryTransform, RenderSink, Surface};

pub use transition::Transition;
use transition::Animated;

/// Colors used for the exported documents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Feature fill in the primary view.
    pub primary_region: Color,
    /// Feature fill in the overview.
    pub overview_region: Color,
    /// Fill of the clickable layer over the overview features.
    pub lamina: Color,
    /// Fill of the viewport indicator.
    pub indicator_fill: Color,
    /// Outline of the viewport indicator.
    pub indicator_stroke: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary_region: Color::from_rgb8(0xaa, 0xaa, 0xaa),
            overview_region: Color::from_rgb8(0x99, 0x99, 0x99),
            lamina: Color::from_rgba8(0x99, 0x99, 0x99, 0x33),
            indicator_fill: Color::from_rgba8(0x77, 0x77, 0x77, 0x80),
            indicator_stroke: Color::from_rgb8(0xaa, 0x22, 0x22),
        }
    }
}

/// A render sink that records state and exports SVG.
#[derive(Clone, Debug)]
pub struct SvgSink {
    config: MinimapConfig,
    palette: Palette,
    primary_features: Vec<BezPath>,
    overview_features: Vec<BezPath>,
    primary: Animated<PrimaryTransform>,
    indicator: Animated<Rect>,
    selected: bool,
}

impl SvgSink {
    /// Creates an empty sink for the given geometry.
    ///
    /// Until the first move, the primary transform is the identity and the
    /// indicator covers the whole overview.
    #[must_use]
    pub fn new(config: MinimapConfig) -> Self {
        Self {
            config,
            palette: Palette::default(),
            primary_features: Vec::new(),
            overview_features: Vec::new(),
            primary: Animated::new(PrimaryTransform::IDENTITY),
            indicator: Animated::new(Rect::from_origin_size(
                (0.0, 0.0),
                config.overview_size(),
            )),
            selected: false,
        }
    }

    /// Returns a copy using `palette`.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Feature paths last set for `surface`.
    #[must_use]
    pub fn features(&self, surface: Surface) -> &[BezPath] {
        match surface {
            Surface::Primary => &self.primary_features,
            Surface::Overview => &self.overview_features,
        }
    }

    /// Primary transform as currently shown, mid-transition if one is running.
    #[must_use]
    pub fn primary_transform(&self) -> PrimaryTransform {
        self.primary.current()
    }

    /// Indicator rectangle as currently shown.
    #[must_use]
    pub fn indicator(&self) -> Rect {
        self.indicator.current()
    }

    /// The running primary transition, if any.
    #[must_use]
    pub fn primary_transition(&self) -> Option<&Transition<PrimaryTransform>> {
        self.primary.transition()
    }

    /// The running indicator transition, if any.
    #[must_use]
    pub fn indicator_transition(&self) -> Option<&Transition<Rect>> {
        self.indicator.transition()
    }

    /// Returns `true` while the indicator is being dragged.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Returns `true` while any transition is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.primary.transition().is_some() || self.indicator.transition().is_some()
    }

    /// Steps running transitions forward by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.primary.advance(dt);
        self.indicator.advance(dt);
    }

    /// Exports the primary view.
    #[must_use]
    pub fn primary_svg(&self) -> String {
        let mut body = String::new();
        let _ = write!(
            body,
            "<g class=\"features\" transform=\"{}\">",
            fmt_transform(self.primary.current())
        );
        write_regions(&mut body, &self.primary_features, self.palette.primary_region);
        body.push_str("</g>");
        svg_document("mainMap", self.config.width, self.config.height, &body)
    }

    /// Exports the overview, including the lamina and indicator.
    #[must_use]
    pub fn overview_svg(&self) -> String {
        let size = self.config.overview_size();
        let mut body = String::new();
        body.push_str("<g class=\"features\">");
        write_regions(&mut body, &self.overview_features, self.palette.overview_region);
        body.push_str("</g>");

        let (lamina, lamina_alpha) = color_to_svg(self.palette.lamina);
        let _ = write!(
            body,
            "<rect class=\"lamina\" width=\"{}\" height=\"{}\" fill=\"{lamina}\" fill-opacity=\"{}\" pointer-events=\"all\"/>",
            fmt_num(size.width),
            fmt_num(size.height),
            fmt_num(lamina_alpha),
        );

        let r = self.indicator.current();
        let (fill, fill_alpha) = color_to_svg(self.palette.indicator_fill);
        let (stroke, _) = color_to_svg(self.palette.indicator_stroke);
        let class = if self.selected {
            "viewport selected"
        } else {
            "viewport"
        };
        let _ = write!(
            body,
            "<rect class=\"{class}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{fill}\" fill-opacity=\"{}\" stroke=\"{stroke}\"/>",
            fmt_num(r.x0),
            fmt_num(r.y0),
            fmt_num(r.width()),
            fmt_num(r.height()),
            fmt_num(fill_alpha),
        );
        svg_document("miniMap", size.width, size.height, &body)
    }
}

impl RenderSink for SvgSink {
    fn apply_primary_transform(&mut self, transform: PrimaryTransform, duration: Duration) {
        if self.primary.retarget(transform, duration) {
            trace!(?duration, "primary transition retargeted");
        }
    }

    fn set_overview_indicator(&mut self, rect: Rect, duration: Duration) {
        if self.indicator.retarget(rect, duration) {
            trace!(?duration, "indicator transition retargeted");
        }
    }

    fn set_features(&mut self, surface: Surface, paths: Vec<BezPath>) {
        match surface {
            Surface::Primary => self.primary_features = paths,
            Surface::Overview => self.overview_features = paths,
        }
    }

    fn set_indicator_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

fn svg_document(class: &str, width: f64, height: f64, body: &str) -> String {
    let w = fmt_num(width);
    let h = fmt_num(height);
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"{class}\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
    );
    svg.push_str(body);
    svg.push_str("</svg>");
    svg
}

fn write_regions(out: &mut String, paths: &[BezPath], fill: Color) {
    let (rgb, alpha) = color_to_svg(fill);
    for path in paths {
        let _ = write!(
            out,
            "<path class=\"region\" d=\"{}\" fill=\"{rgb}\"",
            bez_path_to_svg_d(path)
        );
        if alpha < 1.0 {
            let _ = write!(out, " fill-opacity=\"{}\"", fmt_num(alpha));
        }
        out.push_str("/>");
    }
}

fn fmt_transform(t: PrimaryTransform) -> String {
    format!(
        "translate({} {})scale({})",
        fmt_num(t.translate.x),
        fmt_num(t.translate.y),
        fmt_num(t.scale)
    )
}

fn color_to_svg(color: Color) -> (String, f64) {
    let rgba = color.to_rgba8();
    let a = f64::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn bez_path_to_svg_d(path: &BezPath) -> String {
    let mut d = String::new();
    for el in path.iter() {
        match el {
            PathEl::MoveTo(p) => {
                let _ = write!(d, "M{} {}", fmt_num(p.x), fmt_num(p.y));
            }
            PathEl::LineTo(p) => {
                let _ = write!(d, "L{} {}", fmt_num(p.x), fmt_num(p.y));
            }
            PathEl::QuadTo(p1, p2) => {
                let _ = write!(
                    d,
                    "Q{} {} {} {}",
                    fmt_num(p1.x),
                    fmt_num(p1.y),
                    fmt_num(p2.x),
                    fmt_num(p2.y)
                );
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let _ = write!(
                    d,
                    "C{} {} {} {} {} {}",
                    fmt_num(p1.x),
                    fmt_num(p1.y),
                    fmt_num(p2.x),
                    fmt_num(p2.y),
                    fmt_num(p3.x),
                    fmt_num(p3.y)
                );
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

/// Formats with at most three decimals and no trailing zeros.
fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}
