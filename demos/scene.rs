//! Render the four-obstacle demo scene as SVG.
//!
//! Run with: cargo run --example scene > scene.svg
//!
//! Optionally pass the observer as `x y dir_x dir_y`:
//! cargo run --example scene -- 420 230 -1 0.2 > scene.svg

use sightcone::io::{polygon_to_svg_path, sector_to_svg_path, visibility_to_svg_path};
use sightcone::{FieldOfView, FovConfig, Observer, Point2, Scene, Vec2};
use std::env;

/// Simple SVG builder
struct Svg {
    content: String,
}

impl Svg {
    fn new() -> Self {
        Self {
            content: String::new(),
        }
    }

    fn path(&mut self, d: &str, fill: &str, stroke: &str, stroke_width: f64) {
        self.content.push_str(&format!(
            r#"<path d="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            d, fill, stroke, stroke_width
        ));
    }

    fn dashed(&mut self, d: &str, stroke: &str) {
        self.content.push_str(&format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="1" stroke-dasharray="4 3"/>"#,
            d, stroke
        ));
    }

    fn circle(&mut self, p: Point2<f64>, r: f64, fill: &str) {
        self.content.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}"/>"#,
            p.x, p.y, r, fill
        ));
    }

    fn to_string(&self, width: f64, height: f64) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">{}</svg>"#,
            width, height, width, height, self.content
        )
    }
}

const USAGE: &str = "usage: scene [x y dir_x dir_y]";

fn observer_from_args() -> Observer<f64> {
    let default = Observer::new(Point2::new(374.0, 203.0), Vec2::new(-0.707, 0.707));
    let args: Result<Vec<f64>, _> = env::args().skip(1).map(|a| a.parse::<f64>()).collect();
    match args {
        Ok(args) => match args.as_slice() {
            [] => default,
            [x, y, dx, dy] => Observer::new(Point2::new(*x, *y), Vec2::new(*dx, *dy)),
            _ => {
                eprintln!("{}; using the default observer", USAGE);
                default
            }
        },
        Err(err) => {
            eprintln!("{} ({}); using the default observer", USAGE, err);
            default
        }
    }
}

fn main() {
    let scene = Scene::from_coords(&[
        &[100.0, 100.0, 200.0, 100.0, 200.0, 200.0, 100.0, 200.0][..],
        &[230.0, 50.0, 350.0, 70.0, 330.0, 140.0, 305.0, 90.0][..],
        &[475.0, 56.0, 475.0, 360.0, 616.0, 360.0, 616.0, 56.0][..],
        &[374.0, 300.0, 374.0, 450.0, 400.0, 400.0][..],
    ])
    .expect("demo scene is well formed");

    let observer = observer_from_args();
    let mut fov = FieldOfView::new(FovConfig::default()).expect("default config is valid");
    fov.update(&scene, &observer);

    let mut svg = Svg::new();
    svg.path("M 0 0 L 700 0 L 700 500 L 0 500 Z", "#1e1e24", "none", 0.0);
    if let Some(sector) = fov.sector() {
        svg.dashed(&sector_to_svg_path(sector), "#6c6c80");
    }
    svg.path(
        &visibility_to_svg_path(fov.visibility()),
        "rgba(255, 230, 140, 0.45)",
        "#ffe68c",
        1.0,
    );
    for polygon in scene.polygons() {
        svg.path(&polygon_to_svg_path(polygon), "#4a5a78", "#9fb0d0", 1.5);
    }
    for &p in fov.angle_points() {
        svg.circle(p, 1.5, "#e05050");
    }
    svg.circle(observer.location(), 4.0, "#ffffff");

    let target = Point2::new(150.0, 330.0);
    let seen = fov.is_point_visible(&scene, target);
    svg.circle(target, 5.0, if seen { "#60d060" } else { "#808080" });

    println!("{}", svg.to_string(700.0, 500.0));
    eprintln!(
        "{} boundary vertices, {} blocking edges, target {}",
        fov.visibility().len(),
        fov.blocking_edges().len(),
        if seen { "visible" } else { "hidden" }
    );
}
