//! Export of visibility results for rendering and inspection.

mod svg;

pub use svg::{
    commands_to_svg_path, polygon_to_svg_path, sector_to_svg_path, visibility_commands,
    visibility_to_svg_path, SvgCommand,
};
