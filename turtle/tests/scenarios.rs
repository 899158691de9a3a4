// rasterturtle/turtle/tests/scenarios.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use rasterturtle::{BuildError, BuildResultFlags, BuiltTurtle, DispatchPolicy, RenderOptions};
use rasterturtle_geometry::basic::point::Point2DI64;
use rasterturtle_geometry::basic::rect::RectI64;
use rasterturtle_geometry::color::ColorU;
use rasterturtle_renderer::{BoundsPolicy, RenderError};
use uturtle::ast::Command;
use uturtle::Parser;

fn options(canvas_size: u32) -> RenderOptions {
    RenderOptions { canvas_size, ..RenderOptions::default() }
}

fn run(source: &str, options: &RenderOptions) -> Result<BuiltTurtle, BuildError> {
    BuiltTurtle::from_ast(&Parser::new().parse(source), options)
}

#[test]
fn right_angle_on_the_default_canvas() {
    let built = run("fd 100\nrt 90\nfd 100\n", &RenderOptions::default()).unwrap();

    assert_eq!(built.state().position, Point2DI64::new(600, 600));
    assert_eq!(built.bounds(), RectI64::new(500, 500, 600, 599));
    assert_eq!(built.canvas.painted_pixel_count(), 200);
    assert!(built.result_flags.is_empty());

    let image = built.crop().unwrap();
    assert_eq!((image.width, image.height), (101, 100));
    assert_eq!(image.pixel(0, 0), Some(ColorU::black()));
    assert_eq!(image.pixel(100, 99), Some(ColorU::black()));
    assert_eq!(image.pixel(50, 50), Some(ColorU::transparent_black()));
}

#[test]
fn fill_leaks_around_an_open_stroke() {
    let built = run("setpencolor [255 0 0]\nfd 50\nfill [0 255 0]", &options(200)).unwrap();

    let red = ColorU::from_rgb(255, 0, 0);
    let green = ColorU::from_rgb(0, 255, 0);
    assert_eq!(built.state().position, Point2DI64::new(150, 100));
    assert_eq!(built.canvas.pixel(Point2DI64::new(100, 100)), Some(red));
    assert_eq!(built.canvas.pixel(Point2DI64::new(149, 100)), Some(red));
    assert_eq!(built.canvas.pixel(Point2DI64::new(150, 100)), Some(green));
    assert_eq!(built.canvas.pixel(Point2DI64::new(120, 101)), Some(green));
    assert_eq!(built.canvas.pixel(Point2DI64::new(0, 0)), Some(green));
    assert_eq!(built.canvas.painted_pixel_count(), 200 * 200);
    assert_eq!(built.bounds(), RectI64::new(0, 0, 199, 199));
}

#[test]
fn fill_inside_a_closed_square() {
    let source = "fd 10\nrt 90\nfd 10\nrt 90\nfd 10\nrt 90\nfd 10\nrt 90\n\
                  pu\nfd 5\nrt 90\nfd 5\nfill [0 0 255]";
    let built = run(source, &options(100)).unwrap();

    assert_eq!(built.state().position, Point2DI64::new(55, 55));
    // 40 outline pixels around a 9x9 interior.
    assert_eq!(built.canvas.painted_pixel_count(), 40 + 81);
    assert_eq!(built.bounds(), RectI64::new(50, 50, 60, 60));
    assert!(built.canvas.pixel(Point2DI64::new(49, 55)).unwrap().is_background());
}

#[test]
fn fill_on_a_painted_pixel_changes_nothing() {
    let built = run("fd 10\nbk 10\nfill [0 0 255]", &RenderOptions::default()).unwrap();
    assert_eq!(built.state().position, Point2DI64::new(500, 500));
    assert_eq!(built.canvas.painted_pixel_count(), 11);
    assert_eq!(built.canvas.pixel(Point2DI64::new(500, 500)), Some(ColorU::black()));
}

#[test]
fn nothing_drawn_cannot_be_cropped() {
    let built = run("pu\nfd 10\nrt 45", &RenderOptions::default()).unwrap();
    assert_eq!(built.bounds(), RectI64::new(-1, -1, -1, -1));
    assert_eq!(built.crop(), Err(RenderError::EmptyDrawing));
}

#[test]
fn lenient_dispatch_flags_bad_lines() {
    let source = "fd 10\nbogus 1\nsetpencolor [1 x 3]\nsetpentype star\nfd 10";
    let built = run(source, &options(100)).unwrap();

    assert_eq!(
        built.result_flags,
        BuildResultFlags::ERR_UNHANDLED_COMMAND
            | BuildResultFlags::ERR_MALFORMED_COMMAND
            | BuildResultFlags::ERR_UNKNOWN_PEN_TYPE
    );
    assert_eq!(built.flagged_lines, vec![2, 3, 4]);
    // Reading the color stopped at `x`, leaving green and blue at zero.
    assert_eq!(built.canvas.pixel(Point2DI64::new(65, 50)), Some(ColorU::from_rgb(1, 0, 0)));
    assert_eq!(built.state().position, Point2DI64::new(70, 50));
}

#[test]
fn strict_dispatch_stops_at_the_first_bad_line() {
    let strict = RenderOptions { dispatch_policy: DispatchPolicy::Strict, ..options(100) };

    assert_eq!(
        run("fd 10\nbogus 1\nfd 10", &strict).unwrap_err(),
        BuildError::UnknownCommand { line: 2, verb: "bogus".to_owned() }
    );
    match run("fd 10\n\nsetpensize 4", &strict) {
        Err(BuildError::MalformedCommand { line: 3, ref verb, .. }) if verb == "setpensize" => {}
        other => panic!("unexpected result: {:?}", other.map(|built| built.result_flags)),
    }
    // Unknown pen types are not decoding errors.
    assert!(run("setpentype star\nfd 3", &strict).is_ok());
}

#[test]
fn stroke_off_the_canvas_fails_or_clips() {
    assert_eq!(
        run("pd\nfd 60", &options(100)).unwrap_err(),
        BuildError::Render {
            line: 2,
            source: RenderError::OutOfBounds { x: 100, y: 50, size: 100 },
        }
    );

    let clipped = RenderOptions { bounds_policy: BoundsPolicy::Clip, ..options(100) };
    let built = run("fd 60\nfill [9 9 9]", &clipped).unwrap();
    assert_eq!(built.state().position, Point2DI64::new(110, 50));
    assert_eq!(built.bounds(), RectI64::new(50, 50, 99, 50));
}

#[test]
fn far_pen_up_moves_keep_the_turtle_alive() {
    let built = run("pu\nfd 1e10\nrt 90\nbk 1e10", &RenderOptions::default()).unwrap();
    assert_eq!(built.state().position, Point2DI64::new(10_000_000_500, -9_999_999_500));
    assert_eq!(built.canvas.painted_pixel_count(), 0);

    let built = run("pu\nfd inf\nfd inf", &RenderOptions::default()).unwrap();
    assert_eq!(built.state().position, Point2DI64::new(i64::MAX, 500));

    // Coming back from far away with the pen down only draws what lands.
    let clipped = RenderOptions { bounds_policy: BoundsPolicy::Clip, ..options(100) };
    let built = run("pu\nbk 1e12\npd\nfd 2e12", &clipped).unwrap();
    assert_eq!(built.bounds(), RectI64::new(0, 50, 99, 50));

    assert!(matches!(
        run("pu\nbk 1e12\npd\nfd 2e12", &options(100)),
        Err(BuildError::Render { line: 4, source: RenderError::OutOfBounds { .. } })
    ));
}

#[test]
fn huge_pen_sizes_fail_or_clip() {
    let source = "setpentype circle\nsetpensize 50000 50000\nfd 1";
    assert!(matches!(
        run(source, &options(100)),
        Err(BuildError::Render { line: 3, source: RenderError::OutOfBounds { .. } })
    ));

    let clipped = RenderOptions { bounds_policy: BoundsPolicy::Clip, ..options(100) };
    let built = run(source, &clipped).unwrap();
    assert_eq!(built.canvas.painted_pixel_count(), 100 * 100);

    let built = run("setpensize 2147483647 2147483647\nfd 1", &clipped).unwrap();
    assert_eq!(built.bounds(), RectI64::new(50, 50, 99, 99));
}

#[test]
fn malformed_commands_run_with_zeroed_fields() {
    let built = run("setpensize [5]\nsetpencolor [255 x 0]", &options(100)).unwrap();
    assert_eq!((built.state().pen.width, built.state().pen.height), (5, 0));
    assert_eq!(built.state().pen.color, ColorU::from_rgb(255, 0, 0));
    assert_eq!(built.result_flags, BuildResultFlags::ERR_MALFORMED_COMMAND);
    assert_eq!(built.flagged_lines, vec![1, 2]);

    // A zero-height square pen leaves only the line trace.
    let built = run("setpensize [5]\nfd 3", &options(100)).unwrap();
    assert_eq!(built.canvas.painted_pixel_count(), 3);

    let built = run("fd abc\nfill [0 0]", &options(20)).unwrap();
    assert_eq!(built.state().position, Point2DI64::new(10, 10));
    assert_eq!(built.canvas.pixel(Point2DI64::new(0, 0)), Some(ColorU::from_rgb(0, 0, 0)));
}

#[test]
fn pen_type_only_flags_are_counted() {
    let built = run("setpentype star\nfd 3", &options(20)).unwrap();
    assert_eq!(built.result_flags, BuildResultFlags::ERR_UNKNOWN_PEN_TYPE);
    assert_eq!(built.flagged_lines, vec![1]);
}

#[test]
fn pen_color_alpha_defaults_to_opaque() {
    let built = run("setpencolor 10 20 30\nfd 2", &options(10)).unwrap();
    assert_eq!(built.state().pen.color, ColorU::new(10, 20, 30, 255));

    let built = run("setpencolor 10 20 30 0\nfd 2", &options(10)).unwrap();
    assert_eq!(built.canvas.pixel(Point2DI64::new(5, 5)), Some(ColorU::new(10, 20, 30, 1)));
    assert_eq!(built.bounds(), RectI64::new(5, 5, 6, 5));
}

#[test]
fn pen_shapes_through_the_interpreter() {
    let built = run("setpentype circle\nsetpensize 3 3\nfd 2", &options(20)).unwrap();
    assert_eq!(built.bounds(), RectI64::new(9, 9, 12, 11));
    assert_eq!(built.canvas.painted_pixel_count(), 12);

    let built = run("setpensize 2 3\nfd 2", &options(20)).unwrap();
    assert_eq!(built.bounds(), RectI64::new(10, 10, 13, 11));

    let built = run("setpentype star\nsetpensize 5 5\nfd 4", &options(20)).unwrap();
    assert_eq!(built.canvas.painted_pixel_count(), 4);
}

#[test]
fn debug_text_of_a_small_drawing() {
    let built = run("fd 3\nrt 90\nfd 2", &options(10)).unwrap();
    let image = built.crop().unwrap();
    assert_eq!(image.to_debug_text(), "XXXX\n   X\nminX: 5, minY: 5, maxX: 8, maxY: 6");
}

#[test]
fn decoded_commands_run_without_a_parser() {
    let commands = vec![
        Command::PenColor { r: 0, g: 0, b: 255, a: None },
        Command::Forward(4.0),
        Command::Left(90.0),
        Command::Back(2.0),
    ];
    let built = BuiltTurtle::from_commands(&commands, &options(10)).unwrap();
    assert_eq!(built.state().position, Point2DI64::new(9, 7));
    assert_eq!(built.bounds(), RectI64::new(5, 5, 9, 6));
    assert_eq!(built.canvas.pixel(Point2DI64::new(9, 6)), Some(ColorU::from_rgb(0, 0, 255)));
}
