//! End-to-end tests for rendering lattice point files to images

use latticeplot_core::{AxisRange, Error, RenderConfig};
use latticeplot_io::XyzReader;
use latticeplot_visualization::{render, title_from_path, Renderer};
use image::ImageFormat;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_points(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn file_len(path: &Path) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

#[test]
fn test_diagonal_lattice_end_to_end() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write_points(&dir, "diagonal.xyz", "0 0 0\n1 1 1\n2 2 2");
    let output = dir.path().join("diagonal.png");

    render(3, &input, &output, 10, 30.0, 45.0)?;
    assert!(file_len(&output) > 0);

    let decoded = image::open(&output)?;
    assert_eq!((decoded.width(), decoded.height()), (640, 480));

    let config = RenderConfig::new(3, 10, 30.0, 45.0)?;
    let cloud = XyzReader::read_point_cloud(&input)?;
    let figure = Renderer::new(config).compose(&cloud, &title_from_path(&input));
    let expected = AxisRange { min: -0.5, max: 2.5 };
    assert_eq!(figure.axes().xlim(), expected);
    assert_eq!(figure.axes().ylim(), expected);
    assert_eq!(figure.axes().zlim(), expected);
    assert_eq!(figure.axes().point_count(), 3);
    assert_eq!(figure.scene().markers.len(), 3);
    assert_eq!(figure.axes().title(), Some("diagonal"));
    Ok(())
}

#[test]
fn test_unit_lattice_bounds() {
    let config = RenderConfig::new(1, 4, 0.0, 0.0).unwrap();
    let cloud = XyzReader::parse_str("0 0 0\n").unwrap();
    let figure = Renderer::new(config).compose(&cloud, "single");
    for range in [figure.axes().xlim(), figure.axes().ylim(), figure.axes().zlim()] {
        assert_eq!(range, AxisRange { min: -0.5, max: 0.5 });
    }
}

#[test]
fn test_empty_input_renders_blank_plot() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_points(&dir, "empty.xyz", "");
    let output = dir.path().join("empty.png");

    render(4, &input, &output, 5, 20.0, -60.0).unwrap();
    assert!(file_len(&output) > 0);

    let config = RenderConfig::new(4, 5, 20.0, -60.0).unwrap();
    let figure = Renderer::new(config).compose(&XyzReader::parse_str("").unwrap(), "empty");
    assert_eq!(figure.axes().point_count(), 0);
    assert!(figure.scene().markers.is_empty());
}

#[test]
fn test_non_positive_lattice_size_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_points(&dir, "points.xyz", "0 0 0\n");

    for size in [0, -3] {
        let output = dir.path().join(format!("size{size}.png"));
        let err = render(size, &input, &output, 10, 30.0, 45.0).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(!output.exists());
    }
}

#[test]
fn test_non_positive_marker_size() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_points(&dir, "points.xyz", "0 0 0\n");
    let output = dir.path().join("marker.png");

    let err = render(2, &input, &output, 0, 30.0, 45.0).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(!output.exists());
}

#[test]
fn test_two_column_row_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_points(&dir, "broken.xyz", "0 0 0\n1 1\n");
    let output = dir.path().join("broken.png");

    let err = render(2, &input, &output, 10, 30.0, 45.0).unwrap_err();
    assert!(matches!(err, Error::Parse { line: 2, .. }));
    assert!(!output.exists());
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.png");
    let err = render(2, dir.path().join("nope.xyz"), &output, 10, 30.0, 45.0).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(!output.exists());
}

#[test]
fn test_unknown_output_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_points(&dir, "points.xyz", "0 0 0\n");
    let output = dir.path().join("plot.unknownfmt");

    let err = render(2, &input, &output, 10, 30.0, 45.0).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
    assert!(!output.exists());
}

#[test]
fn test_repeat_render_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_points(&dir, "cube.xyz", "0 0 0\n0 0 1\n0 1 0\n1 0 0\n1 1 1\n");
    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");

    render(2, &input, &first, 20, 15.0, 120.0).unwrap();
    render(2, &input, &second, 20, 15.0, 120.0).unwrap();
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_svg_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_points(&dir, "svg_run.xyz", "0 0 0\n1 1 1\n2 2 2\n");
    let output = dir.path().join("plot.svg");

    render(3, &input, &output, 10, 30.0, 45.0).unwrap();
    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.starts_with("<?xml"));
    assert_eq!(svg.matches("<circle").count(), 3);
    assert!(svg.contains(">svg_run</text>"));
}

#[test]
fn test_every_listed_raster_format() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_points(&dir, "points.xyz", "0 0 0\n1 0 1\n");

    let extensions = [
        "png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "tga", "ppm", "qoi", "exr", "ff",
    ];
    for ext in extensions {
        let output = dir.path().join(format!("plot.{ext}"));
        render(2, &input, &output, 10, -30.0, 400.0).unwrap_or_else(|e| panic!("{ext}: {e}"));
        let decoded = image::open(&output).unwrap_or_else(|e| panic!("{ext}: {e}"));
        assert_eq!((decoded.width(), decoded.height()), (640, 480), "{ext}");
    }
}

#[test]
fn test_unwritable_formats_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_points(&dir, "points.xyz", "0 0 0\n");

    for ext in ["ico", "pnm", "pgm", "hdr", "pdf"] {
        let output = dir.path().join(format!("plot.{ext}"));
        let err = render(2, &input, &output, 10, 30.0, 45.0).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)), "{ext}");
        assert!(!output.exists());
    }
}

#[test]
fn test_missing_extension_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_points(&dir, "points.xyz", "0 0 0\n");
    let output = dir.path().join("plot");

    render(1, &input, &output, 10, 30.0, 45.0).unwrap();
    let bytes = fs::read(&output).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png).unwrap();
    assert_eq!(decoded.width(), 640);
}

#[test]
fn test_renders_on_separate_threads() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_points(&dir, "threads.xyz", "0 0 0\n1 2 0\n2 1 2\n");

    let handles: Vec<_> = ["a.png", "b.png"]
        .into_iter()
        .map(|name| {
            let input = input.clone();
            let output = dir.path().join(name);
            std::thread::spawn(move || {
                render(3, &input, &output, 10, 25.0, -70.0).map(|()| output)
            })
        })
        .collect();

    let outputs: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .collect();
    assert!(outputs.iter().all(|path| file_len(path) > 0));
    assert_eq!(fs::read(&outputs[0]).unwrap(), fs::read(&outputs[1]).unwrap());
}

#[test]
fn test_points_are_drawn() {
    let config = RenderConfig::new(3, 40, 30.0, 45.0).unwrap();
    let empty = Renderer::new(config).compose(&XyzReader::parse_str("").unwrap(), "t").to_image();
    let cloud = XyzReader::parse_str("1 1 1\n").unwrap();
    let one = Renderer::new(config).compose(&cloud, "t").to_image();

    let dark = |img: &image::RgbImage| img.pixels().filter(|p| p.0 == [0, 0, 0]).count();
    assert!(dark(&one) > dark(&empty));
}
