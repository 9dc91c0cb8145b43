// tests/split_tests.rs
use image::{DynamicImage, GenericImageView, Rgb, RgbImage};
use scansplit::clean::remove_crops;
use scansplit::{RunConfig, split_tree};
use scansplit_core::{CropName, Region};
use scansplit_cv::{DateStamper, SheetSplitter, SplitConfig};
use std::fs;
use std::path::{Path, PathBuf};

// Blocks sit on the 8x8 JPEG grid so re-encoding keeps their edges clean.
const SMALL: Region = Region { x: 96, y: 96, width: 200, height: 200 };
const LARGE: Region = Region { x: 336, y: 336, width: 600, height: 600 };

fn two_block_sheet() -> RgbImage {
    RgbImage::from_fn(1000, 1000, |x, y| {
        let inside = |r: &Region| x >= r.x && x < r.right() && y >= r.y && y < r.bottom();
        if inside(&SMALL) || inside(&LARGE) {
            Rgb([180, 180, 180])
        } else {
            Rgb([255, 255, 255])
        }
    })
}

fn corner_sheet() -> RgbImage {
    RgbImage::from_fn(704, 704, |x, y| {
        if x < 600 && y < 600 {
            Rgb([180, 180, 180])
        } else {
            Rgb([255, 255, 255])
        }
    })
}

fn run_config(dir: &Path) -> RunConfig {
    RunConfig {
        target_directory: dir.to_path_buf(),
        ..Default::default()
    }
}

fn files_named(dir: &Path, marker: &str) -> Vec<PathBuf> {
    let mut found: Vec<_> = walk(dir)
        .into_iter()
        .filter(|p| p.file_name().unwrap().to_string_lossy().contains(marker))
        .collect();
    found.sort();
    found
}

fn walk(dir: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            out.extend(walk(&path));
        } else {
            out.push(path);
        }
    }
    out
}

#[test]
fn test_only_large_block_is_cropped_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = DynamicImage::ImageRgb8(two_block_sheet());
    let splitter = SheetSplitter::new(SplitConfig::default());

    let accepted = splitter.accepted_regions(&sheet);
    assert_eq!(accepted.as_slice(), &[LARGE]);

    let report = splitter
        .split_image(&sheet, &CropName::new("sheet", ".png"), dir.path())
        .unwrap();
    assert_eq!(report.detected(), 1);

    let crop = image::open(&report.crops[0]).unwrap();
    assert_eq!(crop.dimensions(), (600, 600));
    assert_eq!(crop.to_rgb8(), sheet.crop_imm(336, 336, 600, 600).to_rgb8());
}

#[test]
fn test_tree_run_reports_and_stamps() {
    let dir = tempfile::tempdir().unwrap();
    let year = dir.path().join("1987");
    let misc = dir.path().join("misc");
    fs::create_dir_all(&year).unwrap();
    fs::create_dir_all(&misc).unwrap();
    two_block_sheet().save(year.join("sheet.jpg")).unwrap();
    two_block_sheet().save(misc.join("other.jpeg")).unwrap();
    RgbImage::from_pixel(300, 300, Rgb([255, 255, 255]))
        .save(dir.path().join("empty.jpg"))
        .unwrap();

    let mut out = Vec::new();
    let summary = split_tree(&run_config(dir.path()), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains(&format!("{}: 1 images detected", year.join("sheet.jpg").display())));
    assert!(text.contains(&format!("{}: 1 images detected", misc.join("other.jpeg").display())));
    assert!(text.contains(&format!("{}: 0 images detected", dir.path().join("empty.jpg").display())));
    assert_eq!(summary.crops_written(), 2);
    assert!(summary.failed.is_empty());

    let dated = year.join("sheet-Crop-0.jpg");
    let undated = misc.join("other-Crop-0.jpeg");
    assert_eq!(image::open(&dated).unwrap().dimensions(), (600, 600));
    assert_eq!(
        DateStamper::read_datetime(&dated).unwrap().as_deref(),
        Some("1987:06:01 00:00:00")
    );
    assert_eq!(DateStamper::read_datetime(&undated).unwrap(), None);
}

#[test]
fn test_rerun_overwrites_instead_of_recropping() {
    let dir = tempfile::tempdir().unwrap();
    two_block_sheet().save(dir.path().join("sheet.jpg")).unwrap();
    let config = run_config(dir.path());

    split_tree(&config, &mut Vec::new()).unwrap();
    let first = files_named(dir.path(), "-Crop-");
    let second_run = split_tree(&config, &mut Vec::new()).unwrap();

    assert_eq!(second_run.reports.len(), 1);
    assert_eq!(files_named(dir.path(), "-Crop-"), first);
    assert_eq!(first, vec![dir.path().join("sheet-Crop-0.jpg")]);
}

#[test]
fn test_photo_in_corner_is_cropped() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = dir.path().join("edge.jpg");
    corner_sheet().save(&sheet).unwrap();

    let mut out = Vec::new();
    let summary = split_tree(&run_config(dir.path()), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains(&format!("{}: 1 images detected", sheet.display())));
    assert_eq!(summary.crops_written(), 1);
    let crop = image::open(dir.path().join("edge-Crop-0.jpg")).unwrap();
    assert_eq!(crop.dimensions(), (600, 600));
}

#[test]
fn test_failed_crop_write_does_not_stop_walk() {
    let dir = tempfile::tempdir().unwrap();
    two_block_sheet().save(dir.path().join("a.jpg")).unwrap();
    two_block_sheet().save(dir.path().join("b.jpg")).unwrap();
    // A directory where the first crop of `a.jpg` would go.
    fs::create_dir(dir.path().join("a-Crop-0.jpg")).unwrap();

    let mut out = Vec::new();
    let summary = split_tree(&run_config(dir.path()), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(summary.failed, vec![dir.path().join("a.jpg")]);
    assert_eq!(summary.reports.len(), 1);
    assert_eq!(summary.reports[0].source, dir.path().join("b.jpg"));
    assert!(text.contains(&format!("{}: Error: could not be split", dir.path().join("a.jpg").display())));
    assert!(text.contains(&format!("{}: 1 images detected", dir.path().join("b.jpg").display())));
    assert_eq!(image::open(dir.path().join("b-Crop-0.jpg")).unwrap().dimensions(), (600, 600));
}

#[test]
fn test_clean_after_run() {
    let dir = tempfile::tempdir().unwrap();
    let year = dir.path().join("2001");
    fs::create_dir_all(&year).unwrap();
    two_block_sheet().save(year.join("sheet.jpg")).unwrap();
    split_tree(&run_config(dir.path()), &mut Vec::new()).unwrap();
    assert_eq!(files_named(dir.path(), "-Crop-").len(), 1);

    let removed = remove_crops(dir.path());

    assert_eq!(removed, vec![year.join("sheet-Crop-0.jpg")]);
    assert!(files_named(dir.path(), "-Crop-").is_empty());
    assert!(year.join("sheet.jpg").exists());
    assert!(remove_crops(dir.path()).is_empty());
}
