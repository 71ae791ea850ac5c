//! Contract Invariant Tests
//!
//! These tests run the whole pipeline against real decoded images and
//! verify the non-negotiable guarantees.

use std::fs;
use std::path::Path;

use image::{GrayImage, Luma, Rgba, RgbaImage};
use img2lvgl_core::{convert, ConvertError, ConvertRequest};
use tempfile::TempDir;

fn write_light_gray(dir: &Path, name: &str, width: u32, height: u32) {
    GrayImage::from_pixel(width, height, Luma([255]))
        .save(dir.join(name))
        .expect("failed to write test image");
}

fn request(source: &TempDir, dest: &TempDir, input: &str, invert: bool) -> ConvertRequest {
    ConvertRequest {
        input: input.to_string(),
        source_dir: source.path().to_path_buf(),
        dest_dir: dest.path().to_path_buf(),
        invert,
    }
}

#[test]
fn invariant_full_light_image_packs_solid_rows() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write_light_gray(source.path(), "panel.png", 16, 2);

    let outcome = convert(&request(&source, &dest, "panel.png", false)).unwrap();
    assert_eq!((outcome.width, outcome.height), (16, 2));
    assert_eq!(outcome.data_size, 4);

    let data = fs::read_to_string(&outcome.data_path).unwrap();
    assert!(data.contains("  0xff, 0xff, 0xff, 0xff\n};"));
    assert!(data.contains(".header.w = 16,"));
    assert!(data.contains(".header.h = 2,"));
    assert!(data.contains(".data_size = 4,"));
}

#[test]
fn invariant_partial_row_pads_with_zero() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write_light_gray(source.path(), "strip.png", 10, 1);

    let outcome = convert(&request(&source, &dest, "strip.png", false)).unwrap();
    let data = fs::read_to_string(&outcome.data_path).unwrap();
    assert!(data.contains("  0xff, 0xc0\n};"));
}

#[test]
fn invariant_invert_flips_real_pixels_only() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write_light_gray(source.path(), "strip.png", 10, 1);

    let outcome = convert(&request(&source, &dest, "strip.png", true)).unwrap();
    assert!(outcome.inverted);
    let data = fs::read_to_string(&outcome.data_path).unwrap();
    // Real pixels flip to clear; the padding bits were already clear.
    assert!(data.contains("  0x00, 0x00\n};"));
}

#[test]
fn invariant_transparent_pixels_classify_dark() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    RgbaImage::from_pixel(8, 1, Rgba([255, 255, 255, 0]))
        .save(source.path().join("ghost.png"))
        .unwrap();

    let outcome = convert(&request(&source, &dest, "ghost.png", false)).unwrap();
    let data = fs::read_to_string(&outcome.data_path).unwrap();
    assert!(data.contains("  0x00\n};"));
    // The format tag does not change for transparent sources.
    assert!(data.contains(".header.cf = LV_IMG_CF_ALPHA_1BIT,"));
}

#[test]
fn invariant_artifacts_deterministic() {
    let source = TempDir::new().unwrap();
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_light_gray(source.path(), "logo.png", 20, 9);

    let a = convert(&request(&source, &first, "logo.png", true)).unwrap();
    let b = convert(&request(&source, &second, "logo.png", true)).unwrap();

    assert_eq!(
        fs::read(&a.data_path).unwrap(),
        fs::read(&b.data_path).unwrap()
    );
    assert_eq!(
        fs::read(&a.header_path).unwrap(),
        fs::read(&b.header_path).unwrap()
    );
}

#[test]
fn invariant_identifier_names_both_artifacts() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write_light_gray(source.path(), "my-icon 1.png", 8, 1);

    let outcome = convert(&request(&source, &dest, "my-icon 1.png", false)).unwrap();
    assert_eq!(outcome.data_path, dest.path().join("my_icon_1.c"));
    assert_eq!(outcome.header_path, dest.path().join("my_icon_1.h"));

    let data = fs::read_to_string(&outcome.data_path).unwrap();
    assert!(data.contains("uint8_t my_icon_1_map[] = {"));
    assert!(data.contains("const lv_img_dsc_t my_icon_1 = {"));

    let header = fs::read_to_string(&outcome.header_path).unwrap();
    assert!(header.contains("#ifndef MY_ICON_1_H"));
    assert!(header.contains("extern const lv_img_dsc_t my_icon_1;"));
}

#[test]
fn invariant_missing_input_writes_nothing() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();

    let err = convert(&request(&source, &dest, "absent.png", false)).unwrap_err();
    assert!(matches!(err, ConvertError::MissingInput(_)));
    assert_eq!(fs::read_dir(dest.path()).unwrap().count(), 0);
}

#[test]
fn invariant_unsupported_name_rejected_before_writing() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write_light_gray(source.path(), "logo!.png", 8, 1);

    let err = convert(&request(&source, &dest, "logo!.png", false)).unwrap_err();
    assert!(matches!(err, ConvertError::Identifier(_)));
    assert_eq!(fs::read_dir(dest.path()).unwrap().count(), 0);
}

#[test]
fn invariant_pair_commits_together_with_no_leftovers() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write_light_gray(source.path(), "badge.png", 12, 3);

    convert(&request(&source, &dest, "badge.png", false)).unwrap();

    let mut entries: Vec<String> = fs::read_dir(dest.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    entries.sort();
    assert_eq!(entries, ["badge.c", "badge.h"]);
}

#[test]
fn invariant_reruns_overwrite_in_place() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write_light_gray(source.path(), "badge.png", 12, 3);

    let normal = convert(&request(&source, &dest, "badge.png", false)).unwrap();
    let plain = fs::read(&normal.data_path).unwrap();

    let inverted = convert(&request(&source, &dest, "badge.png", true)).unwrap();
    assert_eq!(normal.data_path, inverted.data_path);
    assert_ne!(plain, fs::read(&inverted.data_path).unwrap());
}
