use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stac_organizer::models::{BoundingBox, SourceFormat, TimeRange};
use stac_organizer::processors::{aggregate, extract_extent};
use stac_organizer::readers::{Coordinates, DelimitedTextReader};
use stac_organizer::utils::parse_time_range;
use std::path::Path;

// Create per-file extents for benchmarking
fn create_test_extents(file_count: usize) -> (Vec<BoundingBox>, Vec<TimeRange>) {
    let mut boxes = Vec::with_capacity(file_count);
    let mut ranges = Vec::with_capacity(file_count);

    for i in 0..file_count {
        let offset = (i % 100) as f64 * 0.05;
        boxes.push(
            BoundingBox::new(5.0 + offset, 47.0 + offset, 15.0 + offset, 55.0 + offset).unwrap(),
        );

        let start_year = 1950 + (i % 70) as i32;
        let filename = format!("pr_hyras_{}_{}.nc", start_year, start_year + 2);
        ranges.push(parse_time_range(&filename, SourceFormat::Grid).unwrap());
    }

    (boxes, ranges)
}

// Create delimited text content with a share of malformed rows
fn create_test_csv(rows: usize) -> String {
    let mut content = String::from("# benchmark events\nevent;lat_center;lon_center\n");
    for i in 0..rows {
        if i % 17 == 0 {
            content.push_str(&format!("{};n/a;n/a\n", i));
        } else {
            let lat = 47.0 + (i % 800) as f64 * 0.01;
            let lon = 5.0 + (i % 1000) as f64 * 0.01;
            content.push_str(&format!("{};{:.4};{:.4}\n", i, lat, lon));
        }
    }
    content
}

fn benchmark_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for file_count in [10, 100, 1000] {
        let (boxes, ranges) = create_test_extents(file_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(file_count),
            &file_count,
            |b, _| {
                b.iter(|| {
                    aggregate(black_box(&boxes), black_box(&ranges), Path::new("appdata")).unwrap()
                })
            },
        );
    }

    group.finish();
}

fn benchmark_filename_parsing(c: &mut Criterion) {
    c.bench_function("parse_grid_filename", |b| {
        b.iter(|| {
            parse_time_range(
                black_box("pr_hyras_1_2001_2005_v5-0_de.nc"),
                SourceFormat::Grid,
            )
            .unwrap()
        })
    });

    c.bench_function("parse_csv_filename", |b| {
        b.iter(|| {
            parse_time_range(
                black_box("extreme_events_2020010100-2020123123.csv"),
                SourceFormat::DelimitedText,
            )
            .unwrap()
        })
    });
}

fn benchmark_extent_extraction(c: &mut Criterion) {
    let content = create_test_csv(50_000);
    let reader = DelimitedTextReader::new();

    c.bench_function("csv_parse_and_extract_50k", |b| {
        b.iter(|| {
            let coordinates = reader.parse_content(black_box(&content)).unwrap();
            extract_extent(&coordinates, "bench.csv").unwrap()
        })
    });

    let grid = Coordinates::new(
        (0..1200).map(|i| 47.0 + i as f64 * 0.0075).collect(),
        (0..1000).map(|i| 5.5 + i as f64 * 0.01).collect(),
    );
    c.bench_function("grid_extract_1200x1000_axes", |b| {
        b.iter(|| extract_extent(black_box(&grid), "bench.nc").unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_aggregation,
    benchmark_filename_parsing,
    benchmark_extent_extraction
);
criterion_main!(benches);
