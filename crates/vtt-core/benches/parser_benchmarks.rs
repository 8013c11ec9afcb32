//! Benchmarks for WebVTT reading and writing
//!
//! Generates synthetic documents programmatically so no fixture files are
//! needed. Complexity levels add comments, regions, cue settings and voice
//! tags on top of plain cues.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fmt::Write;
use vtt_core::{utils::format_timestamp, Document, Writer, WriterOptions};

/// Synthetic WebVTT document generator for benchmarking
struct DocumentGenerator {
    /// Number of regions to declare
    regions_count: usize,
    /// Number of cues to generate
    cues_count: usize,
    /// Complexity level for generated cues
    complexity_level: ComplexityLevel,
}

/// Document complexity levels
#[derive(Debug, Clone, Copy)]
enum ComplexityLevel {
    /// One plain text line per cue
    Simple,
    /// Comments and cue settings
    Moderate,
    /// Regions, voice tags and multi-line cues
    Complex,
}

impl DocumentGenerator {
    /// Create generator for plain documents
    const fn simple(cues_count: usize) -> Self {
        Self {
            regions_count: 0,
            cues_count,
            complexity_level: ComplexityLevel::Simple,
        }
    }

    /// Create generator for documents with comments and settings
    const fn moderate(cues_count: usize) -> Self {
        Self {
            regions_count: 0,
            cues_count,
            complexity_level: ComplexityLevel::Moderate,
        }
    }

    /// Create generator for documents using every feature
    const fn complex(cues_count: usize) -> Self {
        Self {
            regions_count: 4,
            cues_count,
            complexity_level: ComplexityLevel::Complex,
        }
    }

    /// Generate the document text
    fn generate(&self) -> String {
        let mut text = String::from("WEBVTT\n\n");

        for region in 0..self.regions_count {
            writeln!(
                text,
                "Region: id=r{region} lines=3 regionanchor=0%,100% scroll=up viewportanchor=10%,90% width=40%"
            )
            .unwrap();
        }
        if self.regions_count > 0 {
            text.push('\n');
        }

        for index in 0..self.cues_count {
            self.generate_cue(&mut text, index);
        }
        text
    }

    /// Append one cue block
    fn generate_cue(&self, text: &mut String, index: usize) {
        let start = std::time::Duration::from_millis(index as u64 * 2_500);
        let end = start + std::time::Duration::from_millis(2_000);

        match self.complexity_level {
            ComplexityLevel::Simple => {}
            ComplexityLevel::Moderate | ComplexityLevel::Complex => {
                writeln!(text, "NOTE cue {index}\n").unwrap();
            }
        }

        writeln!(text, "{}", index + 1).unwrap();
        write!(text, "{} --> {}", format_timestamp(start), format_timestamp(end)).unwrap();

        match self.complexity_level {
            ComplexityLevel::Simple => text.push_str("\nSubtitle line number one\n"),
            ComplexityLevel::Moderate => {
                text.push_str(" align:left position:10%,start size:35%\nSubtitle line number one\n");
            }
            ComplexityLevel::Complex => {
                writeln!(
                    text,
                    " region:r{} align:middle line:0\n<v.loud Speaker {}>First line of dialogue</v>\nand a second line",
                    index % self.regions_count.max(1),
                    index % 3
                )
                .unwrap();
            }
        }
        text.push('\n');
    }
}

/// Benchmark reading at several document sizes
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for &size in &[10, 100, 1000, 5000] {
        for (name, generator) in [
            ("simple", DocumentGenerator::simple(size)),
            ("moderate", DocumentGenerator::moderate(size)),
            ("complex", DocumentGenerator::complex(size)),
        ] {
            let text = generator.generate();
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &text, |b, text| {
                b.iter(|| {
                    let parsed = Document::parse_str(black_box(text));
                    black_box(parsed)
                });
            });
        }
    }

    group.finish();
}

/// Benchmark writing parsed documents
fn bench_writing(c: &mut Criterion) {
    let mut group = c.benchmark_group("writing");

    for &size in &[100, 1000, 5000] {
        let text = DocumentGenerator::complex(size).generate();
        let document = Document::parse_str(&text).unwrap();

        for (name, options) in [
            ("voice_tags", WriterOptions::default()),
            ("plain", WriterOptions::new().with_voice_tags(false)),
        ] {
            let writer = Writer::new(options);
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &document, |b, document| {
                b.iter(|| {
                    let written = writer.to_bytes(black_box(document));
                    black_box(written)
                });
            });
        }
    }

    group.finish();
}

/// Benchmark the read then write cycle
fn bench_round_trip(c: &mut Criterion) {
    let text = DocumentGenerator::complex(1000).generate();

    c.bench_function("round_trip_1000", |b| {
        b.iter(|| {
            let document = Document::parse_str(black_box(&text)).unwrap();
            black_box(document.to_vtt_string())
        });
    });
}

criterion_group!(benches, bench_parsing, bench_writing, bench_round_trip);
criterion_main!(benches);
