//! Criterion benchmarks for the morphodict lookup core.
//!
//! Covers:
//! - Normalization of wordforms
//! - Affix index construction and prefix/suffix queries
//! - Analysis partitioning with both parsers
//! - Longest-prefix relabelling

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use morphodict::affix::{AffixSearcher, WordformId};
use morphodict::morphology::{AnalysisParser, AnchorParser, StructuralParser};
use morphodict::normalize::normalize;
use morphodict::relabel::{LabelFriendliness, Relabelling};
use std::hint::black_box;

const STEMS: [&str; 12] = [
    "nipâ", "mîciso", "wâpam", "atoskê", "pimohtê", "nikamo", "kiskêyiht", "miyo", "sêkisi",
    "astotin", "maskisin", "mîciwin",
];

const ENDINGS: [&str; 8] = ["w", "wak", "yân", "yan", "t", "ot", "êw", "ân"];

/// Generate a synthetic lexicon of distinct forms.
fn generate_wordforms(count: usize) -> Vec<(String, WordformId)> {
    (0..count)
        .map(|i| {
            let stem = STEMS[i % STEMS.len()];
            let ending = ENDINGS[(i / STEMS.len()) % ENDINGS.len()];
            let prefix = ["", "ki", "ni", "ê-"][(i / (STEMS.len() * ENDINGS.len())) % 4];
            (format!("{prefix}{stem}{ending}{}", i / 384), WordformId(i as u64))
        })
        .collect()
}

fn generate_analyses(count: usize) -> Vec<String> {
    let templates = [
        "nipâw+V+AI+Ind+3Sg",
        "PV/e+wâpamêw+V+TA+Cnj+1Sg+3SgO",
        "PV/ki+PV/wi+IC+atoskêw+V+AI+Ind+Fut+1Sg",
        "astotin+N+I+D+Px1Sg+Sg",
        "maskisin+N+I+Pl",
        "Rdpl+pimohtêw+V+AI+Ind+3Pl",
        "êkwa+Ipc",
        "awa+Pron+Dem+Prox+Sg",
    ];
    (0..count)
        .map(|i| templates[i % templates.len()].to_string())
        .collect()
}

const RELABELLING_TSV: &str = "FST TAG\tLINGUISTIC (SHORT)\tLINGUISTIC (LONG)\tENGLISH\tNÊHIYAWÊWIN\n\
V+AI\tAnimate intransitive verb\tVerb - animate intransitive\tAction word - like: mîcisow\tnêhiyawêwin: mîcisow\n\
V+TA\tTransitive animate verb\tVerb - transitive animate\tAction word - like: wîcihêw\tnêhiyawêwin: wîcihêw\n\
N+I\tInanimate noun\tNoun - inanimate\tLike: mîciwin\tnêhiyawêwin: mîciwin\n\
Ind\tIndependent\tIndependent order\tSomething happens\t\n\
3Sg\tThird person singular\tThird person singular\ts/he\twiya\n";

/// Benchmark normalization.
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let words = generate_wordforms(1000);

    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("normalize_batch", |b| {
        b.iter(|| {
            for (text, _) in &words {
                black_box(normalize(black_box(text)));
            }
        })
    });

    group.finish();
}

/// Benchmark affix index construction and queries.
fn bench_affix_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("affix_search");
    group.sample_size(20);

    let words = generate_wordforms(10_000);

    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("build_index", |b| {
        b.iter(|| {
            let searcher =
                AffixSearcher::new(words.iter().map(|(text, id)| (text.as_str(), *id))).unwrap();
            black_box(searcher)
        })
    });

    let searcher = AffixSearcher::new(words.iter().map(|(text, id)| (text.as_str(), *id))).unwrap();

    group.throughput(Throughput::Elements(1));
    group.bench_function("prefix_query", |b| {
        b.iter(|| black_box(searcher.search_by_prefix(black_box("kinipâ"))))
    });
    group.bench_function("suffix_query", |b| {
        b.iter(|| black_box(searcher.search_by_suffix(black_box("wak1"))))
    });

    group.finish();
}

/// Benchmark analysis partitioning.
fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    let analyses = generate_analyses(100);
    let structural = StructuralParser::new();
    let anchor = AnchorParser::new();

    group.throughput(Throughput::Elements(analyses.len() as u64));
    group.bench_function("structural", |b| {
        b.iter(|| {
            for analysis in &analyses {
                let _ = black_box(structural.partition(black_box(analysis)));
            }
        })
    });
    group.bench_function("anchor", |b| {
        b.iter(|| {
            for analysis in &analyses {
                let _ = black_box(anchor.partition(black_box(analysis)));
            }
        })
    });

    group.finish();
}

/// Benchmark longest-prefix relabelling.
fn bench_relabel(c: &mut Criterion) {
    let mut group = c.benchmark_group("relabel");
    let relabelling = Relabelling::from_tsv_str(RELABELLING_TSV).unwrap();
    let tags = ["V", "AI", "Ind", "Prs", "3Sg"];

    group.bench_function("get_longest", |b| {
        b.iter(|| {
            black_box(relabelling.get_longest(black_box(&tags), LabelFriendliness::English))
        })
    });
    group.bench_function("relabel_miss", |b| {
        b.iter(|| {
            black_box(relabelling.relabel(black_box(&["Px1Sg", "Loc"]), LabelFriendliness::English))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_affix_search,
    bench_partition,
    bench_relabel
);

criterion_main!(benches);
