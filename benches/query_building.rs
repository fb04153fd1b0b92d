//! Performance benchmarks for query construction
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use xivapi::query::{parse_condition, Field, Prefix};
use xivapi::{Language, SearchQuery};

fn bench_flat_query(c: &mut Criterion) {
    c.bench_function("flat_query", |b| {
        b.iter(|| {
            SearchQuery::new()
                .and_where("Name")
                .contains(black_box("Potion"))
                .and_where("LevelItem")
                .greater_or_equal(black_box(50))
                .and_where_not_eq("IsUntradable", true)
                .or_where("Name")
                .localized_to(Language::Japanese)
                .contains("ポーション")
                .build()
        })
    });
}

fn bench_nested_groups(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_groups");
    for depth in [1usize, 4, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| nest(SearchQuery::new(), depth).build())
        });
    }
    group.finish();
}

fn nest(query: SearchQuery, depth: usize) -> SearchQuery {
    if depth == 0 {
        return query.and_where_eq("Leaf", 1);
    }
    query
        .where_has("BaseParam", |q| q.and_where_eq("Name", "Strength"))
        .where_group(|g| nest(g.or_where_eq("Level", depth), depth - 1))
}

fn bench_condition_parsing(c: &mut Criterion) {
    let conditions = vec![
        "Level>=90",
        "Name~\"Hi-Potion\"",
        "ClassJobCategory.PCT=true",
        "BaseParam[].Name=Spell Speed",
        "Value<1.5",
    ];

    let mut group = c.benchmark_group("condition_parsing");
    for text in conditions {
        group.bench_with_input(BenchmarkId::from_parameter(text), &text, |b, &t| {
            b.iter(|| {
                parse_condition(black_box(t))
                    .map(|cond| cond.apply(SearchQuery::new(), Prefix::Must))
            })
        });
    }
    group.finish();
}

fn bench_field_filter(c: &mut Criterion) {
    let fields = vec![
        Field::new("Name").localized(&[]),
        Field::new("Description")
            .as_html()
            .localized(&[Language::German, Language::French]),
        Field::new("Icon").as_raw(),
    ];
    let global = [Language::Japanese, Language::English];

    c.bench_function("field_filter", |b| {
        b.iter(|| {
            black_box(&fields)
                .iter()
                .flat_map(|f| f.build(&global))
                .collect::<Vec<_>>()
                .join(",")
        })
    });
}

criterion_group!(
    benches,
    bench_flat_query,
    bench_nested_groups,
    bench_condition_parsing,
    bench_field_filter,
);

criterion_main!(benches);
