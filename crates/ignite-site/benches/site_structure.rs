//! Benchmarks for site structure operations.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ignite_sections::{DEFAULT_ORDER, top_level_sections};
use ignite_site::{LinkFormat, NavLink, SidebarActiveResolver};

/// Resource paths spread over `sections` sections with `per_section` pages each.
fn resource_paths(sections: usize, per_section: usize) -> Vec<String> {
    let mut paths = Vec::with_capacity(sections * per_section);
    for s in 0..sections {
        let section = match s {
            0 => "docs".to_owned(),
            1 => "blog".to_owned(),
            _ => format!("section-{s}"),
        };
        for p in 0..per_section {
            paths.push(format!("{section}/topic-{}/page-{p}.mdx", p % 10));
        }
    }
    paths
}

fn bench_section_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_order");

    for sections in [10, 100] {
        let paths = resource_paths(sections, 50);
        group.bench_with_input(BenchmarkId::from_parameter(sections), &paths, |b, paths| {
            b.iter(|| top_level_sections(paths.iter().map(String::as_str), &DEFAULT_ORDER));
        });
    }

    group.finish();
}

fn bench_active_link(c: &mut Criterion) {
    let links: Vec<NavLink> = resource_paths(1, 1000)
        .into_iter()
        .map(|resource_path| NavLink {
            title: resource_path.clone(),
            resource_path,
        })
        .collect();
    let format = LinkFormat::new("/handbook", false);
    let resolver = SidebarActiveResolver::new(&format);

    let mut group = c.benchmark_group("active_link");

    group.bench_function("hit", |b| {
        b.iter(|| resolver.find_active("/handbook/docs/topic-9/page-999/", &links));
    });

    group.bench_function("miss", |b| {
        b.iter(|| resolver.find_active("/handbook/blog/unknown", &links));
    });

    group.finish();
}

criterion_group!(benches, bench_section_order, bench_active_link);
criterion_main!(benches);
