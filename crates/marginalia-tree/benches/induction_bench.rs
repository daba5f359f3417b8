//! Criterion benchmarks for marginalia-tree: induction and classification.

use criterion::{Criterion, criterion_group, criterion_main};

use marginalia_tree::{Entity, Feature, FeatureRegistry, Label, TreeBuilder, classify};

/// Deterministic 600-record dataset over 4 categories with one
/// quantitative, one discrete, and one multi-valued attribute.
fn make_comments(n: usize) -> Vec<Entity> {
    let categories = ["explain", "directive", "meta", "noise"];
    let words = ["computes,total", "noqa,e501", "copyright,license", "x"];
    (0..n)
        .map(|i| {
            let class = i % categories.len();
            let mut e = Entity::new(Label::new(categories[class]));
            e.set("type", if class == 2 { "Block" } else { "Line" });
            e.set("len", (class * 50 + i % 17).to_string());
            e.set("words", words[class]);
            e
        })
        .collect()
}

fn make_builder() -> TreeBuilder {
    let mut reg = FeatureRegistry::new();
    reg.register(Feature::Discrete { attr: "type".into() });
    reg.register(Feature::Quantitative { attr: "len".into() });
    reg.register(Feature::Membership { attr: "words".into() });
    reg.register(Feature::MembershipIndexed { attr: "words".into(), limit: 1 });
    TreeBuilder::new(reg).with_min_entities(2).with_min_entropy(0.01)
}

fn bench_build(c: &mut Criterion) {
    let entities = make_comments(600);
    let builder = make_builder();

    c.bench_function("tree_build_600x4feat", |b| {
        b.iter(|| builder.build(&entities).unwrap());
    });
}

fn bench_classify(c: &mut Criterion) {
    let entities = make_comments(600);
    let builder = make_builder();
    let tree = builder.build(&entities).unwrap().expect("tree must be built");

    c.bench_function("tree_classify_600", |b| {
        b.iter(|| {
            entities
                .iter()
                .map(|e| classify(&tree, e))
                .count()
        });
    });
}

criterion_group!(benches, bench_build, bench_classify);
criterion_main!(benches);
