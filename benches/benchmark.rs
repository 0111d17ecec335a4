//! Performance benchmarks for rs-mikan.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Tag classification of a typical release title
//! - Season grid and daily feed pages of synthetic size
//! - Saved pages from `../data/pages` when present

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rs_mikan::tags::parse_tags_and_title;
use rs_mikan::{parse_document, PageKind, Parser};
use std::fmt::Write;
use std::fs;

const TITLE: &str = "【喵萌奶茶屋】★04月新番★[葬送的芙莉莲 / Sousou no Frieren][28][1080p][简日双语][招募翻译]";

fn season_page(shows_per_day: usize) -> String {
    let mut html = String::new();
    for day in ["月", "火", "水", "木", "金", "土", "日"] {
        let _ = write!(html, r#"<div class="sk-bangumi"><div>{day}</div><ul>"#);
        for id in 0..shows_per_day {
            let _ = write!(
                html,
                r#"<li><span data-bangumiid="{id}" data-src="/images/Bangumi/{id}.jpg?width=400"{grey}></span>
                   <div class="num-node">{id}</div><a class="an-text" title="Show {id}"></a>
                   <div class="date-text">2024/04/06 更新</div>{active}</li>"#,
                grey = if id % 5 == 0 { r#" class="greyout""# } else { "" },
                active = if id % 3 == 0 { r#"<i class="active"></i>"# } else { "" },
            );
        }
        html.push_str("</ul></div>");
    }
    html
}

fn feed_page(items: usize) -> String {
    let mut html = String::from(r#"<div id="an-list-res">"#);
    for id in 0..items {
        let _ = write!(
            html,
            r#"<div class="my-rss-item">
                <div class="sk-col rss-thumb" style="background-image: url(/images/Bangumi/{id}.jpg)"></div>
                <div class="sk-col rss-name">
                    <div><a href="/Home/Bangumi/{id}#583">Show {id}</a></div>
                    <a href="/Download/{id}.torrent">{TITLE}<span>[1.2GB]</span></a>
                    <a data-clipboard-text="magnet:?xt=urn:btih:{id}">m</a>
                    <a href="/Home/Episode/{id}">p</a>
                </div>
                <div class="sk-col pull-right">2024/04/06 12:30</div>
            </div>"#
        );
    }
    html.push_str("</div>");
    html
}

fn bench_tags(c: &mut Criterion) {
    c.bench_function("parse_tags_and_title", |b| {
        b.iter(|| parse_tags_and_title(black_box(TITLE)));
    });
}

fn bench_synthetic_pages(c: &mut Criterion) {
    let parser = Parser::default();
    let mut group = c.benchmark_group("synthetic");

    for (kind, html) in [
        (PageKind::Season, season_page(20)),
        (PageKind::Day, feed_page(100)),
    ] {
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("extract", kind), &html, |b, html| {
            b.iter(|| parser.extract(kind, &parse_document(black_box(html))));
        });
    }

    group.finish();
}

/// Benchmark with saved pages, skipped when the files are missing
fn bench_saved_pages(c: &mut Criterion) {
    let page_dir = "../data/pages";
    let samples = [
        ("index.html", PageKind::Index),
        ("bangumi.html", PageKind::Bangumi),
        ("search.html", PageKind::Search),
    ];

    let parser = Parser::default();
    let mut group = c.benchmark_group("saved");

    for (filename, kind) in samples {
        let path = format!("{page_dir}/{filename}");
        if let Ok(html) = fs::read(&path) {
            let size_kb = html.len() / 1024;
            group.throughput(Throughput::Bytes(html.len() as u64));
            group.bench_with_input(
                BenchmarkId::new("extract", format!("{filename} ({size_kb}KB)")),
                &html,
                |b, html| {
                    b.iter(|| parser.extract(kind, &rs_mikan::parse_document_bytes(black_box(html))));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_tags, bench_synthetic_pages, bench_saved_pages);
criterion_main!(benches);
