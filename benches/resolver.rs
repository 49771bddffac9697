use criterion::{black_box, criterion_group, criterion_main, Criterion};
use site_aware_ldap_srv::{LdapDnsProvider, ParsedTarget, ServiceName, SrvRecord};

const ANSWERS: &[&str] = &[
    "10 1 389 node1.example.com.",
    "10 2 389 node2.example.com.",
    "20 1 389 node3.example.com.",
    "30 1 389 node4.example.com.",
];

fn parse(c: &mut Criterion) {
    c.bench_function("parse url with site", |b| {
        b.iter(|| ParsedTarget::parse(black_box("ldaps:///dc=corp,dc=example,dc=com"), Some("hq")))
    });
    let target = ParsedTarget::parse("ldaps:///dc=corp,dc=example,dc=com", Some("hq")).unwrap();
    let service_name = ServiceName::default();
    c.bench_function("query name", |b| b.iter(|| service_name.query_name(black_box(&target))));
}

fn decode_and_select(c: &mut Criterion) {
    let provider = LdapDnsProvider::<()>::new_with_lookup(());
    let target = ParsedTarget::parse("ldaps:///dc=example,dc=com", None).unwrap();
    c.bench_function("decode and select", |b| {
        b.iter(|| {
            let records = black_box(ANSWERS)
                .iter()
                .map(|raw| SrvRecord::decode(raw))
                .collect::<Result<Vec<_>, _>>()
                .unwrap();
            provider.select(&target, &records)
        })
    });
}

criterion_group!(benches, parse, decode_and_select);
criterion_main!(benches);
