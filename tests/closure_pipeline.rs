use std::collections::BTreeSet;
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use ontotree::config::Config;
use ontotree::index::{MemorySink, SinkError};
use ontotree::ontology::{ClosureRecord, OntologyIndexService, RelationKind};

fn run_load(config: &Config, source: &str) -> (Vec<(u64, ClosureRecord)>, usize) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime");
    runtime.block_on(async {
        let service = OntologyIndexService::from_config(config);
        let mut sink = MemorySink::new();
        service
            .run(source.as_bytes(), &mut sink)
            .await
            .expect("load succeeds");
        (sink.records().to_vec(), sink.flushes())
    })
}

fn record_for<'a>(
    records: &'a [(u64, ClosureRecord)],
    source: &str,
    target: &str,
) -> &'a ClosureRecord {
    records
        .iter()
        .map(|(_, record)| record)
        .find(|record| record.source == source && record.target == target)
        .expect("expected record to exist")
}

const DIAMOND: &str = "\
[Term]
id: UBERON:0000001
name: a
is_a: UBERON:0000002 ! b
relationship: part_of UBERON:0000004 !

[Term]
id: UBERON:0000002
name: b
is_a: UBERON:0000003 ! c

[Term]
id: UBERON:0000004
name: d
is_a: UBERON:0000003 ! c

[Term]
id: UBERON:0000003
name: c
";

#[test]
fn diamond_record_contains_the_provenance_edge_set() {
    let (records, _) = run_load(&Config::default(), DIAMOND);

    let targets: BTreeSet<&str> = records
        .iter()
        .map(|(_, record)| record)
        .filter(|record| record.source == "UBERON:0000001")
        .map(|record| record.target.as_str())
        .collect();
    assert_eq!(
        targets,
        BTreeSet::from(["UBERON:0000002", "UBERON:0000003", "UBERON:0000004"])
    );

    let record = record_for(&records, "UBERON:0000001", "UBERON:0000003");
    assert_eq!(record.source_name, "a");
    assert_eq!(record.target_name, "c");
    assert_eq!(record.links.len(), 4);

    let has = |s: &str, t: &str, kind: RelationKind| {
        record
            .links
            .iter()
            .any(|link| link.source.id == s && link.target.id == t && link.kind == kind)
    };
    assert!(has("UBERON:0000001", "UBERON:0000002", RelationKind::IsA));
    assert!(has("UBERON:0000002", "UBERON:0000003", RelationKind::IsA));
    assert!(has("UBERON:0000001", "UBERON:0000004", RelationKind::PartOf));
    assert!(has("UBERON:0000004", "UBERON:0000003", RelationKind::IsA));

    // No duplicate (source, target, kind) triples in any record.
    for (_, record) in &records {
        let unique: BTreeSet<(String, String, &'static str)> = record
            .links
            .iter()
            .map(|link| {
                (
                    link.source.id.clone(),
                    link.target.id.clone(),
                    link.kind.as_str(),
                )
            })
            .collect();
        assert_eq!(unique.len(), record.links.len());
    }
}

#[test]
fn record_ids_increase_monotonically_from_zero() {
    let (records, _) = run_load(&Config::default(), DIAMOND);
    let ids: Vec<u64> = records.iter().map(|(id, _)| *id).collect();
    let expected: Vec<u64> = (0..records.len() as u64).collect();
    assert_eq!(ids, expected);
}

#[test]
fn dangling_reference_becomes_an_unnamed_stub_record() {
    let source = "\
[Term]
id: UBERON:0000010
name: defined term
is_a: UBERON:0000011 ! never defined
";
    let (records, _) = run_load(&Config::default(), source);

    let record = record_for(&records, "UBERON:0000010", "UBERON:0000011");
    assert_eq!(record.source_name, "defined term");
    assert_eq!(record.target_name, "");
    assert_eq!(record.links.len(), 1);
    assert_eq!(record.links[0].kind, RelationKind::IsA);
}

#[test]
fn excluded_identifier_never_appears_in_closures_or_links() {
    let source = "\
[Term]
id: CL:0000001
name: cell
is_a: CL:0000812 ! problematic hub
is_a: CL:0000002 ! fine parent
relationship: part_of CL:0000812 !

[Term]
id: CL:0000002
name: fine parent
";
    let (records, _) = run_load(&Config::default(), source);

    assert!(!records.is_empty());
    for (_, record) in &records {
        assert_ne!(record.source, "CL:0000812");
        assert_ne!(record.target, "CL:0000812");
        for link in &record.links {
            assert_ne!(link.source.id, "CL:0000812");
            assert_ne!(link.target.id, "CL:0000812");
        }
    }
}

#[test]
fn cyclic_input_terminates_and_reruns_are_idempotent() {
    let source = "\
[Term]
id: GO:0000001
name: a
is_a: GO:0000002 ! b

[Term]
id: GO:0000002
name: b
is_a: GO:0000003 ! c

[Term]
id: GO:0000003
name: c
is_a: GO:0000001 ! a
";
    let (first, _) = run_load(&Config::default(), source);
    let (second, _) = run_load(&Config::default(), source);

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn flushes_follow_the_batch_policy() {
    let config = Config::from_yaml("indexer:\n  batch_size: 2\n").expect("config");
    // The diamond yields 3 + 1 + 1 = 5 records: two batch flushes plus the
    // final one.
    let (records, flushes) = run_load(&config, DIAMOND);
    assert_eq!(records.len(), 5);
    assert_eq!(flushes, 3);
}

#[tokio::test]
async fn jsonl_sink_writes_one_parseable_line_per_record() {
    use ontotree::index::JsonlSink;

    let marker = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock")
        .as_nanos();
    let path = std::env::temp_dir().join(format!("ontotree-{marker}.jsonl"));

    let service = OntologyIndexService::from_config(&Config::default());
    let mut sink = JsonlSink::create(&path).await.expect("create sink");
    let summary = service
        .run(DIAMOND.as_bytes(), &mut sink)
        .await
        .expect("load succeeds");
    drop(sink);

    let content = fs::read_to_string(&path).expect("read output");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len() as u64, summary.records);
    for (position, line) in lines.iter().enumerate() {
        let document: serde_json::Value = serde_json::from_str(line).expect("valid json line");
        assert_eq!(document["id"], position as u64);
        assert!(document["source"].is_string());
        assert!(document["links"].is_array());
    }

    let _ = fs::remove_file(path);
}

#[test]
fn sink_error_display_names_the_record() {
    let err = SinkError::Rejected {
        id: 7,
        reason: "index unavailable".to_owned(),
    };
    assert_eq!(
        err.to_string(),
        "index sink rejected record 7: index unavailable"
    );
}
