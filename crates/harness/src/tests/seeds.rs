use crate::seeds::{generate, write_corpus, SeedKind};
use crate::targets::{Outcome, TargetKind};

#[test]
fn serializer_output_loads() {
    for kind in TargetKind::ALL {
        for seed in generate(kind).unwrap() {
            let outcome = kind.target().exercise(&seed.data).unwrap();
            if seed.kind == SeedKind::Valid {
                assert_eq!(outcome, Outcome::Loaded, "{kind}: {:?}", seed.data);
            }
        }
    }
}

#[test]
fn edge_seeds_include_empty_and_garbage() {
    let seeds = generate(TargetKind::JsonPlist).unwrap();
    let edges: Vec<_> = seeds.iter().filter(|s| s.kind == SeedKind::Edge).collect();
    assert_eq!(edges.len(), 3);
    assert!(edges[0].data.is_empty());
    assert_eq!(edges[2].data, b"\xff\x00\x7f");
}

#[test]
fn corpus_files_are_named_by_target() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("corpus");
    let count = write_corpus(&dir, TargetKind::BinaryPlist).unwrap();
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), count);
    assert!(dir.join("bplist-00.bplist").exists());
}
