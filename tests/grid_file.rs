use std::fs;

use tilescript::parser::load_grid;
use tilescript::processor::{TokenKind, decode, encode};
use tilescript::writer;

#[test]
fn decodes_fixture_grid() {
    let json = fs::read_to_string("tests/two_threads.json").unwrap();
    let grid = load_grid(&json).expect("valid grid");

    assert_eq!(grid.rows(), 7);
    assert_eq!(grid.get(1, 0).map(|t| t.kind), Some(TokenKind::Thread2));

    let scripts = decode(&grid);
    assert_eq!(scripts.text(0), "thread 1\nloop 3 times\nplay 2\nend loop");
    assert_eq!(scripts.text(1), "thread 2\nx = 4\nif x < 5\nplay x\nend if");
    assert_eq!(scripts.text(2), "");
}

#[test]
fn fixture_reencodes_to_same_grid() {
    let json = fs::read_to_string("tests/two_threads.json").unwrap();
    let grid = load_grid(&json).unwrap();

    let script = decode(&grid).flatten();
    let again = encode(&script, grid.config()).expect("re-encode");
    assert_eq!(again, grid);
}

#[test]
fn written_json_loads_back() {
    let grid = encode("thread 3\ndelay 7\ncall function", Default::default()).unwrap();
    let json = writer::grid::to_json(&grid).unwrap();
    assert_eq!(load_grid(&json).unwrap(), grid);
}

#[test]
fn script_writer_emits_thread_files() {
    let out = std::env::temp_dir().join(format!("tilescript-writer-{}", std::process::id()));
    fs::create_dir_all(&out).unwrap();

    let grid = encode("play 1\nthread 2\ndelay 2", Default::default()).unwrap();
    writer::script::emit(&decode(&grid), &out).unwrap();

    assert_eq!(
        fs::read_to_string(out.join("script.txt")).unwrap(),
        "play 1\nthread 2\ndelay 2\n"
    );
    assert_eq!(fs::read_to_string(out.join("thread_1.txt")).unwrap(), "play 1\n");
    assert_eq!(
        fs::read_to_string(out.join("thread_2.txt")).unwrap(),
        "thread 2\ndelay 2\n"
    );
    assert_eq!(fs::read_to_string(out.join("thread_3.txt")).unwrap(), "");

    fs::remove_dir_all(&out).unwrap();
}
