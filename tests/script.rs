//! Script parsing and execution

mod common;

use avlviz::script::{run_script, ScriptError};
use common::*;

const DEMO: &str = "\
# three inserts trigger a single left rotation
insert 10 20 30
insert 20
print inorder
print preorder
search 30
search 99
delete 10 99
undo
print postorder
stats
";

#[test]
fn demo_script_output() {
    let mut session = new_session();
    let lines = run_script(&mut session, DEMO).expect("script parses");

    assert_eq!(lines[0], "insert 10: inserted");
    assert_eq!(lines[1], "insert 20: inserted");
    assert_eq!(lines[2], "insert 30: inserted, rotations RR");
    assert_eq!(lines[3], "insert 20: duplicate, ignored");
    assert_eq!(lines[4], "inorder: 10 20 30");
    assert_eq!(lines[5], "preorder: 20 10 30");
    assert!(lines[6].starts_with("search 30: found node-"));
    assert_eq!(lines[7], "search 99: not found");
    assert_eq!(lines[8], "delete 10: deleted");
    assert_eq!(lines[9], "delete 99: not found");
    // Undo steps back over `delete 99` only
    assert_eq!(lines[10], "undo: size=2");
    assert_eq!(lines[11], "postorder: 30 20");
    assert_eq!(
        lines[12],
        "size=2\theight=2\toperations=8\tcursor=6\tcan_undo=true\tcan_redo=true"
    );
}

#[test]
fn layout_command_lists_nodes_then_bounds() {
    let mut session = new_session();
    let lines = run_script(&mut session, "insert 2 1 3\nlayout").expect("script parses");

    let layout: Vec<_> = lines.iter().skip(3).collect();
    assert_eq!(layout.len(), 4);
    assert!(layout[0].contains("key=2\tx=0.0\ty=50.0\tlevel=0"));
    assert!(layout[1].contains("key=1\tx=-40.0\ty=150.0\tlevel=1"));
    assert!(layout[2].contains("key=3\tx=40.0\ty=150.0\tlevel=1"));
    assert_eq!(
        layout[3].as_str(),
        "bounds\tmin_x=-40.0\tmin_y=50.0\twidth=140.0\theight=160.0\tedges=2"
    );
}

#[test]
fn parse_error_runs_nothing() {
    let mut session = new_session();
    let err = run_script(&mut session, "insert 1\ninsert two\n").expect_err("bad key");
    assert_eq!(
        err,
        ScriptError::InvalidKey {
            line: 2,
            token: "two".to_string()
        }
    );
    assert_eq!(err.to_string(), "line 2: invalid key 'two'");
    assert!(session.history().is_empty());
}

#[test]
fn boundary_messages() {
    let mut session = new_session();
    let lines = run_script(&mut session, "undo\nredo\ninsert -5\nclear\nstats").expect("parses");
    assert_eq!(
        lines,
        vec![
            "undo: nothing to undo",
            "redo: nothing to redo",
            "insert -5: inserted",
            "clear",
            "size=0\theight=0\toperations=2\tcursor=1\tcan_undo=true\tcan_redo=false",
        ]
    );
}
