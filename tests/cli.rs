use std::process::{Command, Output};

fn mazegen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mazegen"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run mazegen")
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).unwrap()
}

#[test]
fn default_maze_is_framed() {
    let output = mazegen(&[]);
    assert!(output.status.success());

    let rows: Vec<&str> = stdout(&output).lines().collect();
    assert_eq!(rows.len(), 17);
    assert!(rows.iter().all(|row| row.len() == 17));
    assert_eq!(rows[0], "#".repeat(17));
    assert_eq!(rows[16], "#".repeat(17));
    assert!(rows.iter().all(|row| row.starts_with('#') && row.ends_with('#')));
    for row in rows.iter().skip(1).step_by(2) {
        assert!(row.contains(' '));
    }
}

#[test]
fn default_seed_matches_reference_maze() {
    let output = mazegen(&["-w8", "-h8"]);
    let expected = "\
#################
#           #   #
# ### ##### # # #
#   #   # #   # #
### ### # ##### #
#   # # #     # #
# ### # ### ### #
#     #   #     #
# ####### # #####
# #     # #     #
# # ### # ##### #
# # #     #     #
### ####### #####
# #     # # #   #
# ##### # # # # #
#       #     # #
#################
";
    assert_eq!(stdout(&output), expected);
}

#[test]
fn single_room() {
    let output = mazegen(&["-w1", "-h1", "-r0"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "###\n# #\n###\n");
}

#[test]
fn svg_output() {
    let output = mazegen(&["-rhello", "-w4", "-h4", "-osvg"]);
    assert!(output.status.success());

    let svg = stdout(&output);
    assert!(svg.starts_with("<?xml version='1.0' standalone='no'?>\n"));
    assert!(svg.contains("viewBox='0 0 20 20'"));
    assert!(svg.contains("stroke='black'"));
    assert!(svg.ends_with("</g>\n</svg>\n"));
    for line in svg.lines().filter(|l| l.contains("<line")) {
        let numbers: Vec<u32> = line
            .split('\'')
            .skip(1)
            .step_by(2)
            .map(|v| v.parse().unwrap())
            .collect();
        assert_eq!(numbers.len(), 4);
        assert!(numbers[0] == numbers[2] || numbers[1] == numbers[3]);
    }
}

#[test]
fn svg_options() {
    let output = mazegen(&["-osvg", "-w2", "-h3", "-c", "10", "-p3", "-f#ff0000"]);
    assert!(output.status.success());

    let svg = stdout(&output);
    assert!(svg.contains("viewBox='0 0 20 30'"));
    assert!(svg.contains("stroke-width='3' stroke='#ff0000'"));
}

#[test]
fn repeatable() {
    for args in [&["-rabc", "-w13", "-h7"][..], &["-rabc", "-w13", "-h7", "-osvg"][..]] {
        let a = mazegen(args);
        let b = mazegen(args);
        assert!(a.status.success());
        assert_eq!(a.stdout, b.stdout);
    }
}

#[test]
fn shuffle_modes_differ() {
    let rejection = mazegen(&["-r42", "-w10", "-h10"]);
    let fisher_yates = mazegen(&["-r42", "-w10", "-h10", "--shuffle", "fisher-yates"]);
    assert!(fisher_yates.status.success());
    assert_eq!(stdout(&fisher_yates).lines().count(), 21);
    assert_ne!(rejection.stdout, fisher_yates.stdout);
}

#[test]
fn version() {
    let output = mazegen(&["-v"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("mazegen v{}\n", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn end_of_options() {
    let output = mazegen(&["-w1", "-h1", "--"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "###\n# #\n###\n");
}

#[test]
fn usage_errors() {
    for args in [
        &["-x"][..],
        &["-w"][..],
        &["-wabc"][..],
        &["-w0"][..],
        &["-oxml"][..],
        &["stray"][..],
    ] {
        let output = mazegen(args);
        assert!(!output.status.success(), "{:?}", args);
        assert!(output.stdout.is_empty(), "{:?}", args);
        assert!(!output.stderr.is_empty(), "{:?}", args);
    }
}

#[test]
fn oversized_maze_fails_at_runtime() {
    let output = mazegen(&["-w4294967295", "-h1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
