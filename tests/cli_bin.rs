use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_naval-setup"))
        .args(args)
        .env("NAVAL_LOG", "off")
        .output()
        .expect("failed to run naval-setup binary")
}

#[test]
fn text_output_lists_ships_then_board() {
    let output = run(&[]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.starts_with("Starting Battleship setup (adventurer level)\n"));
    assert!(stdout.contains("Trying to place ship 4 (Diagonal TR-BL) at (5, 8)...\n"));
    assert!(stdout.contains("Ship 4 (Diagonal TR-BL) placed successfully!"));
    assert!(stdout.contains("=== BATTLESHIP BOARD ==="));
    assert!(stdout.contains("7  0 0 0 0 0 0 3 0 0 0 \n"));
}

#[test]
fn json_output_is_a_report() {
    let output = run(&["--level", "novice", "--format", "json"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["level"], "novice");
    assert_eq!(v["ship_cells"], 6);
    assert_eq!(v["ships"][1]["orientation"], "horizontal");
}
