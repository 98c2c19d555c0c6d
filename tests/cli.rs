use std::fs;
use std::path::PathBuf;
use std::process::Command;

// temporary directory removed when dropped
struct Scratch(PathBuf);

impl Scratch {
    fn join(&self, file: &str) -> PathBuf {
        self.0.join(file)
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn scratch(name: &str) -> Scratch {
    let dir = std::env::temp_dir().join(format!("sufrank-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    Scratch(dir)
}

fn run(dir: &Scratch, text: &str, positions: &str, extra: &[&str]) -> std::process::Output {
    fs::write(dir.join("text.txt"), text).unwrap();
    fs::write(dir.join("positions.txt"), positions).unwrap();
    Command::new(env!("CARGO_BIN_EXE_suffix_rank"))
        .arg(dir.join("text.txt"))
        .arg(dir.join("positions.txt"))
        .arg("-o")
        .arg(dir.join("out.txt"))
        .args(extra)
        .output()
        .unwrap()
}

#[test]
fn test_banana_ranks_file() {
    let dir = scratch("banana");
    let out = run(&dir, "banana\n", "1\n6\n7\n\n3\n", &["--verify"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let ranks = fs::read_to_string(dir.join("out.txt")).unwrap();
    assert_eq!(ranks, "5\n2\n1\n7\n");
}

#[test]
fn test_mississippi_all_positions() {
    let dir = scratch("mississippi");
    let positions: String = (1..=12).map(|p| format!("{}\n", p)).collect();
    let out = run(&dir, "mississippi", &positions, &[]);
    assert!(out.status.success());
    let ranks = fs::read_to_string(dir.join("out.txt")).unwrap();
    let ranks: Vec<usize> = ranks.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(ranks, vec![6, 5, 12, 10, 4, 11, 9, 3, 8, 7, 2, 1]);
}

#[test]
fn test_dump_tree() {
    let dir = scratch("dump");
    let out = run(&dir, "aa", "1\n", &["--dump-tree"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "(root)\n  $ [2]\n  a\n    $ [1]\n    a$ [0]\n"
    );
}

#[test]
fn test_failures_exit_nonzero() {
    let dir = scratch("bad-symbol");
    assert!(!run(&dir, "ban\x07ana", "1\n", &[]).status.success());
    let dir = scratch("bad-offset");
    assert!(!run(&dir, "banana", "0\n", &[]).status.success());
    let dir = scratch("bad-number");
    assert!(!run(&dir, "banana", "one\n", &[]).status.success());
}

#[test]
fn test_scratch_is_removed() {
    let dir = scratch("cleanup");
    let path = dir.0.clone();
    assert!(run(&dir, "abc", "1\n", &[]).status.success());
    assert!(path.join("out.txt").exists());
    drop(dir);
    assert!(!path.exists());
}
