use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_shelf"))
}

/// Isolated HOME/XDG directories plus a library path inside them.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(dir.path().join("config")).expect("create config dir");
        std::fs::create_dir_all(dir.path().join("data")).expect("create data dir");
        Self { dir }
    }

    fn library(&self) -> PathBuf {
        self.dir.path().join("books.json")
    }

    fn config_home(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    fn data_home(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    /// Command with a clean environment; `--library` is not added.
    fn bare(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(bin());
        cmd.args(args)
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_DATA_HOME", self.data_home())
            .env_remove("SHELF_PATH")
            .env_remove("SHELF_CONFIG")
            .env_remove("SHELF_LOG")
            .env_remove("NO_COLOR")
            .stdin(Stdio::null());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        let library = self.library();
        let mut full: Vec<&str> = vec!["--library", library.to_str().expect("utf8 path")];
        full.extend_from_slice(args);
        self.bare(&full).output().expect("run shelf")
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "shelf {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("utf8 stdout")
    }

    fn add(&self, title: &str, author: &str, year: &str, genre: &str, read: bool) -> String {
        let mut args = vec![
            "add", "--title", title, "--author", author, "--year", year, "--genre", genre,
        ];
        if read {
            args.push("--read");
        }
        self.run_ok(&args)
    }
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn json_books(stdout: &str) -> Vec<serde_json::Value> {
    let value: serde_json::Value = serde_json::from_str(stdout).expect("valid json");
    value.as_array().expect("json array").clone()
}

fn write_library(path: &Path, contents: &str) {
    std::fs::write(path, contents).expect("write library");
}

#[test]
fn test_catalog_flow() {
    let sandbox = Sandbox::new();

    assert_eq!(sandbox.run_ok(&["list"]), "Library is empty.\n");
    assert_eq!(
        sandbox.run_ok(&["stats"]),
        "Total Books: 0\nBooks Read: 0.00%\n"
    );

    let added = sandbox.add("Dune", "Frank Herbert", "1965", "Sci-Fi", true);
    assert!(added.starts_with("Book added successfully!\n"));
    assert!(added.contains("id=1"));
    assert!(added.contains("title=Dune"));
    sandbox.add(
        "The Left Hand of Darkness",
        "Ursula K. Le Guin",
        "1969",
        "Sci-Fi",
        false,
    );
    sandbox.add("Gilead", "Marilynne Robinson", "2004", "Fiction", true);

    let books = json_books(&sandbox.run_ok(&["list", "--json"]));
    let ids: Vec<u64> = books.iter().map(|b| b["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(books[0]["title"], "Dune");
    assert_eq!(books[0]["read_status"], true);
    assert_eq!(books[2]["genre"], "Fiction");

    let plain = sandbox.run_ok(&["search", "--genre", "sci-fi", "--status", "unread"]);
    assert_eq!(
        plain,
        "2\tThe Left Hand of Darkness\tUrsula K. Le Guin\t1969\tSci-Fi\tno\n"
    );

    let by_year = json_books(&sandbox.run_ok(&["search", "--sort", "year-desc", "--json"]));
    let years: Vec<i64> = by_year
        .iter()
        .map(|b| b["publication_year"].as_i64().unwrap())
        .collect();
    assert_eq!(years, vec![2004, 1969, 1965]);

    let by_term = json_books(&sandbox.run_ok(&["search", "ROBINSON", "--json"]));
    assert_eq!(by_term.len(), 1);
    assert_eq!(by_term[0]["title"], "Gilead");

    assert_eq!(
        sandbox.run_ok(&["search", "nothing-like-this"]),
        "No matching books found.\n"
    );

    let removed = sandbox.run_ok(&["remove", "1"]);
    assert!(removed.starts_with("Book removed successfully!\n"));
    assert_eq!(sandbox.run_ok(&["remove", "99"]), "No book with id 99\n");

    assert_eq!(
        sandbox.run_ok(&["stats"]),
        "Total Books: 2\nBooks Read: 50.00%\n"
    );

    let quiet_id = sandbox.run_ok(&[
        "-q", "add", "--title", "Beloved", "--author", "Toni Morrison", "--year", "1987",
    ]);
    assert_eq!(quiet_id.trim(), "4");

    let stats: serde_json::Value =
        serde_json::from_str(&sandbox.run_ok(&["stats", "--json"])).expect("stats json");
    assert_eq!(stats["total_books"], 3);
    assert_eq!(stats["books_read"], 1);
    assert_eq!(stats["percent_read"], 33.33);
}

#[test]
fn test_library_file_format() {
    let sandbox = Sandbox::new();
    sandbox.add("Dune", "Frank Herbert", "1965", "Sci-Fi", false);
    sandbox.run_ok(&["remove", "1"]);

    let contents = std::fs::read_to_string(sandbox.library()).expect("read library");
    let value: serde_json::Value = serde_json::from_str(&contents).expect("valid json");
    assert_eq!(value["next_id"], 2);
    assert_eq!(value["books"], serde_json::json!([]));
    assert!(contents.contains("\n    \"next_id\": 2"));

    let leftovers: Vec<_> = std::fs::read_dir(sandbox.dir.path())
        .expect("read dir")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn test_legacy_array_file_is_upgraded() {
    let sandbox = Sandbox::new();
    write_library(
        &sandbox.library(),
        r#"[{"id": 7, "title": "Dune", "author": "Frank Herbert",
            "publication_year": 1965, "genre": "Sci-Fi", "read_status": true}]"#,
    );

    let added = sandbox.add("Gilead", "Marilynne Robinson", "2004", "Fiction", false);
    assert!(added.contains("id=8"));

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(sandbox.library()).unwrap()).unwrap();
    assert_eq!(value["next_id"], 9);
    assert_eq!(value["books"].as_array().unwrap().len(), 2);
}

#[test]
fn test_corrupt_library_is_fatal() {
    let sandbox = Sandbox::new();
    write_library(&sandbox.library(), "{ this is not json");

    let output = sandbox.run(&["list"]);
    assert_eq!(output.status.code(), Some(6));
    let err = stderr(&output);
    assert!(err.contains("error=Corrupt library file"));
    assert!(err.contains("hint=Repair or move"));

    // The damaged file is left untouched.
    let contents = std::fs::read_to_string(sandbox.library()).unwrap();
    assert_eq!(contents, "{ this is not json");
}

#[test]
fn test_invalid_filters_exit_with_invalid_input() {
    let sandbox = Sandbox::new();

    let status = sandbox.run(&["search", "--status", "finished"]);
    assert_eq!(status.status.code(), Some(4));
    assert!(stderr(&status).contains("read status"));

    let sort = sandbox.run(&["search", "--sort", "author"]);
    assert_eq!(sort.status.code(), Some(4));

    let format = sandbox.run(&["list", "--json", "--format", "plain"]);
    assert_eq!(format.status.code(), Some(4));
}

#[test]
fn test_add_without_input_requires_fields() {
    let sandbox = Sandbox::new();

    let missing = sandbox.run(&["add", "--title", "Dune", "--no-input"]);
    assert_eq!(missing.status.code(), Some(4));
    assert!(stderr(&missing).contains("hint=shelf add --title"));

    // No terminal to prompt on either.
    let no_tty = sandbox.run(&["add", "--title", "Dune"]);
    assert_eq!(no_tty.status.code(), Some(4));

    let out_of_range = sandbox.run(&[
        "add", "--title", "Dune", "--author", "Frank Herbert", "--year", "3001",
    ]);
    assert!(!out_of_range.status.success());

    assert!(!sandbox.library().exists());
}

#[test]
fn test_empty_text_fields_are_stored_as_given() {
    let sandbox = Sandbox::new();
    let added = sandbox.run_ok(&[
        "add", "--title", "", "--author", "Anonymous", "--year", "2000", "--no-input",
    ]);
    assert!(added.starts_with("Book added successfully!\n"));

    let books = json_books(&sandbox.run_ok(&["list", "--json"]));
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "");
    assert_eq!(books[0]["author"], "Anonymous");
}

#[test]
fn test_search_term_is_not_trimmed() {
    let sandbox = Sandbox::new();
    sandbox.add("Dune", "Herbert", "1965", "", false);
    sandbox.add("The Hobbit", "Tolkien", "1937", "", false);

    let books = json_books(&sandbox.run_ok(&["search", " ", "--json"]));
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "The Hobbit");
}

#[test]
fn test_remove_without_id() {
    let sandbox = Sandbox::new();
    assert_eq!(
        sandbox.run_ok(&["remove"]),
        "No books available to remove.\n"
    );

    let output = sandbox.run(&["remove", "--no-input"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_default_and_configured_library_paths() {
    let sandbox = Sandbox::new();

    let output = sandbox
        .bare(&[
            "add", "--title", "Dune", "--author", "Frank Herbert", "--year", "1965",
        ])
        .output()
        .expect("run shelf");
    assert!(output.status.success());
    assert!(sandbox.data_home().join("shelf").join("library.json").exists());

    let configured = sandbox.dir.path().join("configured.json");
    let config_dir = sandbox.config_home().join("shelf");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        format!("[library]\npath = \"{}\"\n", configured.display()),
    )
    .unwrap();

    let output = sandbox
        .bare(&[
            "add", "--title", "Gilead", "--author", "Marilynne Robinson", "--year", "2004",
        ])
        .output()
        .expect("run shelf");
    assert!(output.status.success());
    let books: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&configured).unwrap()).unwrap();
    assert_eq!(books["books"][0]["title"], "Gilead");
}

#[test]
fn test_missing_explicit_config_is_not_found() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .bare(&["list"])
        .env("SHELF_CONFIG", sandbox.dir.path().join("missing.toml"))
        .output()
        .expect("run shelf");
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("Config file not found"));
}

#[test]
fn test_bare_invocation_without_terminal_prints_quickstart() {
    let sandbox = Sandbox::new();
    let output = sandbox.bare(&[]).output().expect("run shelf");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Quickstart:"));
    assert!(stdout.contains("shelf add"));
}

#[test]
fn test_completions() {
    let sandbox = Sandbox::new();
    let output = sandbox.bare(&["completions", "bash"]).output().expect("run shelf");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("shelf"));
}
