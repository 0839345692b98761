use assert_cmd::prelude::*;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::{tempdir, TempDir};

const ME: &str = "you@example.com";

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str]) {
    assert!(Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn init_git_repo(dir: &Path, email: Option<&str>) {
    fs::create_dir_all(dir).unwrap();
    git(dir, &["init", "-q"]);
    git(dir, &["config", "core.autocrlf", "false"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
    if let Some(email) = email {
        git(dir, &["config", "user.email", email]);
        git(dir, &["config", "user.name", "Your Name"]);
    }
}

fn commit_at(dir: &Path, name: &str, date: &str, message: &str, author: Option<&str>) {
    let path = dir.join(name);
    let mut f = File::create(&path).unwrap();
    f.write_all(message.as_bytes()).unwrap();
    f.sync_all().unwrap();
    git(dir, &["add", "."]);

    let mut cmd = Command::new("git");
    cmd.args(["commit", "-q", "-m", message])
        .env("GIT_AUTHOR_DATE", date)
        .env("GIT_COMMITTER_DATE", date)
        .current_dir(dir);
    if let Some(author) = author {
        cmd.arg(format!("--author={author}"));
    }
    assert!(cmd.status().unwrap().success());
}

/// Run `worklog hours` isolated from the user's global git configuration.
fn worklog(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("worklog").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_CONFIG_GLOBAL", home.path().join("gitconfig"))
        .env_remove("RUST_LOG")
        .arg("hours");
    cmd
}

fn run_json(home: &TempDir, root: &Path) -> serde_json::Value {
    let out = worklog(home)
        .arg(root)
        .args(["--from", "2025-02-01", "--to", "2025-02-07", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn no_repositories_found() {
    let root = tempdir().unwrap();
    let home = tempdir().unwrap();
    fs::create_dir_all(root.path().join("just").join("files")).unwrap();

    let out = worklog(&home)
        .arg(root.path())
        .args(["--from", "2025-02-01"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(String::from_utf8(out).unwrap().trim(), "(no git repos found)");
}

#[test]
fn repositories_below_depth_are_ignored() {
    if !has_git() {
        return;
    }
    let root = tempdir().unwrap();
    let home = tempdir().unwrap();
    init_git_repo(&root.path().join("a").join("b").join("deep"), Some(ME));

    let out = worklog(&home)
        .arg(root.path())
        .args(["--from", "2025-02-01", "--depth", "2"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(String::from_utf8(out).unwrap().trim(), "(no git repos found)");
}

#[test]
fn json_keeps_repositories_without_commits() {
    if !has_git() {
        return;
    }
    let root = tempdir().unwrap();
    let home = tempdir().unwrap();

    let proj = root.path().join("proj");
    init_git_repo(&proj, Some(ME));
    commit_at(&proj, "a.txt", "2025-02-03T09:00:00+00:00", "fix bug", None);
    commit_at(&proj, "b.txt", "2025-02-03T09:45:00+00:00", "add test", None);

    let old = root.path().join("old");
    init_git_repo(&old, Some(ME));
    commit_at(&old, "x.txt", "2024-01-10T10:00:00+00:00", "ancient history", None);

    let v = run_json(&home, root.path());
    let repos = v.as_array().unwrap();
    assert_eq!(repos.len(), 2);

    let by_name = |name: &str| repos.iter().find(|r| r["name"] == name).unwrap().clone();
    let old = by_name("old");
    assert_eq!(old["commits_by_date"], serde_json::json!({}));

    let proj = by_name("proj");
    let day = proj["commits_by_date"]["2025-02-03"].as_array().unwrap();
    let messages: Vec<_> = day.iter().map(|c| c["message"].as_str().unwrap()).collect();
    assert_eq!(messages, vec!["fix bug", "add test"]);
    assert!(day.iter().all(|c| c["author_email"] == ME));
    assert!(day.iter().all(|c| c["hash"].as_str().unwrap().len() == 40));
}

#[test]
fn other_authors_and_duplicate_branches_are_filtered() {
    if !has_git() {
        return;
    }
    let root = tempdir().unwrap();
    let home = tempdir().unwrap();
    let proj = root.path().join("proj");
    init_git_repo(&proj, Some(ME));

    commit_at(&proj, "a.txt", "2025-02-03T09:00:00+00:00", "mine on main", None);
    commit_at(
        &proj,
        "b.txt",
        "2025-02-03T10:00:00+00:00",
        "not mine",
        Some("Other Person <other@example.com>"),
    );
    git(&proj, &["checkout", "-q", "-b", "feature/x"]);
    commit_at(&proj, "c.txt", "2025-02-04T11:00:00+00:00", "mine on feature", None);

    let v = run_json(&home, root.path());
    let days = &v[0]["commits_by_date"];
    let all: Vec<_> = days
        .as_object()
        .unwrap()
        .values()
        .flat_map(|d| d.as_array().unwrap().iter())
        .map(|c| c["message"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(all, vec!["mine on main", "mine on feature"]);
}

#[test]
fn pretty_output_shows_session_blocks() {
    if !has_git() {
        return;
    }
    let root = tempdir().unwrap();
    let home = tempdir().unwrap();
    let proj = root.path().join("proj");
    init_git_repo(&proj, Some(ME));
    commit_at(&proj, "a.txt", "2025-02-03T09:00:00+00:00", "fix bug", None);
    commit_at(&proj, "b.txt", "2025-02-03T09:45:00+00:00", "add test", None);

    let out = worklog(&home)
        .arg(root.path())
        .args(["--from", "2025-02-01", "--to", "2025-02-07"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("📅 2025-02-03"));
    assert!(text.contains("  proj ~45m"));
    assert!(text.contains("09:00 fix bug"));
    assert!(text.contains("09:45 add test"));
}

#[test]
fn missing_identity_fails_without_output() {
    if !has_git() {
        return;
    }
    let root = tempdir().unwrap();
    let home = tempdir().unwrap();
    init_git_repo(&root.path().join("good"), Some(ME));
    init_git_repo(&root.path().join("anon"), None);

    let assert = worklog(&home)
        .arg(root.path())
        .args(["--from", "2025-02-01", "--json"])
        .assert()
        .failure();
    let output = assert.get_output();
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("user.email"));
}

#[test]
fn start_date_is_required_without_a_terminal() {
    let root = tempdir().unwrap();
    let home = tempdir().unwrap();
    let assert = worklog(&home).arg(root.path()).assert().failure();
    assert!(String::from_utf8_lossy(&assert.get_output().stderr).contains("--from"));
}

#[test]
fn inverted_range_is_rejected() {
    let root = tempdir().unwrap();
    let home = tempdir().unwrap();
    worklog(&home)
        .arg(root.path())
        .args(["--from", "2025-02-07", "--to", "2025-02-01"])
        .assert()
        .failure();
}
