use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;
use std::sync::Once;
use tempfile::{tempdir, TempDir};

#[allow(dead_code)]
static INIT: Once = Once::new();

#[allow(dead_code)]
pub fn setup_test_env() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
            .is_test(true)
            .init();
    });
}

/// A bare "remote" repository and a clone of it with one pushed commit on `main`.
#[allow(dead_code)]
pub struct Fixture {
    dir: TempDir,
    pub remote: PathBuf,
    pub work: PathBuf,
}

#[allow(dead_code)]
impl Fixture {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Clone the remote into a sibling directory, as a second collaborator.
    pub fn clone_remote(&self, name: &str) -> PathBuf {
        let remote = self.remote.to_string_lossy().to_string();
        git(self.path(), &["clone", &remote, name]);
        let clone = self.path().join(name);
        configure_user(&clone);
        clone
    }

    pub fn remote_log_subject(&self) -> String {
        git(&self.remote, &["log", "-1", "--format=%s", "main"])
    }

    pub fn remote_commit_count(&self) -> usize {
        git(&self.remote, &["rev-list", "--count", "main"])
            .parse()
            .expect("rev-list prints a number")
    }
}

#[allow(dead_code)]
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn configure_user(dir: &Path) {
    git(dir, &["config", "user.name", "Test User"]);
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

#[allow(dead_code)]
pub fn setup_remote_and_clone() -> Fixture {
    setup_test_env();

    let dir = tempdir().expect("Failed to create temp directory");
    let remote = dir.path().join("remote.git");
    let work = dir.path().join("work");
    fs::create_dir_all(&remote).expect("Failed to create remote directory");
    fs::create_dir_all(&work).expect("Failed to create work directory");

    git(&remote, &["init", "--bare"]);
    git(&remote, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    git(&work, &["init"]);
    git(&work, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    configure_user(&work);

    fs::write(work.join("README.md"), "# test\n").expect("Failed to write README");
    git(&work, &["add", "README.md"]);
    git(&work, &["commit", "-m", "initial commit"]);
    git(
        &work,
        &["remote", "add", "origin", &remote.to_string_lossy()],
    );
    git(&work, &["push", "-u", "origin", "main"]);

    Fixture { dir, remote, work }
}

/// Install an executable hook script into `repo` (a bare repository).
#[cfg(unix)]
#[allow(dead_code)]
pub fn install_hook(repo: &Path, name: &str, script: &str) {
    use std::os::unix::fs::PermissionsExt;

    let hooks = repo.join("hooks");
    fs::create_dir_all(&hooks).expect("Failed to create hooks directory");
    let hook = hooks.join(name);
    fs::write(&hook, script).expect("Failed to write hook");
    fs::set_permissions(&hook, fs::Permissions::from_mode(0o755))
        .expect("Failed to make hook executable");
}

/// The binary, configured to run non-interactively without retry delays.
#[allow(dead_code)]
pub fn autopush(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("autopush").unwrap();
    cmd.current_dir(dir)
        .env("RUST_LOG", "off")
        .env("CI", "1")
        .env_remove("AUTOPUSH_GIT")
        .args(["--no-pause", "--retry-delay", "0"]);
    cmd
}
