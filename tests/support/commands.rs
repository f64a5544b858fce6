//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a rewind command pointed at this environment's store and config.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("rewind").expect("failed to find rewind binary");
        cmd.env("REWIND_STORE", self.store_path());
        cmd.env("REWIND_CONFIG", self.config_path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("REWIND_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `rewind set <id> <password>`.
    pub fn set(&self, id: &str, password: &str) -> Output {
        self.cmd()
            .args(["set", id, password])
            .output()
            .expect("failed to run rewind set")
    }

    /// Shortcut for `rewind show <id>`.
    pub fn show(&self, id: &str) -> Output {
        self.cmd()
            .args(["show", id])
            .output()
            .expect("failed to run rewind show")
    }

    /// Shortcut for `rewind show <id> --json --reveal`.
    pub fn show_json(&self, id: &str) -> serde_json::Value {
        let output = self
            .cmd()
            .args(["show", id, "--json", "--reveal"])
            .output()
            .expect("failed to run rewind show --json");
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).expect("show --json output is not JSON")
    }

    /// Shortcut for `rewind restore <id> <index>`.
    pub fn restore(&self, id: &str, index: usize) -> Output {
        self.cmd()
            .args(["restore", id, &index.to_string()])
            .output()
            .expect("failed to run rewind restore")
    }

    /// Shortcut for `rewind clear <id>`.
    pub fn clear(&self, id: &str) -> Output {
        self.cmd()
            .args(["clear", id])
            .output()
            .expect("failed to run rewind clear")
    }

    /// Shortcut for `rewind check <id> <password>`.
    pub fn check(&self, id: &str, password: &str) -> Output {
        self.cmd()
            .args(["check", id, password])
            .output()
            .expect("failed to run rewind check")
    }

    /// Current password of `id` as stored.
    pub fn current_password(&self, id: &str) -> Option<String> {
        self.store_json()
            .as_array()?
            .iter()
            .find(|e| e["id"] == id)?
            .get("data")?
            .get("password")?
            .as_str()
            .map(str::to_string)
    }
}
