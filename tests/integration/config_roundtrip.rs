use replybase::composer::Tone;
use replybase::config::{config_file_path, load_or_default, save, AppConfig};

use super::IntegrationHarness;

// Environment-dependent assertions live in one test so parallel tests never
// fight over the workspace override.
#[test]
fn config_lifecycle_under_workspace_override() {
    let harness = IntegrationHarness::new();

    // No file yet: defaults materialize without touching the disk.
    let config = load_or_default().expect("defaults should load");
    assert_eq!(config.default_tone, Tone::Professional);
    assert!(config.clipboard.enabled);
    assert_eq!(config.shell.copied_notice_ms, 2_000);
    let path = config_file_path().expect("config path resolves");
    assert!(path.starts_with(harness.workspace_path()));
    assert!(!path.exists());

    // Saved overrides round-trip through the TOML file.
    let mut updated = AppConfig::default();
    updated.default_tone = Tone::Friendly;
    updated.clipboard.enabled = false;
    updated.shell.copied_notice_ms = 750;
    save(&updated).expect("config should save");
    assert!(path.exists());

    let reloaded = load_or_default().expect("saved config should load");
    assert_eq!(reloaded.default_tone, Tone::Friendly);
    assert!(!reloaded.clipboard.enabled);
    assert_eq!(reloaded.shell.copied_notice_ms, 750);
}
