//! Fixed action sequences per mode

use crate::config::Mode;
use crate::engine::actions::{
    CleanupAction, DirectoryCleanup, Docker, LargeFiles, NodeModules, OldLogs, ToolCache,
};

pub fn standard_actions() -> Vec<Box<dyn CleanupAction>> {
    vec![
        Box::new(DirectoryCleanup::trash()),
        Box::new(ToolCache::homebrew()),
        Box::new(DirectoryCleanup::user_caches()),
        Box::new(ToolCache::npm()),
        Box::new(ToolCache::yarn()),
        Box::new(OldLogs::default()),
        Box::new(DirectoryCleanup::xcode_derived_data()),
        Box::new(LargeFiles::default()),
    ]
}

pub fn deep_actions() -> Vec<Box<dyn CleanupAction>> {
    vec![
        Box::new(NodeModules::default()),
        Box::new(Docker),
        Box::new(DirectoryCleanup::cocoapods()),
        Box::new(DirectoryCleanup::gradle()),
        Box::new(DirectoryCleanup::xcode_archives()),
    ]
}

pub fn actions_for(mode: Mode) -> Vec<Box<dyn CleanupAction>> {
    match mode {
        Mode::Standard => standard_actions(),
        Mode::Deep => deep_actions(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::actions::Safety;

    fn names(actions: &[Box<dyn CleanupAction>]) -> Vec<&'static str> {
        actions.iter().map(|a| a.name()).collect()
    }

    #[test]
    fn test_standard_order() {
        assert_eq!(
            names(&standard_actions()),
            vec![
                "trash",
                "homebrew",
                "user-caches",
                "npm",
                "yarn",
                "old-logs",
                "xcode-derived-data",
                "large-files",
            ]
        );
    }

    #[test]
    fn test_deep_order_is_all_gated() {
        let deep = deep_actions();
        assert_eq!(
            names(&deep),
            vec!["node-modules", "docker", "cocoapods", "gradle", "xcode-archives"]
        );
        assert!(deep.iter().all(|a| a.safety() == Safety::NeedsConfirmation));
    }

    #[test]
    fn test_only_derived_data_is_gated_in_standard() {
        let gated: Vec<_> = standard_actions()
            .into_iter()
            .filter(|a| a.safety() == Safety::NeedsConfirmation)
            .map(|a| a.name())
            .collect();
        assert_eq!(gated, vec!["xcode-derived-data"]);
    }
}
