//! Cleanups that delete well-known directories under the home folder

use crate::engine::actions::files::{remove_all, remove_contents};
use crate::engine::actions::{CleanupAction, Plan, Safety, Unavailable};
use crate::engine::context::RunContext;
use crate::engine::queries::measure_size;
use crate::error::Result;

/// Application caches that rebuild themselves.
const SAFE_CACHES: &[&str] = &[
    "Library/Caches/com.apple.Safari",
    "Library/Caches/com.google.Chrome",
    "Library/Caches/com.microsoft.VSCode",
    "Library/Caches/Homebrew",
    "Library/Caches/pip",
    "Library/Caches/yarn",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Delete what is inside, keep the directory.
    Contents,
    /// Delete the directory itself.
    Whole,
}

#[derive(Debug, Clone)]
pub struct DirectoryCleanup {
    name: &'static str,
    title: &'static str,
    /// Shown as "<missing> not found" when no path exists.
    missing: &'static str,
    paths: &'static [&'static str],
    scope: Scope,
    safety: Safety,
    intent: &'static str,
    done: &'static str,
    prompt: &'static str,
    warning: Option<&'static str>,
    note: Option<&'static str>,
}

impl DirectoryCleanup {
    fn safe(
        name: &'static str,
        title: &'static str,
        missing: &'static str,
        paths: &'static [&'static str],
        intent: &'static str,
        done: &'static str,
    ) -> Self {
        Self {
            name,
            title,
            missing,
            paths,
            scope: Scope::Contents,
            safety: Safety::AutoSafe,
            intent,
            done,
            prompt: "Proceed?",
            warning: None,
            note: None,
        }
    }

    fn gated(mut self, prompt: &'static str) -> Self {
        self.safety = Safety::NeedsConfirmation;
        self.prompt = prompt;
        self
    }

    fn whole(mut self) -> Self {
        self.scope = Scope::Whole;
        self
    }

    pub fn trash() -> Self {
        Self::safe(
            "trash",
            "Emptying Trash",
            "Trash",
            &[".Trash"],
            "empty trash",
            "Trash emptied",
        )
    }

    pub fn user_caches() -> Self {
        Self {
            note: Some("Only cleaning safe application caches"),
            ..Self::safe(
                "user-caches",
                "Cleaning user caches",
                "Application caches",
                SAFE_CACHES,
                "clean user caches",
                "User caches cleaned",
            )
        }
    }

    pub fn xcode_derived_data() -> Self {
        Self::safe(
            "xcode-derived-data",
            "Cleaning Xcode data",
            "Xcode",
            &["Library/Developer/Xcode/DerivedData"],
            "clean Xcode DerivedData",
            "Xcode DerivedData cleaned",
        )
        .gated("Clean Xcode DerivedData? (safe to rebuild)")
    }

    pub fn cocoapods() -> Self {
        Self::safe(
            "cocoapods",
            "Cleaning CocoaPods cache",
            "CocoaPods cache",
            &["Library/Caches/CocoaPods"],
            "clean CocoaPods cache",
            "CocoaPods cache cleaned",
        )
        .gated("Clean CocoaPods cache?")
        .whole()
    }

    pub fn gradle() -> Self {
        Self::safe(
            "gradle",
            "Cleaning Gradle cache",
            "Gradle cache",
            &[".gradle/caches"],
            "clean Gradle cache",
            "Gradle cache cleaned",
        )
        .gated("Clean Gradle cache?")
        .whole()
    }

    pub fn xcode_archives() -> Self {
        Self {
            warning: Some("This may contain important app builds"),
            ..Self::safe(
                "xcode-archives",
                "Cleaning Xcode Archives",
                "Xcode Archives",
                &["Library/Developer/Xcode/Archives"],
                "clean Xcode Archives",
                "Xcode Archives cleaned",
            )
            .gated("Clean Xcode Archives? (cannot be recovered)")
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }
}

impl CleanupAction for DirectoryCleanup {
    fn name(&self) -> &'static str {
        self.name
    }

    fn title(&self) -> &'static str {
        self.title
    }

    fn safety(&self) -> Safety {
        self.safety
    }

    fn intent(&self) -> &'static str {
        self.intent
    }

    fn done(&self) -> &'static str {
        self.done
    }

    fn prompt(&self) -> &'static str {
        self.prompt
    }

    fn warning(&self) -> Option<&'static str> {
        self.warning
    }

    fn plan(&self, ctx: &RunContext<'_>) -> std::result::Result<Plan, Unavailable> {
        let targets: Vec<_> = self
            .paths
            .iter()
            .map(|relative| ctx.home_path(relative))
            .filter(|path| path.exists())
            .collect();

        if targets.is_empty() {
            return Err(Unavailable::not_found(self.missing));
        }

        let mut plan = Plan::new(targets);
        if let Some(note) = self.note {
            plan = plan.note(note);
        }
        if ctx.config.verbose {
            let details: Vec<String> = plan
                .targets
                .iter()
                .map(|path| format!("{} - {}", measure_size(path), path.display()))
                .collect();
            plan.details.extend(details);
        }
        Ok(plan)
    }

    fn execute(&self, plan: &Plan, _ctx: &RunContext<'_>) -> Result<()> {
        match self.scope {
            Scope::Whole => remove_all(plan.targets.iter().cloned()),
            Scope::Contents => {
                let mut first_failure = None;
                for dir in &plan.targets {
                    if let Err(e) = remove_contents(dir) {
                        first_failure.get_or_insert(e);
                    }
                }
                first_failure.map_or(Ok(()), Err)
            }
        }
    }
}
